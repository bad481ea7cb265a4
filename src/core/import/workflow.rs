//! Import workflow - authenticated batch submission
//!
//! One submission runs three steps in order and stops at the first failure:
//!
//! 1. **Assemble** the batch envelope from the caller's input (no network)
//! 2. **Authenticate** with the client-credentials grant
//! 3. **Submit** the envelope with the freshly granted bearer token
//!
//! The batch API is never called without a token obtained in the same run.

use crate::adapters::batch_api::BatchSubmitter;
use crate::adapters::http::build_http_client;
use crate::adapters::identity::TokenAcquirer;
use crate::config::BatchImportConfig;
use crate::core::import::payload::build_request;
use crate::domain::{
    AuthError, BatchOutcome, ClientCredentials, FormatPolicy, Phase, Result, SubmissionInput,
    WorkflowError,
};
use crate::{log_phase_failure, log_submission_complete};
use reqwest::Client;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Runs token acquisition followed by batch submission
///
/// Holds no per-submission state, so one instance can serve any number of
/// sequential submissions.
///
/// # Example
///
/// ```rust,no_run
/// use batch_import_client::config::load_config;
/// use batch_import_client::core::import::ImportWorkflow;
/// use batch_import_client::domain::SubmissionInput;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config("batch-import.toml")?;
/// let workflow = ImportWorkflow::new(&config)?;
///
/// let input = SubmissionInput::new("<a/>").with_filename("f.xml");
/// let outcome = workflow.submit(&input).await;
/// println!("{}", outcome.message());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImportWorkflow {
    credentials: ClientCredentials,
    token_url: String,
    batch_url: String,
    format_policy: FormatPolicy,
    acquirer: TokenAcquirer,
    submitter: BatchSubmitter,
}

impl ImportWorkflow {
    /// Creates a workflow with an HTTP client built from `config.http`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &BatchImportConfig) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a workflow on top of an existing HTTP client
    pub fn with_client(config: &BatchImportConfig, client: Client) -> Self {
        Self {
            credentials: config.auth.credentials(),
            token_url: config.auth.token_url.clone(),
            batch_url: config.batch.api_url.clone(),
            format_policy: config.batch.format_policy(),
            acquirer: TokenAcquirer::new(client.clone()),
            submitter: BatchSubmitter::new(client),
        }
    }

    /// Runs one submission and returns the raw batch API response body
    ///
    /// # Errors
    ///
    /// A [`WorkflowError`] naming the failing phase. Input and token failures
    /// mean the batch API was not called.
    pub async fn try_submit(
        &self,
        input: &SubmissionInput,
    ) -> std::result::Result<String, WorkflowError> {
        let span = tracing::info_span!("batch_submission", submission_id = %Uuid::new_v4());
        self.run(input).instrument(span).await
    }

    /// Runs one submission and converts every failure into a report
    ///
    /// Never returns an error: the outcome is ready for display either way.
    pub async fn submit(&self, input: &SubmissionInput) -> BatchOutcome {
        match self.try_submit(input).await {
            Ok(body) => BatchOutcome::Accepted { body },
            Err(e) => BatchOutcome::Failed(e.into_report()),
        }
    }

    /// Performs only the token exchange
    ///
    /// The token is dropped right away; this exists to check credentials and
    /// connectivity.
    ///
    /// # Errors
    ///
    /// The [`AuthError`] from the identity endpoint.
    pub async fn check_auth(&self) -> std::result::Result<(), AuthError> {
        self.acquirer
            .acquire(&self.credentials, &self.token_url)
            .await
            .map(|_| ())
    }

    async fn run(&self, input: &SubmissionInput) -> std::result::Result<String, WorkflowError> {
        let start_time = Instant::now();

        let request = build_request(input, &self.format_policy).map_err(|e| {
            log_phase_failure!(Phase::Input, None::<u16>, e);
            WorkflowError::Input(e)
        })?;

        let token = self
            .acquirer
            .acquire(&self.credentials, &self.token_url)
            .await
            .map_err(|e| {
                log_phase_failure!(Phase::Token, e.status(), e);
                WorkflowError::Token(e)
            })?;

        let body = self
            .submitter
            .submit(&token, &request, &self.batch_url)
            .await
            .map_err(|e| {
                log_phase_failure!(Phase::Submit, e.status, e);
                WorkflowError::Submit(e)
            })?;

        log_submission_complete!(body.len(), start_time.elapsed());

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        secret_string, ApplicationConfig, AuthConfig, BatchApiConfig, Environment, HttpConfig,
        LoggingConfig,
    };

    fn config(token_url: &str, batch_url: &str, allowed_formats: Vec<String>) -> BatchImportConfig {
        BatchImportConfig {
            environment: Environment::Development,
            application: ApplicationConfig::default(),
            auth: AuthConfig {
                token_url: token_url.to_string(),
                client_id: "import-client".to_string(),
                client_secret: secret_string("secret".to_string()),
                grant_type: "client_credentials".to_string(),
                scopes: "batch.import".to_string(),
            },
            batch: BatchApiConfig {
                api_url: batch_url.to_string(),
                update_null: false,
                allowed_formats,
            },
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_unknown_format_stops_before_network() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/token")
            .expect(0)
            .create_async()
            .await;
        let batch_mock = server
            .mock("POST", "/batch")
            .expect(0)
            .create_async()
            .await;

        let config = config(
            &format!("{}/token", server.url()),
            &format!("{}/batch", server.url()),
            vec!["Xml".to_string()],
        );
        let workflow = ImportWorkflow::new(&config).unwrap();

        let err = workflow
            .try_submit(&SubmissionInput::new("<a/>").with_format("Csv"))
            .await
            .unwrap_err();

        assert_eq!(err.phase(), Phase::Input);
        assert!(err.to_string().contains("Unknown format 'Csv'"));
        token_mock.assert_async().await;
        batch_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_auth_does_not_touch_batch_api() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"access_token":"abc"}"#)
            .expect(1)
            .create_async()
            .await;
        let batch_mock = server
            .mock("POST", "/batch")
            .expect(0)
            .create_async()
            .await;

        let config = config(
            &format!("{}/token", server.url()),
            &format!("{}/batch", server.url()),
            Vec::new(),
        );
        let workflow = ImportWorkflow::new(&config).unwrap();

        assert!(workflow.check_auth().await.is_ok());
        token_mock.assert_async().await;
        batch_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_each_submission_requests_a_fresh_token() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"access_token":"abc"}"#)
            .expect(2)
            .create_async()
            .await;
        let batch_mock = server
            .mock("POST", "/batch")
            .with_status(200)
            .with_body("ok")
            .expect(2)
            .create_async()
            .await;

        let config = config(
            &format!("{}/token", server.url()),
            &format!("{}/batch", server.url()),
            Vec::new(),
        );
        let workflow = ImportWorkflow::new(&config).unwrap();

        for _ in 0..2 {
            let outcome = workflow.submit(&SubmissionInput::new("<a/>")).await;
            assert!(outcome.is_accepted());
        }

        token_mock.assert_async().await;
        batch_mock.assert_async().await;
    }
}
