//! OAuth2 client-credentials token acquisition

use super::models::{TokenRequest, TokenResponse};
use crate::adapters::http::describe_transport_error;
use crate::domain::{AccessToken, AuthError, ClientCredentials};
use reqwest::Client;

/// Exchanges static client credentials for a bearer token
///
/// Every call performs one live request: there is no caching and no retry.
///
/// # Example
///
/// ```no_run
/// use batch_import_client::adapters::http::build_http_client;
/// use batch_import_client::adapters::identity::TokenAcquirer;
/// use batch_import_client::config::{secret_string, HttpConfig};
/// use batch_import_client::domain::ClientCredentials;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let acquirer = TokenAcquirer::new(build_http_client(&HttpConfig::default())?);
/// let credentials = ClientCredentials::new("import-client", secret_string("secret".to_string()))
///     .with_scopes("batch.import");
///
/// let token = acquirer
///     .acquire(&credentials, "https://identity.example.com/connect/token")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TokenAcquirer {
    client: Client,
}

impl TokenAcquirer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Requests a token from `token_url` with a form-encoded
    /// client-credentials grant
    ///
    /// # Errors
    ///
    /// - [`AuthError::Transport`] when no response was received
    /// - [`AuthError::Status`] when the endpoint answers with a non-success status
    /// - [`AuthError::Parse`] when the body carries no usable `access_token`
    pub async fn acquire(
        &self,
        credentials: &ClientCredentials,
        token_url: &str,
    ) -> Result<AccessToken, AuthError> {
        tracing::debug!(
            token_url = %token_url,
            client_id = %credentials.client_id(),
            grant_type = %credentials.grant_type(),
            scopes = %credentials.scopes(),
            "Requesting access token"
        );

        let response = self
            .client
            .post(token_url)
            .form(&TokenRequest::from_credentials(credentials))
            .send()
            .await
            .map_err(|e| AuthError::Transport(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(format!("failed to read token response: {e}")))?;

        let token = TokenResponse::parse(&body)?;

        tracing::info!(status = %status, "Access token acquired");

        Ok(token)
    }
}
