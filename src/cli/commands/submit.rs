//! Submit command implementation
//!
//! Reads an XML document, wraps it in a batch envelope and sends it to the
//! batch import API with a freshly acquired bearer token.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUBMIT_ERROR, EXIT_SUCCESS, EXIT_TOKEN_ERROR};
use crate::config::load_config;
use crate::core::import::ImportWorkflow;
use crate::domain::{BatchOutcome, Phase, SubmissionInput};
use clap::Args;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads the payload from standard input
const STDIN_MARKER: &str = "-";

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// File with the XML payload, or "-" for stdin (empty payload when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// File name reported to the batch API
    #[arg(long)]
    pub filename: Option<String>,

    /// Caller-supplied correlation identifier
    #[arg(long)]
    pub external_reference: Option<String>,

    /// Format tag for the payload
    #[arg(long)]
    pub format: Option<String>,

    /// Ask the batch API to apply null field values
    #[arg(long)]
    pub update_null: bool,
}

impl SubmitArgs {
    /// Execute the submit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting batch submission");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let xml = match self.read_payload().await {
            Ok(xml) => xml,
            Err(e) => {
                eprintln!("❌ Failed to read payload: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let input = self.submission_input(xml, config.batch.update_null);
        let workflow = ImportWorkflow::new(&config)?;

        let outcome = workflow.submit(&input).await;
        Ok(report_outcome(&outcome))
    }

    /// Builds the workflow input; the flag and the config default are OR-ed
    fn submission_input(&self, xml: Option<String>, default_update_null: bool) -> SubmissionInput {
        SubmissionInput {
            xml,
            filename: self.filename.clone(),
            external_reference: self.external_reference.clone(),
            format: self.format.clone(),
            update_null: self.update_null || default_update_null,
        }
    }

    async fn read_payload(&self) -> std::io::Result<Option<String>> {
        match self.input.as_deref() {
            None => Ok(None),
            Some(STDIN_MARKER) => {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                Ok(Some(buffer))
            }
            Some(path) => tokio::fs::read_to_string(Path::new(path)).await.map(Some),
        }
    }
}

/// Prints the outcome and maps it to a process exit code
fn report_outcome(outcome: &BatchOutcome) -> i32 {
    match outcome {
        BatchOutcome::Accepted { .. } => {
            println!("✅ {}", outcome.message());
            EXIT_SUCCESS
        }
        BatchOutcome::Failed(report) => {
            eprintln!("❌ {}", report.message);
            exit_code_for(report.phase)
        }
    }
}

fn exit_code_for(phase: Phase) -> i32 {
    match phase {
        Phase::Input => EXIT_CONFIG_ERROR,
        Phase::Token => EXIT_TOKEN_ERROR,
        Phase::Submit => EXIT_SUBMIT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureReport;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(input: Option<&str>) -> SubmitArgs {
        SubmitArgs {
            input: input.map(str::to_string),
            filename: Some("f.xml".to_string()),
            external_reference: None,
            format: None,
            update_null: false,
        }
    }

    #[tokio::test]
    async fn test_missing_input_is_empty_payload() {
        assert_eq!(args(None).read_payload().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reads_payload_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<a/>").unwrap();

        let path = file.path().to_str().unwrap();
        let xml = args(Some(path)).read_payload().await.unwrap();
        assert_eq!(xml.as_deref(), Some("<a/>"));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_an_error() {
        let result = args(Some("/nonexistent/batch.xml")).read_payload().await;
        assert!(result.is_err());
    }

    #[test]
    fn test_update_null_uses_config_default() {
        let input = args(None).submission_input(None, true);
        assert!(input.update_null);
        assert_eq!(input.filename.as_deref(), Some("f.xml"));

        let input = args(None).submission_input(None, false);
        assert!(!input.update_null);
    }

    #[test]
    fn test_exit_codes_follow_failing_phase() {
        assert_eq!(exit_code_for(Phase::Input), EXIT_CONFIG_ERROR);
        assert_eq!(exit_code_for(Phase::Token), EXIT_TOKEN_ERROR);
        assert_eq!(exit_code_for(Phase::Submit), EXIT_SUBMIT_ERROR);

        let accepted = BatchOutcome::Accepted {
            body: "{}".to_string(),
        };
        assert_eq!(report_outcome(&accepted), EXIT_SUCCESS);

        let failed = BatchOutcome::Failed(FailureReport {
            phase: Phase::Token,
            status: Some(401),
            message: "denied".to_string(),
        });
        assert_eq!(report_outcome(&failed), EXIT_TOKEN_ERROR);
    }
}
