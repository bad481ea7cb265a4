//! Batch submission models
//!
//! [`SubmissionInput`] is what the caller hands in, [`BatchRequest`] is what
//! gets serialized for the batch API, and [`BatchOutcome`] is what comes back
//! for display.

use super::format::BatchFormat;
use serde::Serialize;
use std::fmt;

/// Raw values supplied by the caller for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    /// XML body; `None` is submitted as an empty payload
    pub xml: Option<String>,

    /// Original file name of the payload
    pub filename: Option<String>,

    /// Caller-side reference echoed back by the batch API
    pub external_reference: Option<String>,

    /// Unparsed format tag
    pub format: Option<String>,

    /// Whether null values in the batch overwrite existing data downstream
    pub update_null: bool,
}

impl SubmissionInput {
    /// Creates an input carrying only the XML body
    pub fn new(xml: impl Into<String>) -> Self {
        Self {
            xml: Some(xml.into()),
            ..Self::default()
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_update_null(mut self, update_null: bool) -> Self {
        self.update_null = update_null;
        self
    }
}

/// Batch import request envelope
///
/// Serializes to the wire representation expected by the batch API. All keys
/// are always present; absent optional values are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchRequest {
    /// Base64 of the UTF-8 payload bytes
    #[serde(rename = "Data")]
    pub payload: String,

    pub update_null: bool,

    pub format: Option<BatchFormat>,

    pub filename: Option<String>,

    pub external_reference: Option<String>,
}

/// Workflow step a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Request assembly, before any network call
    Input,
    /// Client-credentials exchange
    Token,
    /// Batch API call
    Submit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Input => "input",
            Phase::Token => "token",
            Phase::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// Structured description of a failed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub phase: Phase,

    /// HTTP status of the failing call, when a response was received
    pub status: Option<u16>,

    pub message: String,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// Final result of one submission, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The batch API accepted the request; `body` is its raw response
    Accepted { body: String },

    /// One of the phases failed
    Failed(FailureReport),
}

impl BatchOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BatchOutcome::Accepted { .. })
    }

    /// Phase that failed, if any
    pub fn failed_phase(&self) -> Option<Phase> {
        match self {
            BatchOutcome::Accepted { .. } => None,
            BatchOutcome::Failed(report) => Some(report.phase),
        }
    }

    /// Human-readable message for the caller
    pub fn message(&self) -> String {
        match self {
            BatchOutcome::Accepted { body } => format!("API Response: {body}"),
            BatchOutcome::Failed(report) => report.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormatPolicy;
    use serde_json::json;

    #[test]
    fn test_submission_input_builder() {
        let input = SubmissionInput::new("<a/>")
            .with_filename("f.xml")
            .with_external_reference("ref1")
            .with_format("Xml")
            .with_update_null(true);

        assert_eq!(input.xml.as_deref(), Some("<a/>"));
        assert_eq!(input.filename.as_deref(), Some("f.xml"));
        assert_eq!(input.external_reference.as_deref(), Some("ref1"));
        assert_eq!(input.format.as_deref(), Some("Xml"));
        assert!(input.update_null);
    }

    #[test]
    fn test_batch_request_wire_shape() {
        let request = BatchRequest {
            payload: "PGEvPg==".to_string(),
            update_null: false,
            format: FormatPolicy::Passthrough.parse("Xml").unwrap(),
            filename: Some("f.xml".to_string()),
            external_reference: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "Data": "PGEvPg==",
                "UpdateNull": false,
                "Format": "Xml",
                "Filename": "f.xml",
                "ExternalReference": null
            })
        );
    }

    #[test]
    fn test_outcome_messages() {
        let accepted = BatchOutcome::Accepted {
            body: r#"{"id":"123"}"#.to_string(),
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.failed_phase(), None);
        assert_eq!(accepted.message(), r#"API Response: {"id":"123"}"#);

        let failed = BatchOutcome::Failed(FailureReport {
            phase: Phase::Token,
            status: Some(401),
            message: "Token error: denied".to_string(),
        });
        assert!(!failed.is_accepted());
        assert_eq!(failed.failed_phase(), Some(Phase::Token));
        assert_eq!(failed.message(), "Token error: denied");
    }

    #[test]
    fn test_failure_report_display_names_phase() {
        let report = FailureReport {
            phase: Phase::Submit,
            status: None,
            message: "Error calling API: timed out".to_string(),
        };
        assert_eq!(report.to_string(), "[submit] Error calling API: timed out");
    }
}
