//! Domain error types
//!
//! This module defines the error hierarchy for the batch import client.
//! The two network phases (token acquisition and batch submission) each have
//! their own error type so they are never conflated. None of these types
//! expose third-party HTTP client types.

use super::batch::{FailureReport, Phase};
use thiserror::Error;

/// Main application error type
///
/// Used for configuration, I/O and request assembly failures. Network phase
/// failures use [`AuthError`] and [`SubmitError`] instead.
#[derive(Debug, Error)]
pub enum BatchImportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A format tag that is not part of the configured set
    #[error("Unknown format '{value}'. Allowed formats: {allowed}")]
    UnknownFormat { value: String, allowed: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Token acquisition errors
///
/// Raised by the client-credentials exchange against the identity endpoint.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity endpoint answered with a non-success status
    #[error("Failed to retrieve token. Status code: {status}. Error: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, timeout)
    #[error("HTTP request error: {0}")]
    Transport(String),

    /// The response body was not JSON or carried no usable `access_token`
    #[error("Failed to parse token response: {0}")]
    Parse(String),
}

impl AuthError {
    /// HTTP status returned by the identity endpoint, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Batch submission error
///
/// Any failure of the batch call collapses into this single category: the
/// downstream API's error responses are not classified further.
#[derive(Debug, Error)]
#[error("Error calling API: {message}")]
pub struct SubmitError {
    /// HTTP status of the batch call when a response was received
    pub status: Option<u16>,

    /// Status line and body, or the transport error text
    pub message: String,
}

impl SubmitError {
    /// Creates an error for a batch call that returned a non-success status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates an error for a batch call that failed before a response arrived
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Failure of one submission, tagged with the phase that failed
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The input could not be turned into a batch request; nothing was sent
    #[error("Invalid submission: {0}")]
    Input(BatchImportError),

    /// The token exchange failed; the batch API was not called
    #[error("Token error: {0}")]
    Token(#[from] AuthError),

    /// A token was granted but the batch call failed
    #[error("{0}")]
    Submit(#[from] SubmitError),
}

impl WorkflowError {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowError::Input(_) => Phase::Input,
            WorkflowError::Token(_) => Phase::Token,
            WorkflowError::Submit(_) => Phase::Submit,
        }
    }

    /// HTTP status of the failing call, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            WorkflowError::Input(_) => None,
            WorkflowError::Token(e) => e.status(),
            WorkflowError::Submit(e) => e.status,
        }
    }

    /// Converts the error into a displayable report
    pub fn into_report(self) -> FailureReport {
        FailureReport {
            phase: self.phase(),
            status: self.status(),
            message: self.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        BatchImportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BatchImportError {
    fn from(err: serde_json::Error) -> Self {
        BatchImportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BatchImportError {
    fn from(err: toml::de::Error) -> Self {
        BatchImportError::Configuration(format!("TOML parse error: {err}"))
    }
}
