//! Domain models and types for the batch import client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Credentials** ([`ClientCredentials`], [`AccessToken`]) with secrets kept out of logs
//! - **Batch models** ([`SubmissionInput`], [`BatchRequest`], [`BatchOutcome`])
//! - **Format handling** ([`BatchFormat`], [`FormatPolicy`])
//! - **Error types** ([`BatchImportError`], [`AuthError`], [`SubmitError`], [`WorkflowError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Token acquisition and batch submission fail with their own error types so
//! the failing phase is always visible to the caller:
//!
//! ```rust
//! use batch_import_client::domain::{AuthError, SubmitError};
//!
//! let auth = AuthError::Status { status: 401, body: "invalid_client".to_string() };
//! assert!(auth.to_string().contains("401"));
//!
//! let submit = SubmitError::from_status(500, "500 Internal Server Error");
//! assert_eq!(submit.status, Some(500));
//! ```

pub mod batch;
pub mod credentials;
pub mod errors;
pub mod format;
pub mod result;

// Re-export commonly used types for convenience
pub use batch::{BatchOutcome, BatchRequest, FailureReport, Phase, SubmissionInput};
pub use credentials::{AccessToken, ClientCredentials, CLIENT_CREDENTIALS_GRANT};
pub use errors::{AuthError, BatchImportError, SubmitError, WorkflowError};
pub use format::{BatchFormat, FormatPolicy};
pub use result::Result;
