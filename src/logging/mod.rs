//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Configurable log levels (`RUST_LOG` wins over the configured level)
//! - Human-readable console output on stderr
//! - Optional JSON file logging with rotation
//!
//! Client secrets and bearer tokens are never recorded as fields.
//!
//! # Example
//!
//! ```no_run
//! use batch_import_client::logging::init_logging;
//! use batch_import_client::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a failed workflow phase with its HTTP status, if any
///
/// # Example
///
/// ```no_run
/// use batch_import_client::log_phase_failure;
/// use batch_import_client::domain::Phase;
///
/// log_phase_failure!(Phase::Token, Some(401u16), "Failed to retrieve token");
/// ```
#[macro_export]
macro_rules! log_phase_failure {
    ($phase:expr, $status:expr, $message:expr) => {
        tracing::error!(
            phase = %$phase,
            status = ?$status,
            error = %$message,
            "Batch import phase failed"
        );
    };
}

/// Log the completion of a submission
///
/// # Example
///
/// ```no_run
/// use batch_import_client::log_submission_complete;
/// use std::time::Duration;
///
/// log_submission_complete!(42usize, Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_submission_complete {
    ($response_bytes:expr, $duration:expr) => {
        tracing::info!(
            response_bytes = $response_bytes,
            duration_ms = $duration.as_millis() as u64,
            "Batch submission accepted"
        );
    };
}
