//! Shared HTTP transport
//!
//! One `reqwest::Client` is built per workflow and cloned into both
//! components. It carries timeouts and TLS settings only: no default headers,
//! so nothing about one request leaks into the next.

use crate::config::HttpConfig;
use crate::domain::{BatchImportError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Builds the HTTP client used for the token and batch calls
///
/// # Errors
///
/// Returns a configuration error if the TLS backend cannot be initialized.
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(concat!("batch-import-client/", env!("CARGO_PKG_VERSION")));

    if !config.tls_verify {
        tracing::warn!(
            "TLS certificate verification is DISABLED. The client secret and bearer tokens \
            can be intercepted; only use this against local test servers."
        );
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(|e| {
        BatchImportError::Configuration(format!("Failed to create HTTP client: {e}"))
    })
}

/// Renders a transport-level failure for display
pub(crate) fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
