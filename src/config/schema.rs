//! Configuration schema types
//!
//! This module defines the configuration structure for the batch import client.

use crate::config::SecretString;
use crate::domain::{ClientCredentials, FormatPolicy, CLIENT_CREDENTIALS_GRANT};
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchImportConfig {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Identity endpoint and client credentials
    pub auth: AuthConfig,

    /// Batch import API settings
    pub batch: BatchApiConfig,

    /// Shared HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BatchImportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.auth.validate()?;
        self.batch.validate()?;
        self.http.validate(&self.environment)?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Identity endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth2 token endpoint
    pub token_url: String,

    /// Client identifier registered with the identity provider
    pub client_id: String,

    /// Client secret
    /// Stored securely in memory and automatically zeroized on drop
    pub client_secret: SecretString,

    /// Grant type sent with the token request
    #[serde(default = "default_grant_type")]
    pub grant_type: String,

    /// Space-delimited scopes requested for the token
    #[serde(default)]
    pub scopes: String,
}

impl AuthConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("auth.token_url", &self.token_url)?;

        if self.client_id.trim().is_empty() {
            return Err("auth.client_id cannot be empty".to_string());
        }

        if self.client_secret.expose_secret().is_empty() {
            return Err("auth.client_secret cannot be empty".to_string());
        }

        if self.grant_type.trim().is_empty() {
            return Err("auth.grant_type cannot be empty".to_string());
        }

        Ok(())
    }

    /// Builds the credentials sent to the token endpoint
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials::new(self.client_id.clone(), self.client_secret.clone())
            .with_grant_type(self.grant_type.clone())
            .with_scopes(self.scopes.clone())
    }
}

/// Batch import API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchApiConfig {
    /// Batch import endpoint
    pub api_url: String,

    /// Default for the envelope's `UpdateNull` flag
    #[serde(default)]
    pub update_null: bool,

    /// Accepted format tags; empty means any tag is passed through
    #[serde(default)]
    pub allowed_formats: Vec<String>,
}

impl BatchApiConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("batch.api_url", &self.api_url)?;

        if self.allowed_formats.iter().any(|f| f.trim().is_empty()) {
            return Err("batch.allowed_formats cannot contain empty values".to_string());
        }

        Ok(())
    }

    /// Format policy derived from `allowed_formats`
    pub fn format_policy(&self) -> FormatPolicy {
        FormatPolicy::from_allowed(&self.allowed_formats)
    }
}

/// HTTP transport configuration shared by both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: Disabling TLS verification exposes both the client
    /// secret and the bearer token to man-in-the-middle attacks. It is rejected
    /// in production environments.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl HttpConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("http.timeout_seconds must be greater than 0".to_string());
        }

        if self.connect_timeout_seconds == 0 {
            return Err("http.connect_timeout_seconds must be greater than 0".to_string());
        }

        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments. \
                Set 'tls_verify = true' or use environment = \"development\" for local testing."
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            tls_verify: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let parsed = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "{field} must use http:// or https:// (found '{other}')"
        )),
    }
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_grant_type() -> String {
    CLIENT_CREDENTIALS_GRANT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
