//! Validate config command implementation
//!
//! Loads the configuration file and prints a summary with secrets withheld.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{load_config, BatchImportConfig};
use crate::domain::FormatPolicy;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                for line in summary_lines(&config) {
                    println!("  {line}");
                }
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_CONFIG_ERROR)
            }
        }
    }
}

fn summary_lines(config: &BatchImportConfig) -> Vec<String> {
    let formats = match config.batch.format_policy() {
        FormatPolicy::Passthrough => "any".to_string(),
        FormatPolicy::Restricted(allowed) => allowed.join(", "),
    };

    vec![
        format!("Environment: {:?}", config.environment),
        format!("Log Level: {}", config.application.log_level),
        format!("Token URL: {}", config.auth.token_url),
        format!("Client ID: {}", config.auth.client_id),
        "Client Secret: ***".to_string(),
        format!("Grant Type: {}", config.auth.grant_type),
        format!("Scopes: {}", config.auth.scopes),
        format!("Batch API URL: {}", config.batch.api_url),
        format!("Update Null: {}", config.batch.update_null),
        format!("Formats: {formats}"),
        format!(
            "HTTP Timeouts: {}s request, {}s connect",
            config.http.timeout_seconds, config.http.connect_timeout_seconds
        ),
        format!("TLS Verify: {}", config.http.tls_verify),
    ]
}
