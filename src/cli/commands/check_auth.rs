//! Check-auth command implementation
//!
//! Performs the client-credentials exchange on its own, without touching the
//! batch API.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TOKEN_ERROR};
use crate::config::load_config;
use crate::core::import::ImportWorkflow;
use clap::Args;

/// Arguments for the check-auth command
#[derive(Args, Debug)]
pub struct CheckAuthArgs {}

impl CheckAuthArgs {
    /// Execute the check-auth command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Checking identity endpoint credentials");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("🔑 Requesting token from {}", config.auth.token_url);

        let workflow = ImportWorkflow::new(&config)?;
        match workflow.check_auth().await {
            Ok(()) => {
                println!("✅ Token acquired for client '{}'", config.auth.client_id);
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Token request failed");
                println!("   Error: {e}");
                Ok(EXIT_TOKEN_ERROR)
            }
        }
    }
}
