//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "batch-import.toml")]
    pub output: String,

    /// Include optional sections with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing batch import configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your endpoints and client id", self.output);
                println!("  2. Set BATCH_IMPORT_CLIENT_SECRET in your environment or .env file");
                println!("  3. Validate configuration: batch-import validate-config");
                println!("  4. Check credentials: batch-import check-auth");
                println!("  5. Submit a batch: batch-import submit --input batch.xml");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Batch Import Client Configuration

[auth]
token_url = "https://login.example.com/connect/token"
client_id = "batch-import-client"
client_secret = "${BATCH_IMPORT_CLIENT_SECRET}"
scopes = "batch.import"

[batch]
api_url = "https://api.example.com/batch/import"
"#
        .to_string()
    }

    /// Generate configuration with every section spelled out
    fn generate_config_with_examples() -> String {
        r#"# Batch Import Client Configuration
#
# Values of the form ${VAR} are read from the environment (or .env).
# Any setting can also be overridden with BATCH_IMPORT_<SECTION>_<KEY>,
# for example BATCH_IMPORT_AUTH_TOKEN_URL.

# development, staging or production
environment = "development"

[application]
# trace, debug, info, warn, error
log_level = "info"

[auth]
# Identity endpoint issuing client-credentials tokens
token_url = "https://login.example.com/connect/token"
client_id = "batch-import-client"
client_secret = "${BATCH_IMPORT_CLIENT_SECRET}"
# Sent verbatim in the "Scopes" form field
scopes = "batch.import"
grant_type = "client_credentials"

[batch]
# Batch import endpoint receiving the base64 envelope
api_url = "https://api.example.com/batch/import"
# Default for the UpdateNull flag; --update-null also sets it
update_null = false
# Leave empty to pass any format tag through unchanged
allowed_formats = []
# allowed_formats = ["Xml", "Json"]

[http]
timeout_seconds = 30
connect_timeout_seconds = 10
# Cannot be disabled in production
tls_verify = true

[logging]
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#
        .to_string()
    }
}
