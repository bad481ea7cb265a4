//! Configuration management for the batch import client.
//!
//! # Overview
//!
//! Configuration is read from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `BATCH_IMPORT_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! The endpoints and credentials are never embedded in code: the token and
//! batch URLs, the client id/secret, the grant type and the scopes all come
//! from here.
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//!
//! [application]
//! log_level = "info"
//!
//! [auth]
//! token_url = "https://identity.example.com/connect/token"
//! client_id = "import-client"
//! client_secret = "${BATCH_IMPORT_CLIENT_SECRET}"
//! scopes = "batch.import"
//!
//! [batch]
//! api_url = "https://api.example.com/import/batch"
//! update_null = false
//! allowed_formats = []
//!
//! [http]
//! timeout_seconds = 30
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use batch_import_client::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("batch-import.toml")?;
//! println!("Token endpoint: {}", config.auth.token_url);
//! println!("Batch endpoint: {}", config.batch.api_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, AuthConfig, BatchApiConfig, BatchImportConfig, Environment, HttpConfig,
    LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
