//! External system integrations.
//!
//! - [`identity`] - OAuth2 client-credentials token acquisition
//! - [`batch_api`] - Batch import API submission
//! - [`http`] - Shared HTTP transport construction
//!
//! Both adapters take a cloned `reqwest::Client` built by
//! [`http::build_http_client`], so connections are pooled across the two calls
//! of a submission.
//!
//! ```rust,no_run
//! use batch_import_client::adapters::batch_api::BatchSubmitter;
//! use batch_import_client::adapters::http::build_http_client;
//! use batch_import_client::adapters::identity::TokenAcquirer;
//! use batch_import_client::config::HttpConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = build_http_client(&HttpConfig::default())?;
//! let acquirer = TokenAcquirer::new(client.clone());
//! let submitter = BatchSubmitter::new(client);
//! # Ok(())
//! # }
//! ```

pub mod batch_api;
pub mod http;
pub mod identity;
