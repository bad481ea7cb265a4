// Batch Import Client - OAuth2-authenticated XML batch submission
// Copyright (c) 2025 Batch Import Client Contributors
// Licensed under the MIT License

//! # Batch Import Client
//!
//! A client for a batch import API protected by OAuth2 client credentials.
//! Each submission requests a fresh access token, wraps the caller's XML in a
//! base64 envelope and posts it with the token as a bearer credential.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Submission workflow and payload encoding
//! - [`adapters`] - Identity endpoint and batch API clients
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_import_client::config::load_config;
//! use batch_import_client::core::import::ImportWorkflow;
//! use batch_import_client::domain::SubmissionInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("batch-import.toml")?;
//!     let workflow = ImportWorkflow::new(&config)?;
//!
//!     let input = SubmissionInput::new("<a/>")
//!         .with_filename("f.xml")
//!         .with_external_reference("ref1");
//!
//!     let body = workflow.try_submit(&input).await?;
//!     println!("API Response: {body}");
//!     Ok(())
//! }
//! ```
//!
//! ## Failure phases
//!
//! A submission fails in exactly one phase, reported by
//! [`domain::WorkflowError::phase`]:
//!
//! - `input` - the envelope could not be assembled; nothing was sent
//! - `token` - the identity endpoint refused or was unreachable; the batch API
//!   was not called
//! - `submit` - a token was granted but the batch call failed
//!
//! ## Configuration
//!
//! Configuration is loaded from TOML with `${VAR}` substitution and
//! `BATCH_IMPORT_*` environment overrides. See [`config`] for details.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
