//! Core business logic for the batch import client.
//!
//! # Submission Workflow
//!
//! 1. **Assemble**: Encode the XML as base64 and attach filename, external
//!    reference, format and `UpdateNull`
//! 2. **Authenticate**: Exchange the client credentials for a bearer token
//! 3. **Submit**: Post the envelope to the batch API with that token
//!
//! A failure in any step ends the submission and is reported with its phase.
//!
//! # Example
//!
//! ```rust,no_run
//! use batch_import_client::config::load_config;
//! use batch_import_client::core::import::ImportWorkflow;
//! use batch_import_client::domain::{BatchOutcome, SubmissionInput};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("batch-import.toml")?;
//! let workflow = ImportWorkflow::new(&config)?;
//!
//! let input = SubmissionInput::new("<a/>")
//!     .with_filename("f.xml")
//!     .with_external_reference("ref1");
//!
//! match workflow.submit(&input).await {
//!     BatchOutcome::Accepted { body } => println!("API Response: {body}"),
//!     BatchOutcome::Failed(report) => eprintln!("{report}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod import;
