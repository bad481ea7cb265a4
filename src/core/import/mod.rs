//! Batch import orchestration
//!
//! - [`payload`] - base64 payload encoding and envelope assembly
//! - [`workflow`] - token acquisition followed by batch submission

pub mod payload;
pub mod workflow;

pub use payload::{build_request, encode_payload};
pub use workflow::ImportWorkflow;
