//! Batch import API adapter
//!
//! The wire envelope is [`BatchRequest`](crate::domain::BatchRequest) itself;
//! this module only owns the HTTP exchange.

pub mod client;

pub use client::BatchSubmitter;
