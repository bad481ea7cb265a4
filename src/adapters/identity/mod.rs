//! Identity endpoint adapter
//!
//! Acquires bearer tokens through the OAuth2 client-credentials grant.

pub mod client;
pub mod models;

pub use client::TokenAcquirer;
pub use models::{TokenRequest, TokenResponse};
