//! CLI command implementations

pub mod check_auth;
pub mod init;
pub mod submit;
pub mod validate;
