//! Client credentials and bearer tokens
//!
//! Both types keep their sensitive part inside a [`SecretString`], so neither
//! the client secret nor the access token can leak through `Debug` output or
//! tracing fields.

use crate::config::{secret_string, SecretString};
use secrecy::ExposeSecret;
use std::fmt;

/// OAuth2 grant type used for service-to-service authentication
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Static credentials exchanged for a bearer token
///
/// # Example
///
/// ```rust
/// use batch_import_client::domain::ClientCredentials;
/// use batch_import_client::config::secret_string;
///
/// let credentials = ClientCredentials::new("import-client", secret_string("s3cret".to_string()))
///     .with_scopes("batch.import batch.read");
///
/// assert_eq!(credentials.grant_type(), "client_credentials");
/// assert!(!format!("{credentials:?}").contains("s3cret"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: SecretString,
    grant_type: String,
    scopes: String,
}

impl ClientCredentials {
    /// Creates credentials for the client-credentials grant with no scopes
    pub fn new(client_id: impl Into<String>, client_secret: SecretString) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            grant_type: CLIENT_CREDENTIALS_GRANT.to_string(),
            scopes: String::new(),
        }
    }

    /// Sets the space-delimited scope string
    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = scopes.into();
        self
    }

    /// Overrides the grant type sent to the identity endpoint
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    pub fn grant_type(&self) -> &str {
        &self.grant_type
    }

    pub fn scopes(&self) -> &str {
        &self.scopes
    }
}

/// Opaque bearer token returned by the identity endpoint
///
/// No expiry is tracked: a fresh token is acquired for every submission.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(secret_string(token.into()))
    }

    /// Exposes the raw token value
    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_ref()
    }

    /// Value for the `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_defaults() {
        let credentials = ClientCredentials::new("client", secret_string("secret".to_string()));
        assert_eq!(credentials.client_id(), "client");
        assert_eq!(credentials.grant_type(), CLIENT_CREDENTIALS_GRANT);
        assert_eq!(credentials.scopes(), "");
        assert_eq!(credentials.client_secret().expose_secret(), "secret");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = ClientCredentials::new("client", secret_string("hunter2".to_string()))
            .with_scopes("a b");
        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("client"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_access_token_bearer_header() {
        let token = AccessToken::new("abc");
        assert_eq!(token.expose(), "abc");
        assert_eq!(token.bearer_header(), "Bearer abc");
    }

    #[test]
    fn test_access_token_debug_redacted() {
        let token = AccessToken::new("very-secret-token");
        assert_eq!(format!("{token:?}"), "AccessToken([REDACTED])");
    }
}
