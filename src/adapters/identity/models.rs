//! Identity endpoint wire models

use crate::domain::{AccessToken, AuthError, ClientCredentials};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Form body of the client-credentials token request
///
/// The scope key is spelled `Scopes`, which is what the identity endpoint
/// binds.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
    #[serde(rename = "Scopes")]
    pub scopes: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn from_credentials(credentials: &'a ClientCredentials) -> Self {
        Self {
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret().expose_secret().as_ref(),
            grant_type: credentials.grant_type(),
            scopes: credentials.scopes(),
        }
    }
}

/// Token endpoint response; only `access_token` is consumed
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    access_token: Option<serde_json::Value>,
}

impl TokenResponse {
    /// Parses a response body into an access token
    ///
    /// # Errors
    ///
    /// [`AuthError::Parse`] when the body is not a JSON object, or when
    /// `access_token` is missing, not a string, or empty.
    pub fn parse(body: &str) -> Result<AccessToken, AuthError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| AuthError::Parse(format!("response is not valid JSON: {e}")))?;

        // Struct visitors also accept sequences, so only objects go through
        let serde_json::Value::Object(fields) = value else {
            return Err(AuthError::Parse(
                "response is not a JSON object".to_string(),
            ));
        };
        let response: TokenResponse = serde_json::from_value(serde_json::Value::Object(fields))
            .map_err(|e| AuthError::Parse(format!("unexpected token response shape: {e}")))?;

        match response.access_token {
            Some(serde_json::Value::String(token)) if !token.is_empty() => {
                Ok(AccessToken::new(token))
            }
            Some(serde_json::Value::String(_)) => {
                Err(AuthError::Parse("access_token is empty".to_string()))
            }
            Some(_) => Err(AuthError::Parse("access_token is not a string".to_string())),
            None => Err(AuthError::Parse(
                "access_token is missing from the response".to_string(),
            )),
        }
    }
}
