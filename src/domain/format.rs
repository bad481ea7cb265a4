//! Batch format tags
//!
//! The batch envelope carries an optional free-form `Format` tag. Whether that
//! tag is checked depends on the configured [`FormatPolicy`]: by default it is
//! passed through as written, and when `batch.allowed_formats` lists values it
//! must be one of them.

use super::errors::BatchImportError;
use super::result::Result;
use serde::Serialize;
use std::fmt;

/// A format tag that has passed the configured [`FormatPolicy`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BatchFormat(String);

impl BatchFormat {
    /// Returns the tag as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BatchFormat {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a raw format tag is turned into a [`BatchFormat`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatPolicy {
    /// Any non-empty tag is accepted unchanged
    #[default]
    Passthrough,

    /// Only the listed tags are accepted, compared case-insensitively
    Restricted(Vec<String>),
}

impl FormatPolicy {
    /// Builds the policy from the `batch.allowed_formats` setting
    ///
    /// An empty list means passthrough.
    pub fn from_allowed(allowed: &[String]) -> Self {
        let allowed: Vec<String> = allowed
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();

        if allowed.is_empty() {
            FormatPolicy::Passthrough
        } else {
            FormatPolicy::Restricted(allowed)
        }
    }

    /// Parses a raw tag
    ///
    /// Blank input yields `Ok(None)`: the envelope then carries `"Format": null`.
    /// A passthrough tag is sent exactly as given, surrounding whitespace
    /// included.
    /// Under a restricted policy the configured spelling is returned, so
    /// `"xml"` becomes `"Xml"` when `"Xml"` is the allowed value.
    ///
    /// # Errors
    ///
    /// Returns [`BatchImportError::UnknownFormat`] when the tag is not in the
    /// restricted set.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_import_client::domain::FormatPolicy;
    ///
    /// let policy = FormatPolicy::from_allowed(&["Xml".to_string()]);
    /// let format = policy.parse("xml").unwrap().unwrap();
    /// assert_eq!(format.as_str(), "Xml");
    /// assert!(policy.parse("Csv").is_err());
    /// assert!(policy.parse("  ").unwrap().is_none());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Option<BatchFormat>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match self {
            FormatPolicy::Passthrough => Ok(Some(BatchFormat(raw.to_string()))),
            FormatPolicy::Restricted(allowed) => allowed
                .iter()
                .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
                .map(|canonical| Some(BatchFormat(canonical.clone())))
                .ok_or_else(|| BatchImportError::UnknownFormat {
                    value: trimmed.to_string(),
                    allowed: allowed.join(", "),
                }),
        }
    }
}
