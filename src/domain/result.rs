//! Result type alias for the batch import client

use super::errors::BatchImportError;

/// Result type alias for fallible operations outside the two network phases
///
/// # Examples
///
/// ```
/// use batch_import_client::domain::result::Result;
/// use batch_import_client::domain::errors::BatchImportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BatchImportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BatchImportError>;
