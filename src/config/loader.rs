//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BatchImportConfig;
use super::secret::secret_string;
use crate::domain::errors::BatchImportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix shared by all override variables
pub const ENV_PREFIX: &str = "BATCH_IMPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`BatchImportConfig`]
/// 4. Applies environment variable overrides (`BATCH_IMPORT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use batch_import_client::config::loader::load_config;
///
/// let config = load_config("batch-import.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BatchImportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BatchImportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BatchImportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Parses, overrides and validates configuration from TOML text
///
/// # Errors
///
/// Same as [`load_config`], minus the file access errors.
pub fn load_config_from_str(contents: &str) -> Result<BatchImportConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: BatchImportConfig = toml::from_str(&contents)
        .map_err(|e| BatchImportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        BatchImportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BatchImportError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BatchImportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the `BATCH_IMPORT_` prefix
///
/// Variables follow the pattern `BATCH_IMPORT_<SECTION>_<KEY>`, for example
/// `BATCH_IMPORT_AUTH_CLIENT_SECRET` or `BATCH_IMPORT_BATCH_API_URL`.
/// Unparseable numeric or boolean values are ignored.
fn apply_env_overrides(config: &mut BatchImportConfig) {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Auth overrides
    if let Some(val) = env_override("AUTH_TOKEN_URL") {
        config.auth.token_url = val;
    }
    if let Some(val) = env_override("AUTH_CLIENT_ID") {
        config.auth.client_id = val;
    }
    if let Some(val) = env_override("AUTH_CLIENT_SECRET") {
        config.auth.client_secret = secret_string(val);
    }
    if let Some(val) = env_override("AUTH_GRANT_TYPE") {
        config.auth.grant_type = val;
    }
    if let Some(val) = env_override("AUTH_SCOPES") {
        config.auth.scopes = val;
    }

    // Batch overrides
    if let Some(val) = env_override("BATCH_API_URL") {
        config.batch.api_url = val;
    }
    if let Some(val) = env_override("BATCH_UPDATE_NULL") {
        if let Ok(update_null) = val.parse() {
            config.batch.update_null = update_null;
        }
    }
    if let Some(val) = env_override("BATCH_ALLOWED_FORMATS") {
        config.batch.allowed_formats = val
            .split(',')
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
    }

    // HTTP overrides
    if let Some(val) = env_override("HTTP_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.http.timeout_seconds = timeout;
        }
    }
    if let Some(val) = env_override("HTTP_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.http.connect_timeout_seconds = timeout;
        }
    }
    if let Some(val) = env_override("HTTP_TLS_VERIFY") {
        config.http.tls_verify = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[auth]
token_url = "https://identity.example.com/connect/token"
client_id = "import-client"
client_secret = "secret"

[batch]
api_url = "https://api.example.com/import/batch"
"#;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LOADER_TEST_SECRET", "test_value");
        let input = "client_secret = \"${LOADER_TEST_SECRET}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "client_secret = \"test_value\"\n");
        std::env::remove_var("LOADER_TEST_SECRET");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LOADER_MISSING_VAR");
        let input = "client_secret = \"${LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("LOADER_COMMENTED_VAR");
        let input = "# client_secret = \"${LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("nonexistent-batch-import.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.auth.client_id, "import-client");
        assert_eq!(config.auth.grant_type, "client_credentials");
        assert_eq!(config.auth.scopes, "");
        assert!(!config.batch.update_null);
        assert!(config.batch.allowed_formats.is_empty());
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http.connect_timeout_seconds, 10);
        assert!(config.http.tls_verify);
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_load_config_rejects_missing_section() {
        let err = load_config_from_str("[auth]\ntoken_url = \"https://x\"\n").unwrap_err();
        assert!(matches!(err, BatchImportError::Configuration(_)));
    }
}
