//! CLI interface and argument parsing
//!
//! The command line stands in for the input form: it collects the XML body
//! and its metadata, runs the workflow and prints the outcome.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for configuration or input errors
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code when the token exchange failed
pub const EXIT_TOKEN_ERROR: i32 = 3;
/// Exit code when the batch API call failed
pub const EXIT_SUBMIT_ERROR: i32 = 4;
/// Exit code for unexpected failures
pub const EXIT_FATAL: i32 = 5;

/// Batch import client - submit XML batches to an OAuth2-protected batch API
#[derive(Parser, Debug)]
#[command(name = "batch-import")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "batch-import.toml",
        env = "BATCH_IMPORT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BATCH_IMPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit an XML payload to the batch import API
    Submit(commands::submit::SubmitArgs),

    /// Request a token to verify credentials and connectivity
    CheckAuth(commands::check_auth::CheckAuthArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_submit_defaults() {
        let cli = Cli::parse_from(["batch-import", "submit"]);
        assert_eq!(cli.config, "batch-import.toml");
        match cli.command {
            Commands::Submit(args) => {
                assert!(args.input.is_none());
                assert!(args.filename.is_none());
                assert!(!args.update_null);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_submit_with_metadata() {
        let cli = Cli::parse_from([
            "batch-import",
            "submit",
            "--input",
            "batch.xml",
            "--filename",
            "f.xml",
            "--external-reference",
            "ref1",
            "--format",
            "Xml",
            "--update-null",
        ]);
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.input.as_deref(), Some("batch.xml"));
                assert_eq!(args.filename.as_deref(), Some("f.xml"));
                assert_eq!(args.external_reference.as_deref(), Some("ref1"));
                assert_eq!(args.format.as_deref(), Some("Xml"));
                assert!(args.update_null);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "batch-import",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "check-auth",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::CheckAuth(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["batch-import", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["batch-import", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
