//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not resolve or read the config file (see `jama_config::ConfigLoader`).
//!
//! Invariants:
//! - At most one positional argument is accepted; clap rejects extras with a
//!   usage error before any work starts.

use std::path::PathBuf;

use clap::Parser;
use jama_config::constants::DEFAULT_LOG_DIR;

#[derive(Parser, Debug)]
#[command(name = "jama-field-sync")]
#[command(
    about = "Copy one Jama Connect field into another for every item of a saved filter",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jama-field-sync\n  jama-field-sync /etc/jama/field_sync.ini\n  RUST_LOG=debug jama-field-sync --log-dir /var/log/jama config.ini\n"
)]
pub struct Cli {
    /// Path to the INI configuration file.
    ///
    /// Relative paths resolve against the directory containing the executable.
    /// Defaults to `config.ini` in that directory.
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Directory for per-run log files (created if missing)
    #[arg(
        long,
        env = "JAMA_FIELD_SYNC_LOG_DIR",
        value_name = "DIR",
        default_value = DEFAULT_LOG_DIR
    )]
    pub log_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["jama-field-sync"]).unwrap();
        assert!(cli.config_path.is_none());
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_config_path_argument() {
        let cli = Cli::try_parse_from(["jama-field-sync", "conf/sync.ini"]).unwrap();
        assert_eq!(cli.config_path, Some(PathBuf::from("conf/sync.ini")));
    }

    #[test]
    fn test_two_positional_arguments_rejected() {
        let err = Cli::try_parse_from(["jama-field-sync", "a.ini", "b.ini"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_log_dir_flag() {
        let cli = Cli::try_parse_from(["jama-field-sync", "--log-dir", "/tmp/sync-logs"]).unwrap();
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/sync-logs"));
    }
}
