//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - Variants name the file, section or key involved where there is one.
//! - Secret values are never echoed back in error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine program directory: {0}")]
    ProgramDirUnavailable(String),

    #[error("Config path argument is empty")]
    EmptyConfigPath,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {message}")]
    ConfigFileParse { path: PathBuf, message: String },

    #[error("No section: '{section}'")]
    MissingSection { section: String },

    #[error("No option '{key}' in section: '{section}'")]
    MissingKey { section: String, key: String },

    #[error("Invalid value for '{key}' in section '{section}': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(section: &str, key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}
