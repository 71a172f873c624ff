//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that schedulers can use to tell failure kinds apart.
//! - Map library errors found in an `anyhow` chain to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A run that reaches the update phase exits 0, even if individual patches failed.
//! - Exit code 2 is shared with clap usage errors.

use jama_client::ClientError;
use jama_config::ConfigError;

use crate::sync::ResolveError;

/// Structured exit codes for jama-field-sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - sync completed (per-item failures included).
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - bad credentials or rejected token request.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, DNS, or unusable base URL.
    ConnectionError = 3,

    /// Resource not found - unknown item type or filter.
    NotFound = 4,

    /// Configuration error - unreadable file, missing or malformed keys.
    ConfigError = 5,

    /// Permission denied - the account may not read or write the resource.
    PermissionDenied = 6,

    /// Read or write field does not exist on the item type.
    FieldResolutionFailed = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}

impl From<&ResolveError> for ExitCode {
    fn from(_: &ResolveError) -> Self {
        ExitCode::FieldResolutionFailed
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ResolveError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
