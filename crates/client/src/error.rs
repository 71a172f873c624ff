//! Error types for the Jama client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Jama client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Jama.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Jama.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://jama.example.com/rest/v1/items/1".to_string(),
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("test".to_string()).is_auth_error());
        assert!(api_error(401).is_auth_error());
        assert!(!api_error(403).is_auth_error());
        assert!(!ClientError::InvalidResponse("x".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(api_error(404).is_not_found());
        assert!(!api_error(400).is_not_found());
        assert!(!ClientError::InvalidUrl("x".to_string()).is_not_found());
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let msg = api_error(400).to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("items/1"));
        assert!(msg.contains("test"));
    }
}
