//! Client builder for constructing [`JamaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL the same way the config loader does
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`JamaClient`] methods)
//! - OAuth token bookkeeping (handled by [`SessionManager`] in `auth.rs`)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - `page_size` is always between 1 and the server maximum

use std::time::Duration;

use jama_config::{
    AuthStrategy as ConfigAuthStrategy, ClientSettings,
    constants::{
        DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
        MAX_PAGE_SIZE,
    },
    types::normalize_base_url,
};

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::JamaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`JamaClient`].
///
/// # Example
///
/// ```rust,ignore
/// use jama_client::JamaClient;
///
/// let client = JamaClient::builder()
///     .from_settings(&settings)
///     .page_size(50)
///     .build()?;
/// ```
pub struct JamaClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    timeout: Duration,
    page_size: usize,
    token_expiry_buffer_seconds: u64,
}

impl Default for JamaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            token_expiry_buffer_seconds: DEFAULT_EXPIRY_BUFFER_SECS,
        }
    }
}

impl JamaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Jama Connect instance, e.g. `https://company.jamacloud.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of results requested per page from list endpoints.
    ///
    /// Clamped to `1..=50`; Jama rejects larger pages.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// OAuth tokens expiring within this many seconds are renewed before use.
    pub fn token_expiry_buffer_seconds(mut self, buffer: u64) -> Self {
        self.token_expiry_buffer_seconds = buffer;
        self
    }

    /// Create a client builder from loaded client settings.
    pub fn from_settings(mut self, settings: &ClientSettings) -> Self {
        let auth_strategy = match &settings.auth.strategy {
            ConfigAuthStrategy::Basic { username, password } => AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::OAuth {
                client_id,
                client_secret,
            } => AuthStrategy::OAuth {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            },
        };

        self.base_url = Some(settings.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.timeout = settings.connection.timeout;
        self
    }

    /// Build the [`JamaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<JamaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = normalize_base_url(&base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(JamaClient {
            http,
            base_url,
            session_manager: SessionManager::new(auth_strategy),
            page_size: self.page_size,
            token_expiry_buffer_seconds: self.token_expiry_buffer_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jama_config::{AuthConfig, ConnectionConfig};
    use secrecy::SecretString;

    fn settings(oauth: bool) -> ClientSettings {
        ClientSettings {
            connection: ConnectionConfig::new("company.jamacloud.com/"),
            auth: AuthConfig {
                strategy: ConfigAuthStrategy::from_credentials(
                    oauth,
                    "sync-bot".to_string(),
                    SecretString::new("pw".to_string().into()),
                ),
            },
        }
    }

    #[test]
    fn test_from_settings_with_basic_auth() {
        let client = JamaClient::builder()
            .from_settings(&settings(false))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://company.jamacloud.com");
        assert!(!client.is_oauth());
    }

    #[test]
    fn test_from_settings_with_oauth() {
        let client = JamaClient::builder()
            .from_settings(&settings(true))
            .build()
            .unwrap();

        assert!(client.is_oauth());
    }

    #[test]
    fn test_from_settings_preserves_timeout() {
        let mut settings = settings(false);
        settings.connection.timeout = Duration::from_secs(120);

        let builder = JamaClient::builder().from_settings(&settings);

        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(
            builder.base_url.as_deref(),
            Some("https://company.jamacloud.com")
        );
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(JamaClientBuilder::new().page_size(500).page_size, MAX_PAGE_SIZE);
        assert_eq!(JamaClientBuilder::new().page_size(0).page_size, 1);
        assert_eq!(JamaClientBuilder::new().page_size(10).page_size, 10);
    }

    #[test]
    fn test_build_normalizes_base_url() {
        let client = JamaClient::builder()
            .base_url("http://localhost:8080//".to_string())
            .auth_strategy(AuthStrategy::Basic {
                username: "a".to_string(),
                password: SecretString::new("b".to_string().into()),
            })
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
