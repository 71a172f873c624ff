//! Authentication strategies and OAuth token management.

use jama_config::constants::DEFAULT_EXPIRY_BUFFER_SECS;
use secrecy::SecretString;
use std::time::{Duration, Instant};

use crate::endpoints::RequestAuth;

/// Strategy for authenticating with Jama Connect.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password sent as HTTP basic auth on every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// OAuth client credentials.
    /// The client exchanges them for a bearer token and renews it before expiry.
    OAuth {
        client_id: String,
        client_secret: SecretString,
    },
}

/// Manages the OAuth access token with expiry tracking.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    access_token: Option<AccessToken>,
}

/// Access token with expiry information.
#[derive(Debug, Clone)]
struct AccessToken {
    value: SecretString,
    expires_at: Option<Instant>,
    expiry_buffer_seconds: u64,
}

impl AccessToken {
    fn new(value: SecretString, ttl_seconds: Option<u64>, expiry_buffer_seconds: u64) -> Self {
        Self {
            value,
            expires_at: ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl)),
            expiry_buffer_seconds,
        }
    }

    /// True once the token is within the buffer window of its expiry.
    fn needs_refresh(&self) -> bool {
        self.expires_at
            .map(|exp| {
                let remaining = exp.saturating_duration_since(Instant::now());
                remaining < Duration::from_secs(self.expiry_buffer_seconds)
            })
            .unwrap_or(false)
    }
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            access_token: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using OAuth (token management needed).
    pub fn is_oauth(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::OAuth { .. })
    }

    /// Store a token received from the token endpoint.
    ///
    /// `ttl_seconds` of `None` means the token never expires.
    pub fn set_access_token(
        &mut self,
        token: SecretString,
        ttl_seconds: Option<u64>,
        expiry_buffer_seconds: Option<u64>,
    ) {
        self.access_token = Some(AccessToken::new(
            token,
            ttl_seconds,
            expiry_buffer_seconds.unwrap_or(DEFAULT_EXPIRY_BUFFER_SECS),
        ));
    }

    /// Whether a new token must be fetched before the next request.
    ///
    /// Always false for basic auth.
    pub fn needs_token(&self) -> bool {
        if !self.is_oauth() {
            return false;
        }
        self.access_token
            .as_ref()
            .map(AccessToken::needs_refresh)
            .unwrap_or(true)
    }

    /// Credentials to attach to the next request.
    ///
    /// Returns `None` for OAuth when no token has been obtained yet.
    pub fn request_auth(&self) -> Option<RequestAuth> {
        match &self.auth_strategy {
            AuthStrategy::Basic { username, password } => Some(RequestAuth::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            AuthStrategy::OAuth { .. } => self
                .access_token
                .as_ref()
                .map(|t| RequestAuth::Bearer(t.value.clone())),
        }
    }
}
