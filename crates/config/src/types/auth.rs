//! Authentication types for Jama field sync configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (basic credentials, OAuth client credentials).
//!
//! Does NOT handle:
//! - Token exchange (see client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Jama Connect.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication with a username and password.
    Basic {
        username: String,
        password: SecretString,
    },
    /// OAuth client-credentials grant; the pair is exchanged for a bearer token.
    OAuth {
        client_id: String,
        client_secret: SecretString,
    },
}

impl AuthStrategy {
    /// Build a strategy from the `oauth` flag and the configured credential pair.
    pub fn from_credentials(oauth: bool, id: String, secret: SecretString) -> Self {
        if oauth {
            Self::OAuth {
                client_id: id,
                client_secret: secret,
            }
        } else {
            Self::Basic {
                username: id,
                password: secret,
            }
        }
    }

    /// Non-secret half of the credential pair.
    pub fn identity(&self) -> &str {
        match self {
            Self::Basic { username, .. } => username,
            Self::OAuth { client_id, .. } => client_id,
        }
    }

    pub fn is_oauth(&self) -> bool {
        matches!(self, Self::OAuth { .. })
    }
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
