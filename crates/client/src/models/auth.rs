//! Authentication models for the Jama OAuth token endpoint.

use secrecy::SecretString;
use serde::Deserialize;

/// Response from `POST /rest/oauth/token` with the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthToken {
    pub access_token: SecretString,
    /// Lifetime in seconds; absent means the server did not say.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
