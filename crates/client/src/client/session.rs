//! Client-level credential helpers.
//!
//! # Invariants
//! - Basic auth never triggers a token request.
//! - OAuth requests a token before the first call and again whenever the
//!   current token is inside the expiry buffer.

use tracing::debug;

use crate::auth::AuthStrategy;
use crate::client::JamaClient;
use crate::endpoints::{self, RequestAuth};
use crate::error::{ClientError, Result};

impl JamaClient {
    /// Credentials for the next request, fetching an OAuth token if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the token request is rejected.
    pub(crate) async fn request_auth(&mut self) -> Result<RequestAuth> {
        if self.session_manager.needs_token() {
            self.authenticate().await?;
        }

        self.session_manager
            .request_auth()
            .ok_or_else(|| ClientError::AuthFailed("no access token available".to_string()))
    }

    /// Check if the client is using OAuth client credentials.
    pub fn is_oauth(&self) -> bool {
        self.session_manager.is_oauth()
    }

    /// Request a fresh OAuth token.
    ///
    /// Only valid for [`AuthStrategy::OAuth`].
    pub async fn authenticate(&mut self) -> Result<()> {
        let AuthStrategy::OAuth {
            client_id,
            client_secret,
        } = self.session_manager.strategy()
        else {
            return Err(ClientError::AuthFailed(
                "Cannot request a token with basic auth strategy".to_string(),
            ));
        };

        let token =
            endpoints::request_oauth_token(&self.http, &self.base_url, client_id, client_secret)
                .await?;

        debug!(expires_in = ?token.expires_in, "Obtained OAuth access token");
        self.session_manager.set_access_token(
            token.access_token,
            token.expires_in,
            Some(self.token_expiry_buffer_seconds),
        );
        Ok(())
    }
}
