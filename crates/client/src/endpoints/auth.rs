//! OAuth token endpoint.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::OAuthToken;

/// Exchange client credentials for an access token.
pub async fn request_oauth_token(
    client: &Client,
    base_url: &str,
    client_id: &str,
    client_secret: &SecretString,
) -> Result<OAuthToken> {
    debug!("Requesting OAuth token for client {}", client_id);

    let url = format!("{}/rest/oauth/token", base_url);
    let builder = client
        .post(&url)
        .basic_auth(client_id, Some(client_secret.expose_secret()))
        .form(&[("grant_type", "client_credentials")]);

    let response = send_request(builder).await.map_err(|e| match e {
        ClientError::ApiError {
            status, message, ..
        } if status == 400 || status == 401 => {
            ClientError::AuthFailed(format!("token request rejected ({status}): {message}"))
        }
        other => other,
    })?;

    response
        .json::<OAuthToken>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse OAuth token: {}", e)))
}
