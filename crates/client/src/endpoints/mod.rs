//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request against the Jama v1 API
//! and returns the decoded payload. Token management and paging live in
//! [`crate::client`].

mod auth;
mod filters;
mod item_types;
mod items;
mod request;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

pub use auth::request_oauth_token;
pub use filters::get_filter_results_page;
pub use item_types::get_item_type;
pub use items::patch_item;
pub use request::send_request;

/// Path prefix of the v1 REST API.
pub const API_PREFIX: &str = "/rest/v1";

/// Build the full URL of an API resource.
pub fn api_url(base_url: &str, resource: &str) -> String {
    format!("{}{}/{}", base_url, API_PREFIX, resource.trim_start_matches('/'))
}

/// Credentials attached to a single request.
#[derive(Debug, Clone)]
pub enum RequestAuth {
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// OAuth bearer token.
    Bearer(SecretString),
}

impl RequestAuth {
    /// Basic credentials from plain strings.
    pub fn basic(username: &str, password: &str) -> Self {
        Self::Basic {
            username: username.to_string(),
            password: SecretString::new(password.into()),
        }
    }

    /// Bearer credentials from a plain token.
    pub fn bearer(token: &str) -> Self {
        Self::Bearer(SecretString::new(token.into()))
    }

    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::Bearer(token) => builder.bearer_auth(token.expose_secret()),
        }
    }
}
