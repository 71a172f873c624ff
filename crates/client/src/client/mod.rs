//! Main Jama REST API client and API methods.
//!
//! This module provides the primary [`JamaClient`] for interacting with the
//! Jama Connect REST API. It attaches credentials to every request and, for
//! OAuth, obtains and renews the access token.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Credential selection and OAuth token renewal (private module)
//! - `item_types`: Item type lookups
//! - `filters`: Saved filter results (follows pages)
//! - `items`: Item patches
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token expiry bookkeeping (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - Failed requests are never retried; errors are returned to the caller as-is.

pub mod builder;
mod filters;
mod item_types;
mod items;
mod session;

use crate::auth::SessionManager;

/// Jama REST API client.
///
/// # Creating a Client
///
/// Use [`JamaClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use jama_client::{JamaClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = JamaClient::builder()
///     .base_url("https://company.jamacloud.com".to_string())
///     .auth_strategy(AuthStrategy::Basic {
///         username: "sync-bot".to_string(),
///         password: SecretString::new("secret".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct JamaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) page_size: usize,
    pub(crate) token_expiry_buffer_seconds: u64,
}

impl JamaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JamaClientBuilder {
        builder::JamaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page size used when following paged list endpoints.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
