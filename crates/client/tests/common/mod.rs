//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use jama_client::testing::load_fixture;

// Used via `use common::*;` in test files
#[allow(unused_imports)]
pub use jama_client::{AuthStrategy, JamaClient, RequestAuth, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Basic-auth client pointed at a mock server.
#[allow(dead_code)]
pub fn basic_client(base_url: &str) -> JamaClient {
    JamaClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(AuthStrategy::Basic {
            username: "sync-bot".to_string(),
            password: SecretString::new("hunter2".to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// OAuth client pointed at a mock server.
#[allow(dead_code)]
pub fn oauth_client(base_url: &str) -> JamaClient {
    JamaClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(AuthStrategy::OAuth {
            client_id: "client-id".to_string(),
            client_secret: SecretString::new("client-secret".to_string().into()),
        })
        .build()
        .expect("client should build")
}
