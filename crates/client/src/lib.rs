//! Jama Connect REST API client.
//!
//! This crate provides a type-safe client for the parts of the Jama Connect
//! REST API (v1) used by the field sync: item types, saved filter results and
//! item patches. It supports HTTP basic authentication and the OAuth
//! client-credentials grant with automatic token renewal.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, SessionManager};
pub use client::JamaClient;
pub use client::builder::JamaClientBuilder;
pub use endpoints::RequestAuth;
pub use error::{ClientError, Result};
pub use models::{FieldDescriptor, Item, ItemType, PatchOp, PatchOperation};
