//! Configuration types for Jama field sync.
//!
//! This module re-exports all configuration types from submodules
//! for convenient access.
//!
//! Submodules:
//! - `auth`: Authentication strategies and credential pairs.
//! - `connection`: Base URL normalization and client settings.
//! - `script`: Sync parameters with per-key defaults.

mod auth;
mod connection;
mod script;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{ClientSettings, ConnectionConfig, normalize_base_url};
pub use script::ScriptSettings;
