//! Configuration management for Jama field sync.
//!
//! This crate loads the INI configuration file that drives a sync run and
//! converts its sections into typed settings for the client and the sync
//! pass.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, IniDocument, Result, parse_bool};
pub use types::{AuthConfig, AuthStrategy, ClientSettings, ConnectionConfig, ScriptSettings};
