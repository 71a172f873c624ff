//! Data models for Jama REST API responses.
//!
//! This module provides types for deserializing Jama REST API responses and
//! serializing patch requests. Types are organized by resource in submodules
//! and re-exported here for convenient access.

pub mod auth;
pub mod common;
pub mod item_types;
pub mod items;
pub mod patch;

pub use auth::OAuthToken;
pub use common::{DataResponse, JamaMeta, ListResponse, PageInfo, StatusResponse};
pub use item_types::{FieldDescriptor, ItemType};
pub use items::Item;
pub use patch::{PatchOp, PatchOperation};
