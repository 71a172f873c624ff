//! Centralized constants for the Jama field sync workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Config File Layout
// =============================================================================

/// File name looked up next to the executable when no path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.ini";

/// Section holding connection and credential settings.
pub const CLIENT_SETTINGS_SECTION: &str = "CLIENT_SETTINGS";

/// Section holding the sync parameters.
pub const SCRIPT_SETTINGS_SECTION: &str = "SCRIPT_SETTINGS";

// =============================================================================
// Script Defaults
// =============================================================================

/// Saved filter used when `filter_id` is not configured.
pub const DEFAULT_FILTER_ID: u64 = 97;

/// Item type used when `item_type` is not configured.
pub const DEFAULT_ITEM_TYPE_ID: u64 = 142;

/// Field read from when `read_field` is not configured.
pub const DEFAULT_READ_FIELD: &str = "doors_id";

/// Field written to when `write_field` is not configured.
pub const DEFAULT_WRITE_FIELD: &str = "sys_doors_id";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Buffer before OAuth token expiry that triggers a proactive refresh.
pub const DEFAULT_EXPIRY_BUFFER_SECS: u64 = 60;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default page size for paged list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page the REST API accepts.
pub const MAX_PAGE_SIZE: usize = 50;

// =============================================================================
// Logging Defaults
// =============================================================================

/// Directory (relative to the working directory) that receives run logs.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Prefix of every per-run log file.
pub const LOG_FILE_PREFIX: &str = "field_sync_";
