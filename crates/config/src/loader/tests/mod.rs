//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Organize loader tests into focused modules.
