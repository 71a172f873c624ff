//! Configuration loader for INI files.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit path or `config.ini` next to the executable).
//! - Read and parse the file into an [`IniDocument`].
//! - Provide typed accessors used by the settings types.
//!
//! Does NOT handle:
//! - Conversion into client or script settings (see `types`).
//! - Any fallback when the file is missing; that is always an error.
//!
//! Invariants / Assumptions:
//! - Relative paths are resolved against the program directory, not the working directory.
//! - File contents are decoded as UTF-8 with invalid sequences replaced.

mod builder;
mod document;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use document::{IniDocument, parse_bool};
pub use error::{ConfigError, Result};
