//! Parsed INI document with typed accessors.
//!
//! Responsibilities:
//! - Wrap a parsed [`ini::Ini`] together with the path it came from.
//! - Expose trimmed string, integer and boolean lookups with section/key context in errors.
//!
//! Does NOT handle:
//! - Default values; callers decide what a missing key means.

use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};

use crate::loader::error::{ConfigError, Result};

/// A parsed configuration file.
#[derive(Debug)]
pub struct IniDocument {
    path: PathBuf,
    ini: Ini,
}

impl IniDocument {
    /// Parse INI text. `path` is only used for error reporting.
    ///
    /// Quote stripping and backslash escapes are disabled so secrets are
    /// taken verbatim.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };

        let ini = Ini::load_from_str_opt(contents, options).map_err(|e| {
            ConfigError::ConfigFileParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ini,
        })
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the named section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.ini.section(Some(section)).is_some()
    }

    /// Look up a value, trimmed. Returns `None` when the section or key is absent.
    ///
    /// Section names are case-sensitive; key names are not.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini
            .section(Some(section))
            .and_then(|props| {
                props
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(key))
                    .map(|(_, value)| value)
            })
            .map(str::trim)
    }

    /// Look up a required value.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        if !self.has_section(section) {
            return Err(ConfigError::MissingSection {
                section: section.to_string(),
            });
        }
        self.get(section, key).ok_or_else(|| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Look up a required boolean value.
    pub fn require_bool(&self, section: &str, key: &str) -> Result<bool> {
        let raw = self.require(section, key)?;
        parse_bool(raw).ok_or_else(|| {
            ConfigError::invalid(section, key, format!("Not a boolean: {raw}"))
        })
    }

    /// Look up an optional unsigned integer value.
    ///
    /// A missing key yields `Ok(None)`; a present value that does not parse is an error.
    pub fn get_u64(&self, section: &str, key: &str) -> Result<Option<u64>> {
        self.get(section, key)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::invalid(section, key, format!("'{raw}' is not a valid id: {e}"))
                })
            })
            .transpose()
    }
}

/// Parse a boolean the way INI files conventionally spell them.
///
/// Accepts `1/yes/true/on` and `0/no/false/off`, case-insensitively.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
