//! Sync parameters read from `SCRIPT_SETTINGS`.
//!
//! Every key is optional and defaulted on its own: a missing `filter_id`
//! never discards a configured `read_field`. A key that is present but
//! malformed is an error.

use tracing::info;

use crate::constants::{
    DEFAULT_FILTER_ID, DEFAULT_ITEM_TYPE_ID, DEFAULT_READ_FIELD, DEFAULT_WRITE_FIELD,
    SCRIPT_SETTINGS_SECTION,
};
use crate::loader::{ConfigError, IniDocument, Result};

/// Parameters of a single sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Saved filter whose results are synchronized.
    pub filter_id: u64,
    /// Only items of this type are considered.
    pub item_type_id: u64,
    /// Field name (prefix) the value is copied from.
    pub read_field: String,
    /// Field name (prefix) the value is copied to.
    pub write_field: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            filter_id: DEFAULT_FILTER_ID,
            item_type_id: DEFAULT_ITEM_TYPE_ID,
            read_field: DEFAULT_READ_FIELD.to_string(),
            write_field: DEFAULT_WRITE_FIELD.to_string(),
        }
    }
}

impl ScriptSettings {
    /// Read `SCRIPT_SETTINGS`, defaulting each absent key independently.
    pub fn from_document(doc: &IniDocument) -> Result<Self> {
        let defaults = Self::default();
        let section = SCRIPT_SETTINGS_SECTION;

        let filter_id = match doc.get_u64(section, "filter_id")? {
            Some(id) => id,
            None => {
                info!(default = defaults.filter_id, "filter_id not configured, using default");
                defaults.filter_id
            }
        };
        let item_type_id = match doc.get_u64(section, "item_type")? {
            Some(id) => id,
            None => {
                info!(default = defaults.item_type_id, "item_type not configured, using default");
                defaults.item_type_id
            }
        };
        let read_field = field_name(doc, "read_field", defaults.read_field)?;
        let write_field = field_name(doc, "write_field", defaults.write_field)?;

        Ok(Self {
            filter_id,
            item_type_id,
            read_field,
            write_field,
        })
    }
}

fn field_name(doc: &IniDocument, key: &str, default: String) -> Result<String> {
    match doc.get(SCRIPT_SETTINGS_SECTION, key) {
        // An empty prefix would match every field on the item type.
        Some("") => Err(ConfigError::invalid(
            SCRIPT_SETTINGS_SECTION,
            key,
            "field name is empty",
        )),
        Some(name) => Ok(name.to_string()),
        None => {
            info!(default = %default, "{key} not configured, using default");
            Ok(default)
        }
    }
}
