//! Resolve configured field names to the names used by the item type.
//!
//! Custom fields are stored as `<name>$<item type id>`, so a configured name
//! is matched as a prefix. The first field in schema order wins.

use jama_client::{ItemType, PatchOp};
use jama_config::ScriptSettings;
use thiserror::Error;

/// A configured field that does not exist on the item type.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unable to locate read_field: {field} on item type: {item_type}")]
    ReadFieldNotFound { field: String, item_type: String },

    #[error("unable to locate write_field: {field} on item type: {item_type}")]
    WriteFieldNotFound { field: String, item_type: String },
}

/// Field names as the server knows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub read_field: String,
    pub write_field: String,
    /// Whether the write field was present in the schema.
    pub write_field_found: bool,
}

impl ResolvedFields {
    /// Patch kind used for every item in the run.
    ///
    /// Decided once from the schema, not from each item's own fields.
    pub fn patch_op(&self) -> PatchOp {
        if self.write_field_found {
            PatchOp::Add
        } else {
            PatchOp::Replace
        }
    }
}

/// Match the configured read and write fields against `item_type`.
pub fn resolve_fields(
    item_type: &ItemType,
    settings: &ScriptSettings,
) -> Result<ResolvedFields, ResolveError> {
    let read = item_type.find_field(&settings.read_field).ok_or_else(|| {
        ResolveError::ReadFieldNotFound {
            field: settings.read_field.clone(),
            item_type: item_type.name().to_string(),
        }
    })?;
    let write = item_type.find_field(&settings.write_field).ok_or_else(|| {
        ResolveError::WriteFieldNotFound {
            field: settings.write_field.clone(),
            item_type: item_type.name().to_string(),
        }
    })?;

    Ok(ResolvedFields {
        read_field: read.name.clone(),
        write_field: write.name.clone(),
        write_field_found: true,
    })
}
