//! Item type (schema) models.
//!
//! An item type lists the fields items of that type may carry. Custom field
//! names are suffixed with `$<item type id>` by the server, e.g. `doors_id$142`.

use serde::Deserialize;

/// One field in an item type definition.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "fieldType", default)]
    pub field_type: Option<String>,
}

/// Item type definition from `GET /rest/v1/itemtypes/{id}`.
#[derive(Debug, Deserialize, Clone)]
pub struct ItemType {
    pub id: u64,
    #[serde(rename = "typeKey", default)]
    pub type_key: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ItemType {
    /// Human-readable name, falling back to the type key.
    pub fn name(&self) -> &str {
        self.display
            .as_deref()
            .or(self.type_key.as_deref())
            .unwrap_or("")
    }

    /// First field whose name starts with `prefix`, in definition order.
    pub fn find_field(&self, prefix: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name.starts_with(prefix))
    }
}
