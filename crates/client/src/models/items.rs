//! Item models returned by filter results.

use serde::Deserialize;
use serde_json::{Map, Value};

/// An item as returned by `GET /rest/v1/filters/{id}/results`.
///
/// Field values are kept as raw JSON; a key that is missing from `fields`
/// means the item has no value for that field.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "documentKey", default)]
    pub document_key: Option<String>,
    #[serde(rename = "itemType", default)]
    pub item_type: Option<u64>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Value of a field, if the item carries it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
