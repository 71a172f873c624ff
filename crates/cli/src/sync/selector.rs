//! Candidate selection.

use jama_client::Item;
use serde_json::Value;

use crate::sync::ResolvedFields;

/// An item whose write field must be set to `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub item: &'a Item,
    /// Current value of the read field.
    pub value: &'a Value,
}

/// Items of `item_type_id` whose read field is set and differs from the write field.
///
/// Order follows `items`. An empty string read value never selects an item;
/// any other value, including `null`, does.
pub fn select_candidates<'a>(
    items: &'a [Item],
    item_type_id: u64,
    fields: &ResolvedFields,
) -> Vec<Candidate<'a>> {
    items
        .iter()
        .filter(|item| item.item_type == Some(item_type_id))
        .filter_map(|item| {
            let value = item.field(&fields.read_field)?;
            if value.as_str() == Some("") {
                return None;
            }
            match item.field(&fields.write_field) {
                Some(current) if current == value => None,
                _ => Some(Candidate { item, value }),
            }
        })
        .collect()
}
