//! JSON-Patch style operations accepted by `PATCH /rest/v1/items/{id}`.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Kind of field mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

/// A single patch instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: Value,
}

impl PatchOperation {
    /// Set `/fields/<field>` to `value`.
    pub fn set_field(op: PatchOp, field: &str, value: Value) -> Self {
        Self {
            op,
            path: format!("/fields/{field}"),
            value,
        }
    }
}
