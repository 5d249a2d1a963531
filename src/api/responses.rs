//! Helpers for reading identifiers out of raw response bodies

use crate::Result;
use serde_json::Value;

/// `set_id` from a create-set response
pub fn new_set_id(body: &str) -> Result<u64> {
    id_field(body, "set_id")
}

/// `id` from an add-term response
pub fn new_term_id(body: &str) -> Result<u64> {
    id_field(body, "id")
}

fn id_field(body: &str, field: &str) -> Result<u64> {
    let value: Value = serde_json::from_str(body)?;
    let id = match value.get(field) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| crate::Error::missing_field(field))
}
