use serde_json::Value;

use gather_types::Payload;

/// True iff the payload's `valid` field is exactly boolean `true`.
#[must_use]
pub fn is_valid(payload: &Payload) -> bool {
    matches!(payload.get("valid"), Some(Value::Bool(true)))
}
