//! Coarse kind detection for JSON values

use super::types::JsonType;
use serde_json::Value;

/// Detect the coarse kind of a JSON value
///
/// Numbers are always `number`; `integer` is only ever assigned by a user.
pub fn detect_type(value: &Value) -> JsonType {
    match value {
        Value::Array(_) => JsonType::Array,
        Value::Null => JsonType::Null,
        Value::Object(_) => JsonType::Object,
        Value::String(_) => JsonType::String,
        Value::Number(_) => JsonType::Number,
        Value::Bool(_) => JsonType::Boolean,
    }
}

