//! Defensive accessors over untrusted JSON Schema fragments.
//!
//! Every function here is total. A value of the wrong shape is reported as
//! absent, never as an error.

use serde_json::{Map, Value};

/// The value as a JSON object, if it is one.
pub fn object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

/// The string entries of a JSON array.
///
/// `None` when the value is absent or not an array. Non-string entries are
/// skipped.
pub fn string_list(value: Option<&Value>) -> Option<Vec<&str>> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
}

/// The `description` keyword, when it is a string.
pub fn description(schema: &Map<String, Value>) -> Option<String> {
    schema
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// The `type` keyword, when it is a string.
///
/// Any other shape, including a type union array, counts as absent.
pub fn explicit_type(schema: &Map<String, Value>) -> Option<&str> {
    schema.get("type").and_then(Value::as_str)
}
