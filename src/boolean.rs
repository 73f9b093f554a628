use serde_json::Value;

use crate::constants::{FALSY_VALUES, TRUTHY_VALUES};

/// Coerce a config value into a boolean.
///
/// Native booleans pass through; strings must be one of the truthy or falsy
/// tokens. Everything else is ambiguous and yields `None`.
pub fn parse_custom_boolean(input: &Value) -> Option<bool> {
    match input {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_custom_boolean_str(s),
        _ => None,
    }
}

/// String form of [`parse_custom_boolean`]. Matching is case-sensitive.
pub fn parse_custom_boolean_str(input: &str) -> Option<bool> {
    if TRUTHY_VALUES.contains(&input) {
        Some(true)
    } else if FALSY_VALUES.contains(&input) {
        Some(false)
    } else {
        None
    }
}
