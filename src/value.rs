//! Helpers for inspecting loosely typed values.
//!
//! Transformers in this crate consume `Option<serde_json::Value>`, where
//! `None` models an absent value (`undefined` in JavaScript terms) and
//! `Some(Value::Null)` models an explicit null. The distinction matters:
//! [`optional`](crate::optional) passes only the former through,
//! [`nullable`](crate::nullable) only the latter.

use serde_json::Value;

/// Returns the diagnostic type name for a loosely typed value.
///
/// Used as the `actual` label in type mismatch errors.
///
/// ```rust
/// use serde_json::json;
/// use turnstile::type_name;
///
/// assert_eq!(type_name(None), "undefined");
/// assert_eq!(type_name(Some(&json!(null))), "null");
/// assert_eq!(type_name(Some(&json!([1, 2]))), "array");
/// ```
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_names() {
        assert_eq!(type_name(Some(&json!("str"))), "string");
        assert_eq!(type_name(Some(&json!(100))), "number");
        assert_eq!(type_name(Some(&json!(true))), "boolean");
    }

    #[test]
    fn test_absent_is_undefined() {
        assert_eq!(type_name(None), "undefined");
    }

    #[test]
    fn test_null() {
        assert_eq!(type_name(Some(&Value::Null)), "null");
    }

    #[test]
    fn test_containers() {
        assert_eq!(type_name(Some(&json!({}))), "object");
        assert_eq!(type_name(Some(&json!([]))), "array");
    }
}
