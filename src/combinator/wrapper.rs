//! Wrapping combinators: `optional`, `nullable`, `with_default`.

use serde_json::Value;
use stillwater::Validation;

use crate::transformer::{Transformer, ValueTransformer};

/// Lets `undefined` pass through the wrapped transformer untouched.
///
/// An absent input short-circuits to an absent output in both directions
/// without consulting the inner transformer. `null` is *not* special-cased:
/// it still reaches the inner transformer, which rejects it unless it
/// accepts nulls itself.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{optional, string};
///
/// let transformer = optional(string());
/// assert_eq!(transformer.try_transform(None).unwrap(), None);
/// assert!(transformer.try_transform(Some(json!(null))).is_err());
/// ```
pub fn optional(inner: ValueTransformer) -> ValueTransformer {
    let forward = inner.clone();
    let inverse = inner;
    Transformer::new(
        move |source: Option<Value>| match source {
            None => Validation::Success(None),
            present => forward.transform(present),
        },
        move |value: Option<Value>| match value {
            None => Validation::Success(None),
            present => inverse.inverse_transform(present),
        },
    )
}

/// Lets `null` pass through the wrapped transformer untouched.
///
/// Symmetric to [`optional`] but for explicit nulls; an absent input is not
/// special-cased and reaches the inner transformer.
pub fn nullable(inner: ValueTransformer) -> ValueTransformer {
    let forward = inner.clone();
    let inverse = inner;
    Transformer::new(
        move |source: Option<Value>| match source {
            Some(Value::Null) => Validation::Success(Some(Value::Null)),
            other => forward.transform(other),
        },
        move |value: Option<Value>| match value {
            Some(Value::Null) => Validation::Success(Some(Value::Null)),
            other => inverse.inverse_transform(other),
        },
    )
}

/// Substitutes a default when the forward input is nullish.
///
/// `undefined` and `null` both map to `Ok(default)` without consulting the
/// inner transformer; every other value, including falsy ones like `0`,
/// `""`, and `false`, is handed to it unchanged. The inverse direction is
/// unaffected and always delegates: the default fills in missing forward
/// input, it never suppresses a reverse value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{string, with_default};
///
/// let transformer = with_default(string(), json!("aaa"));
/// assert_eq!(transformer.try_transform(None).unwrap(), Some(json!("aaa")));
/// assert_eq!(transformer.try_transform(Some(json!(""))).unwrap(), Some(json!("")));
/// ```
pub fn with_default(inner: ValueTransformer, default: Value) -> ValueTransformer {
    let forward = inner.clone();
    let inverse = inner;
    Transformer::new(
        move |source: Option<Value>| match source {
            None | Some(Value::Null) => Validation::Success(Some(default.clone())),
            present => forward.transform(present),
        },
        move |value: Option<Value>| inverse.inverse_transform(value),
    )
}
