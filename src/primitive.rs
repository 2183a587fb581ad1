//! Leaf transformers for primitive runtime types.
//!
//! These are symmetric validators: both directions run the same check and
//! pass the value through unchanged, which makes each of them an identity
//! on its accepted domain. The combinators accept them, or any custom
//! [`ValueTransformer`], as black boxes.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{TransformError, TransformErrors};
use crate::transformer::{Transformer, ValueTransformer};
use crate::value::type_name;

/// Builds a symmetric validator from a single predicate.
fn symmetric(
    check: impl Fn(Option<&Value>) -> Option<TransformError> + Clone + Send + Sync + 'static,
) -> ValueTransformer {
    let run = move |source: Option<Value>| match check(source.as_ref()) {
        None => Validation::Success(source),
        Some(error) => Validation::Failure(TransformErrors::single(error)),
    };
    Transformer::new(run.clone(), run)
}

/// Builds a type-tag validator for one [`type_name`] label.
fn type_of(expected: &'static str) -> ValueTransformer {
    symmetric(move |source| {
        let actual = type_name(source);
        if actual == expected {
            None
        } else {
            Some(TransformError::type_mismatch(expected, actual))
        }
    })
}

/// Accepts any present, non-null value.
pub fn any() -> ValueTransformer {
    symmetric(|source| match source {
        None | Some(Value::Null) => Some(TransformError::type_mismatch("any", type_name(source))),
        _ => None,
    })
}

/// Accepts numbers.
pub fn number() -> ValueTransformer {
    type_of("number")
}

/// Accepts strings.
pub fn string() -> ValueTransformer {
    type_of("string")
}

/// Accepts booleans.
pub fn boolean() -> ValueTransformer {
    type_of("boolean")
}

/// Accepts exactly the given string literals.
///
/// The expected label lists every candidate; a string outside the set is
/// reported with the offending value quoted as the actual.
///
/// # Panics
///
/// Panics if called with no candidates.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::literal;
///
/// let role = literal(["admin", "user"]);
/// assert!(role.try_transform(Some(json!("admin"))).is_ok());
/// assert!(role.try_transform(Some(json!("guest"))).is_err());
/// ```
pub fn literal<I, S>(candidates: I) -> ValueTransformer
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
    assert!(!candidates.is_empty(), "literal requires at least one candidate");
    let expected = candidates
        .iter()
        .map(|candidate| format!("'{}'", candidate))
        .collect::<Vec<_>>()
        .join(" | ");

    symmetric(move |source| match source {
        Some(Value::String(s)) if candidates.iter().any(|candidate| candidate == s) => None,
        Some(Value::String(s)) => Some(TransformError::type_mismatch(
            expected.clone(),
            format!("'{}'", s),
        )),
        other => Some(TransformError::type_mismatch(expected.clone(), type_name(other))),
    })
}
