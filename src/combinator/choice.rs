//! The `either` combinator.

use serde_json::Value;
use stillwater::Validation;

use crate::transformer::{Transformer, ValueTransformer};

/// Tries each branch in declared order and returns the first success.
///
/// If every branch fails, only the *last* branch's failure is returned;
/// earlier failures are discarded. This is a deliberate policy, not an
/// aggregation: a union's branches describe the same location, and piling
/// up one rejection per branch buries the signal. The inverse direction
/// applies the same left-to-right, first-success, last-failure policy with
/// each branch's inverse.
///
/// # Panics
///
/// Panics if called with no branches; an empty union is a programmer error.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{either, number, string, ErrorCause};
///
/// let id = either([string(), number()]);
/// assert!(id.try_transform(Some(json!("hoge"))).is_ok());
/// assert!(id.try_transform(Some(json!(10))).is_ok());
///
/// // only the number branch's failure is reported
/// let errors = id.try_transform(Some(json!(null))).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(
///     errors.first().cause,
///     ErrorCause::Type { expected: "number".into(), actual: "null".into() },
/// );
/// ```
pub fn either(branches: impl IntoIterator<Item = ValueTransformer>) -> ValueTransformer {
    let branches: Vec<ValueTransformer> = branches.into_iter().collect();
    assert!(!branches.is_empty(), "either requires at least one transformer");

    let forward = branches.clone();
    let inverse = branches;
    Transformer::new(
        move |source: Option<Value>| {
            let mut last = None;
            for branch in &forward {
                match branch.transform(source.clone()) {
                    Validation::Success(value) => return Validation::Success(value),
                    failure => last = Some(failure),
                }
            }
            last.expect("either requires at least one transformer")
        },
        move |value: Option<Value>| {
            let mut last = None;
            for branch in &inverse {
                match branch.inverse_transform(value.clone()) {
                    Validation::Success(source) => return Validation::Success(source),
                    failure => last = Some(failure),
                }
            }
            last.expect("either requires at least one transformer")
        },
    )
}
