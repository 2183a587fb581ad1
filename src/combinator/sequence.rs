//! Sequence combinators: `array` and `tuple`.

use serde_json::Value;
use stillwater::Validation;

use crate::error::TransformError;
use crate::path::PathSegment;
use crate::result::{combine, fail, TransformResult};
use crate::transformer::{Transformer, ValueTransformer};
use crate::value::type_name;

use super::attribute_member;

/// Transforms every element of an array with one transformer.
///
/// Non-array input is rejected with a type mismatch. For arrays, every
/// element is transformed (a failing element never stops its siblings)
/// and each element's errors are re-rooted under that element's index. The
/// inverse applies the element transformer's inverse the same way.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{array, number, ValuePath};
///
/// let numbers = array(number());
/// assert!(numbers.try_transform(Some(json!([0, 1, 2]))).is_ok());
///
/// let errors = numbers.try_transform(Some(json!([0, "x", 1]))).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.first().path, ValuePath::root().push_index(1));
/// ```
pub fn array(element: ValueTransformer) -> ValueTransformer {
    let forward = element.clone();
    let inverse = element;
    Transformer::new(
        move |source: Option<Value>| match source {
            Some(Value::Array(items)) => {
                each_item(items, |item| forward.transform(item))
            }
            other => fail(TransformError::type_mismatch("array", type_name(other.as_ref()))),
        },
        move |value: Option<Value>| match value {
            Some(Value::Array(items)) => {
                each_item(items, |item| inverse.inverse_transform(item))
            }
            other => fail(TransformError::type_mismatch("array", type_name(other.as_ref()))),
        },
    )
}

/// Transforms a fixed-arity array positionally, one transformer per slot.
///
/// Non-array input is rejected with a type mismatch; an array of the wrong
/// length with a distinguished length error. Elements are transformed and
/// attributed per index exactly as [`array`] does.
pub fn tuple(elements: impl IntoIterator<Item = ValueTransformer>) -> ValueTransformer {
    let elements: Vec<ValueTransformer> = elements.into_iter().collect();
    let forward = elements.clone();
    let inverse = elements;
    Transformer::new(
        move |source: Option<Value>| match source {
            Some(Value::Array(items)) => {
                each_slot(&forward, items, |element, item| element.transform(item))
            }
            other => fail(TransformError::type_mismatch("array", type_name(other.as_ref()))),
        },
        move |value: Option<Value>| match value {
            Some(Value::Array(items)) => {
                each_slot(&inverse, items, |element, item| element.inverse_transform(item))
            }
            other => fail(TransformError::type_mismatch("array", type_name(other.as_ref()))),
        },
    )
}

/// Runs one direction of an element transformer over every item, attributing
/// errors per index.
fn each_item(
    items: Vec<Value>,
    run: impl Fn(Option<Value>) -> TransformResult<Option<Value>>,
) -> TransformResult<Option<Value>> {
    let results = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| attribute_member(run(Some(item)), &PathSegment::Index(index)));
    collect_array(combine(results))
}

/// Positional variant of [`each_item`] with an arity check.
fn each_slot(
    elements: &[ValueTransformer],
    items: Vec<Value>,
    run: impl Fn(&ValueTransformer, Option<Value>) -> TransformResult<Option<Value>>,
) -> TransformResult<Option<Value>> {
    if items.len() != elements.len() {
        return fail(TransformError::invalid_length(elements.len(), items.len()));
    }
    let results = elements
        .iter()
        .zip(items)
        .enumerate()
        .map(|(index, (element, item))| {
            attribute_member(run(element, Some(item)), &PathSegment::Index(index))
        });
    collect_array(combine(results))
}

fn collect_array(result: TransformResult<Vec<Option<Value>>>) -> TransformResult<Option<Value>> {
    match result {
        Validation::Success(values) => Validation::Success(Some(Value::Array(
            values
                .into_iter()
                .map(|value| value.unwrap_or(Value::Null))
                .collect(),
        ))),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}
