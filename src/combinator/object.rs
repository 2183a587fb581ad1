//! The `obj` combinator.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;
use stillwater::Validation;

use crate::error::{TransformError, TransformErrors};
use crate::path::PathSegment;
use crate::result::{fail, TransformResult};
use crate::transformer::{Transformer, ValueTransformer};
use crate::value::type_name;

use super::attribute_member;

/// Transforms an object member-wise against a declared field list.
///
/// Input must be an object; `null` is rejected with its own distinct actual
/// label. Every declared field is transformed in declaration order; an
/// absent member is fed to its transformer as `undefined`, and a resulting
/// type mismatch against `undefined` is reported as a missing member at that
/// key. All failing keys are reported together; the output object is built
/// only when no key failed. Keys on the input that the field list does not
/// declare are ignored: not copied to the output, not reported as errors.
///
/// The inverse direction mirrors this per key with each field's inverse.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{number, obj, string, ErrorCause, ValuePath};
///
/// let person = obj([("name", string()), ("age", number())]);
/// assert!(person.try_transform(Some(json!({"name": "tanaka", "age": 35}))).is_ok());
///
/// let errors = person.try_transform(Some(json!({"age": 35}))).unwrap_err();
/// assert_eq!(errors.first().path, ValuePath::root().push_field("name"));
/// assert_eq!(errors.first().cause, ErrorCause::Member);
/// ```
pub fn obj<K, I>(fields: I) -> ValueTransformer
where
    K: Into<String>,
    I: IntoIterator<Item = (K, ValueTransformer)>,
{
    let fields: IndexMap<String, ValueTransformer> = fields
        .into_iter()
        .map(|(key, transformer)| (key.into(), transformer))
        .collect();
    let fields = Arc::new(fields);

    let forward = Arc::clone(&fields);
    let inverse = fields;
    Transformer::new(
        move |source: Option<Value>| match source {
            Some(Value::Object(members)) => {
                each_member(&forward, &members, |field, member| field.transform(member))
            }
            other => fail(TransformError::type_mismatch("object", type_name(other.as_ref()))),
        },
        move |value: Option<Value>| match value {
            Some(Value::Object(members)) => {
                each_member(&inverse, &members, |field, member| {
                    field.inverse_transform(member)
                })
            }
            other => fail(TransformError::type_mismatch("object", type_name(other.as_ref()))),
        },
    )
}

/// Runs one direction of every declared field, attributing errors per key.
///
/// A member that transforms to `undefined` is omitted from the output
/// rather than written as `null`.
fn each_member(
    fields: &IndexMap<String, ValueTransformer>,
    members: &Map<String, Value>,
    run: impl Fn(&ValueTransformer, Option<Value>) -> TransformResult<Option<Value>>,
) -> TransformResult<Option<Value>> {
    let mut output = Map::new();
    let mut errors: Vec<TransformError> = Vec::new();

    for (key, field) in fields {
        let member = members.get(key).cloned();
        match attribute_member(run(field, member), &PathSegment::field(key.clone())) {
            Validation::Success(Some(value)) => {
                output.insert(key.clone(), value);
            }
            Validation::Success(None) => {}
            Validation::Failure(failure) => errors.extend(failure),
        }
    }

    if errors.is_empty() {
        Validation::Success(Some(Value::Object(output)))
    } else {
        Validation::Failure(TransformErrors::from_vec(errors))
    }
}
