//! Integration tests for TransformError and TransformErrors.

use stillwater::prelude::*;
use turnstile::{
    array, number, obj, string, ErrorCause, TransformError, TransformErrors, ValuePath,
};

#[test]
fn test_error_carries_path_and_cause() {
    let error = TransformError::type_mismatch("number", "string").prepend("age");

    assert_eq!(error.path, ValuePath::root().push_field("age"));
    assert_eq!(
        error.cause,
        ErrorCause::Type {
            expected: "number".to_string(),
            actual: "string".to_string(),
        }
    );
}

#[test]
fn test_prepend_returns_new_error() {
    let original = TransformError::missing_member();
    let rerooted = original.clone().prepend(0).prepend("users");

    assert!(original.path.is_root());
    assert_eq!(
        rerooted.path,
        ValuePath::root().push_field("users").push_index(0)
    );
}

#[test]
fn test_errors_never_empty() {
    let errors = TransformErrors::single(TransformError::missing_member());
    assert!(!errors.is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_errors_combine_via_semigroup() {
    let e1 = TransformErrors::single(TransformError::missing_member().prepend("name"));
    let e2 = TransformErrors::single(TransformError::type_mismatch("number", "string").prepend("age"));
    let e3 = TransformErrors::single(TransformError::missing_member().prepend("email"));

    let combined = e1.combine(e2).combine(e3);

    assert_eq!(combined.len(), 3);
    let paths: Vec<_> = combined.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["name", "age", "email"]);
}

#[test]
fn test_semigroup_associativity() {
    let e1 = TransformErrors::single(TransformError::missing_member().prepend("a"));
    let e2 = TransformErrors::single(TransformError::missing_member().prepend("b"));
    let e3 = TransformErrors::single(TransformError::missing_member().prepend("c"));

    let left = e1.clone().combine(e2.clone()).combine(e3.clone());
    let right = e1.combine(e2.combine(e3));

    assert_eq!(left, right);
}

#[test]
fn test_at_path_filters() {
    let path_a = ValuePath::root().push_field("a");
    let errors = TransformErrors::from_vec(vec![
        TransformError::missing_member().prepend("a"),
        TransformError::missing_member().prepend("b"),
        TransformError::type_mismatch("number", "null").prepend("a"),
    ]);

    assert_eq!(errors.at_path(&path_a).len(), 2);
}

#[test]
fn test_aggregate_preserves_discovery_order() {
    // the aggregate handed out by try_transform lists errors in traversal
    // order: schema declaration order for objects, index order for arrays
    let transformer = obj([
        ("name", string()),
        ("scores", array(number())),
        ("age", number()),
    ]);

    let errors = transformer
        .try_transform(Some(serde_json::json!({
            "scores": [1, "x", 2, false],
            "age": "old",
        })))
        .unwrap_err();

    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["name", "scores[1]", "scores[3]", "age"]);
}

#[test]
fn test_aggregate_displays_every_error() {
    let transformer = obj([("name", string()), ("age", number())]);
    let errors = transformer
        .try_transform(Some(serde_json::json!({})))
        .unwrap_err();

    let display = errors.to_string();
    assert!(display.contains("2 error(s)"));
    assert!(display.contains("name: required member is missing"));
    assert!(display.contains("age: required member is missing"));
}

#[test]
fn test_aggregate_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let errors = TransformErrors::single(TransformError::missing_member());
    takes_error(&errors);
}

#[test]
fn test_into_iter_yields_owned_errors() {
    let errors = TransformErrors::from_vec(vec![
        TransformError::missing_member().prepend("a"),
        TransformError::missing_member().prepend("b"),
    ]);

    let collected: Vec<TransformError> = errors.into_iter().collect();
    assert_eq!(collected.len(), 2);
}
