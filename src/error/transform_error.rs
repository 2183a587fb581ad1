//! Transformation error types.
//!
//! This module provides [`TransformError`] for single failures and
//! [`TransformErrors`] for the non-empty collections that failed results
//! carry.

use std::fmt::{self, Display};
use std::sync::Arc;

use stillwater::prelude::*;
use thiserror::Error;

use crate::path::{PathSegment, ValuePath};

/// Why a location failed to transform.
///
/// The taxonomy is closed so containers can match on it exhaustively;
/// custom leaf transformers extend it through the [`ErrorCause::Custom`]
/// variant, which carries an opaque error payload.
#[derive(Debug, Clone, Error)]
pub enum ErrorCause {
    /// The value had the wrong runtime type.
    #[error("expected '{expected}', but got '{actual}'")]
    Type {
        /// Name of the expected type.
        expected: String,
        /// Diagnostic name of the actual value, see [`crate::type_name`].
        actual: String,
    },

    /// A required member was absent or undefined.
    #[error("required member is missing")]
    Member,

    /// A tuple had the wrong number of elements.
    #[error("expected length {expected}, but got {actual}")]
    Length {
        /// Declared tuple arity.
        expected: usize,
        /// Length of the input.
        actual: usize,
    },

    /// A domain error raised by a custom leaf transformer.
    #[error("{0}")]
    Custom(Arc<dyn std::error::Error + Send + Sync>),
}

/// Custom causes compare by rendered message; everything else structurally.
impl PartialEq for ErrorCause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ErrorCause::Type { expected, actual },
                ErrorCause::Type {
                    expected: e,
                    actual: a,
                },
            ) => expected == e && actual == a,
            (ErrorCause::Member, ErrorCause::Member) => true,
            (
                ErrorCause::Length { expected, actual },
                ErrorCause::Length {
                    expected: e,
                    actual: a,
                },
            ) => expected == e && actual == a,
            (ErrorCause::Custom(lhs), ErrorCause::Custom(rhs)) => {
                lhs.to_string() == rhs.to_string()
            }
            _ => false,
        }
    }
}

/// A single transformation failure at one location.
///
/// Errors are created at the failure site with a root-relative path; each
/// container the error bubbles through prepends its own segment via
/// [`TransformError::prepend`], so the path ends up relative to the
/// top-level call. Tests should compare errors on `(path, cause)`; the
/// rendered string is cosmetic.
///
/// # Example
///
/// ```rust
/// use turnstile::{TransformError, ValuePath};
///
/// let error = TransformError::type_mismatch("number", "string").prepend(1);
/// assert_eq!(error.path, ValuePath::root().push_index(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformError {
    /// Location of the failure, relative to the top-level call.
    pub path: ValuePath,
    /// Why the location failed.
    pub cause: ErrorCause,
}

impl TransformError {
    /// Creates an error with the given cause at the root path.
    pub fn new(cause: ErrorCause) -> Self {
        Self {
            path: ValuePath::root(),
            cause,
        }
    }

    /// Creates a type mismatch error at the root path.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorCause::Type {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates a missing member error at the root path.
    pub fn missing_member() -> Self {
        Self::new(ErrorCause::Member)
    }

    /// Creates a tuple arity error at the root path.
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::new(ErrorCause::Length { expected, actual })
    }

    /// Wraps an arbitrary domain error at the root path.
    pub fn custom(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(ErrorCause::Custom(Arc::new(source)))
    }

    /// Returns a new error whose path has `segment` prepended.
    ///
    /// The receiver is consumed; clone first if the original is still
    /// referenced elsewhere.
    pub fn prepend(self, segment: impl Into<PathSegment>) -> Self {
        Self {
            path: self.path.prepend(segment),
            cause: self.cause,
        }
    }
}

impl Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.cause)
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            ErrorCause::Custom(inner) => Some(&**inner as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// TransformError must stay shareable across threads; transformers are
// Send + Sync and error values flow out of them.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TransformError>();
    assert_sync::<TransformError>();
};

/// A non-empty collection of transformation errors.
///
/// `TransformErrors` wraps a `NonEmptyVec<TransformError>` so a failed
/// result can never carry zero errors. It is both the error payload of
/// [`TransformResult`](crate::TransformResult) and the aggregate returned
/// by the `try_*` entry points on [`Transformer`](crate::Transformer).
///
/// # Combining errors
///
/// `TransformErrors` implements `Semigroup`, letting sibling failures be
/// merged without losing any of them:
///
/// ```rust
/// use stillwater::prelude::*;
/// use turnstile::{TransformError, TransformErrors};
///
/// let first = TransformErrors::single(TransformError::missing_member().prepend("name"));
/// let second = TransformErrors::single(TransformError::missing_member().prepend("email"));
///
/// assert_eq!(first.combine(second).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformErrors(NonEmptyVec<TransformError>);

impl TransformErrors {
    /// Creates a `TransformErrors` containing a single error.
    pub fn single(error: TransformError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `TransformErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<TransformError>) -> Self {
        Self(errors)
    }

    /// Creates a `TransformErrors` from a `Vec` of errors.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty. Constructing a failure with zero errors
    /// is a programmer error, never an input condition.
    pub fn from_vec(errors: Vec<TransformError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("TransformErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &TransformError> {
        self.0.iter()
    }

    /// Returns the first error in discovery order.
    pub fn first(&self) -> &TransformError {
        self.0.head()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&TransformError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Converts this collection into a `Vec<TransformError>`.
    pub fn into_vec(self) -> Vec<TransformError> {
        self.0.into_vec()
    }
}

impl Semigroup for TransformErrors {
    fn combine(self, other: Self) -> Self {
        TransformErrors(self.0.combine(other.0))
    }
}

impl Display for TransformErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "transformation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for TransformErrors {}

impl IntoIterator for TransformErrors {
    type Item = TransformError;
    type IntoIter = std::vec::IntoIter<TransformError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a TransformErrors {
    type Item = &'a TransformError;
    type IntoIter = Box<dyn Iterator<Item = &'a TransformError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("invalid input")]
    struct InvalidInput;

    #[test]
    fn test_error_starts_at_root() {
        let error = TransformError::type_mismatch("number", "string");
        assert!(error.path.is_root());
        assert_eq!(
            error.cause,
            ErrorCause::Type {
                expected: "number".to_string(),
                actual: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_prepend_builds_outward() {
        // a leaf error bubbling through [1] then "items"
        let error = TransformError::type_mismatch("number", "string")
            .prepend(1)
            .prepend("items");

        assert_eq!(error.path, ValuePath::root().push_field("items").push_index(1));
    }

    #[test]
    fn test_prepend_is_pure() {
        let original = TransformError::missing_member();
        let rerooted = original.clone().prepend("a");

        assert!(original.path.is_root());
        assert_eq!(rerooted.path, ValuePath::root().push_field("a"));
        assert_eq!(original.cause, rerooted.cause);
    }

    #[test]
    fn test_display_includes_path_and_cause() {
        let error = TransformError::type_mismatch("number", "string").prepend(1).prepend("items");
        assert_eq!(error.to_string(), "items[1]: expected 'number', but got 'string'");
    }

    #[test]
    fn test_display_at_root() {
        let error = TransformError::type_mismatch("object", "null");
        assert_eq!(error.to_string(), "<root>: expected 'object', but got 'null'");
    }

    #[test]
    fn test_custom_cause_compares_by_message() {
        let a = TransformError::custom(InvalidInput);
        let b = TransformError::custom(InvalidInput);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_cause_exposes_source() {
        use std::error::Error as _;
        let error = TransformError::custom(InvalidInput);
        assert!(error.source().is_some());
        assert!(TransformError::missing_member().source().is_none());
    }

    #[test]
    fn test_cause_inequality_across_variants() {
        assert_ne!(
            TransformError::missing_member().cause,
            TransformError::type_mismatch("a", "b").cause
        );
    }

    #[test]
    fn test_errors_single() {
        let error = TransformError::missing_member();
        let errors = TransformErrors::single(error.clone());

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &error);
    }

    #[test]
    fn test_errors_combine_preserves_order() {
        let first = TransformErrors::single(TransformError::missing_member().prepend("a"));
        let second = TransformErrors::single(TransformError::missing_member().prepend("b"));

        let combined = first.combine(second);
        let paths: Vec<_> = combined.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn test_errors_at_path() {
        let path_a = ValuePath::root().push_field("a");
        let errors = TransformErrors::from_vec(vec![
            TransformError::missing_member().prepend("a"),
            TransformError::type_mismatch("number", "string").prepend("a"),
            TransformError::missing_member().prepend("b"),
        ]);

        assert_eq!(errors.at_path(&path_a).len(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one error")]
    fn test_from_vec_rejects_empty() {
        TransformErrors::from_vec(Vec::new());
    }

    #[test]
    fn test_errors_display_lists_all() {
        let errors = TransformErrors::from_vec(vec![
            TransformError::missing_member().prepend("name"),
            TransformError::type_mismatch("number", "string").prepend("age"),
        ]);

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("name: required member is missing"));
        assert!(display.contains("age: expected 'number', but got 'string'"));
    }
}
