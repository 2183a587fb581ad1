//! Result alias and combination for transformation outcomes.
//!
//! Outcomes use stillwater's `Validation`, which accumulates errors instead
//! of short-circuiting. [`combine`] is the sequencing operation containers
//! use to evaluate every member and report all failures in one pass.

use stillwater::Validation;

use crate::error::{TransformError, TransformErrors};

/// The outcome of running a transformer: a value, or at least one error.
pub type TransformResult<T> = Validation<T, TransformErrors>;

/// Creates a successful result.
pub fn succeed<T>(value: T) -> TransformResult<T> {
    Validation::Success(value)
}

/// Creates a failed result carrying a single error.
pub fn fail<T>(error: TransformError) -> TransformResult<T> {
    Validation::Failure(TransformErrors::single(error))
}

/// Combines many results into one.
///
/// If every element succeeded, returns the values in input order. Otherwise
/// returns the concatenation, in input order, of every error from every
/// failing element; values from successful elements are discarded.
///
/// ```rust
/// use turnstile::{combine, fail, succeed, TransformError};
///
/// let all_ok = combine(vec![succeed(1), succeed(2)]);
/// assert_eq!(all_ok.into_result().unwrap(), vec![1, 2]);
///
/// let mixed = combine(vec![
///     succeed(1),
///     fail(TransformError::missing_member()),
///     fail(TransformError::type_mismatch("number", "null")),
/// ]);
/// let errors = mixed.into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn combine<T>(results: impl IntoIterator<Item = TransformResult<T>>) -> TransformResult<Vec<T>> {
    let mut values = Vec::new();
    let mut errors: Vec<TransformError> = Vec::new();

    for result in results {
        match result {
            Validation::Success(value) => values.push(value),
            Validation::Failure(failure) => errors.extend(failure),
        }
    }

    if errors.is_empty() {
        Validation::Success(values)
    } else {
        Validation::Failure(TransformErrors::from_vec(errors))
    }
}
