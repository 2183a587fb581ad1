//! Structural combinators for composing transformers.
//!
//! Combinators take transformers plus a shape description and return a new
//! transformer implementing that shape, with error paths re-rooted under the
//! member that produced them:
//!
//! - [`optional`] / [`nullable`]: pass `undefined` (respectively `null`)
//!   through untouched
//! - [`array`] / [`tuple`]: per-element transformation with index
//!   attribution
//! - [`obj`]: per-key transformation in declaration order
//! - [`either`]: first branch to succeed wins
//! - [`with_default`]: substitute a default for nullish forward input
//!
//! Containers never stop at the first failing member: every member runs
//! and all errors are reported together, in traversal order.

mod choice;
mod object;
mod sequence;
mod wrapper;

pub use choice::either;
pub use object::obj;
pub use sequence::{array, tuple};
pub use wrapper::{nullable, optional, with_default};

use stillwater::Validation;

use crate::error::{ErrorCause, TransformError, TransformErrors};
use crate::path::PathSegment;
use crate::result::TransformResult;

/// Re-roots a member result under its segment.
///
/// A failure still at the member's root whose cause is a type mismatch
/// against an absent value is reclassified as a missing-member error; that
/// happens exactly once, here, at the immediate parent. Every error is then
/// prepended with the member's segment. Applied uniformly by all container
/// combinators.
pub(crate) fn attribute_member<T>(
    result: TransformResult<T>,
    segment: &PathSegment,
) -> TransformResult<T> {
    match result {
        Validation::Success(value) => Validation::Success(value),
        Validation::Failure(failure) => {
            let errors = failure
                .into_iter()
                .map(|error| {
                    if error.path.is_root() && absent_value_mismatch(&error.cause) {
                        TransformError::missing_member().prepend(segment.clone())
                    } else {
                        error.prepend(segment.clone())
                    }
                })
                .collect();
            Validation::Failure(TransformErrors::from_vec(errors))
        }
    }
}

fn absent_value_mismatch(cause: &ErrorCause) -> bool {
    matches!(cause, ErrorCause::Type { actual, .. } if actual == "undefined")
}
