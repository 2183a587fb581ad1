//! The invertible transformer core.
//!
//! A [`Transformer`] pairs a forward and an inverse function, each mapping a
//! value to a [`TransformResult`]. Transformers compose sequentially and can
//! be inverted, forming a category whose objects are types and whose
//! morphisms are transformers; the laws are exercised in
//! `tests/transformer_test.rs`.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::error::TransformErrors;
use crate::result::TransformResult;

/// Transformation logic stored as a shareable closure.
type TransformFn<A, B> = Arc<dyn Fn(A) -> TransformResult<B> + Send + Sync>;

/// A composable, invertible, validating function pair.
///
/// Once constructed a transformer is immutable and cheap to clone (both
/// directions are `Arc`ed closures), so it can live in long-lived registries
/// and be shared freely across threads. All failure is communicated through
/// the result; a transformer never panics on input.
///
/// # Example
///
/// ```rust
/// use stillwater::Validation;
/// use turnstile::{fail, Transformer, TransformError};
///
/// // parses decimal strings, prints numbers back
/// let parse = Transformer::new(
///     |s: String| match s.parse::<i64>() {
///         Ok(n) => Validation::Success(n),
///         Err(e) => fail(TransformError::custom(e)),
///     },
///     |n: i64| Validation::Success(n.to_string()),
/// );
///
/// assert_eq!(parse.try_transform("10".to_string()).unwrap(), 10);
/// assert_eq!(parse.try_inverse_transform(10).unwrap(), "10");
/// ```
pub struct Transformer<A, B> {
    forward: TransformFn<A, B>,
    inverse: TransformFn<B, A>,
}

impl<A, B> Clone for Transformer<A, B> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            inverse: Arc::clone(&self.inverse),
        }
    }
}

impl<A: 'static, B: 'static> Transformer<A, B> {
    /// Creates a transformer from a forward and an inverse function.
    ///
    /// There is no implicit default for either direction: a transformer
    /// whose inverse is not meaningful should not be constructed with a
    /// fabricated one. Validators are the legitimate symmetric case: both
    /// directions run the same check and pass the value through.
    pub fn new(
        forward: impl Fn(A) -> TransformResult<B> + Send + Sync + 'static,
        inverse: impl Fn(B) -> TransformResult<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        }
    }

    /// Runs the forward direction.
    pub fn transform(&self, source: A) -> TransformResult<B> {
        (self.forward)(source)
    }

    /// Runs the inverse direction.
    pub fn inverse_transform(&self, value: B) -> TransformResult<A> {
        (self.inverse)(value)
    }

    /// Runs the forward direction, converting failure into an `Err` carrying
    /// every collected error.
    ///
    /// Use at integration boundaries where an aggregate error value is
    /// expected; combinators never use this internally.
    pub fn try_transform(&self, source: A) -> Result<B, TransformErrors> {
        self.transform(source).into_result()
    }

    /// Runs the inverse direction, converting failure into an `Err` carrying
    /// every collected error.
    pub fn try_inverse_transform(&self, value: B) -> Result<A, TransformErrors> {
        self.inverse_transform(value).into_result()
    }

    /// Swaps the forward and inverse directions.
    ///
    /// Inverting twice yields a transformer equivalent to the original.
    pub fn invert(self) -> Transformer<B, A> {
        Transformer {
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Chains another transformer after this one.
    ///
    /// Forward runs `self` then, on success, `next`; the first failure
    /// short-circuits, since the next stage cannot run on a failed one.
    /// Only sibling members of a container accumulate; successive stages
    /// do not. The inverse is the mirror: `next`'s inverse, then `self`'s.
    pub fn compose<C: 'static>(self, next: Transformer<B, C>) -> Transformer<A, C> {
        let Transformer {
            forward: self_forward,
            inverse: self_inverse,
        } = self;
        let Transformer {
            forward: next_forward,
            inverse: next_inverse,
        } = next;

        Transformer::new(
            move |source| match self_forward(source) {
                Validation::Success(mid) => next_forward(mid),
                Validation::Failure(errors) => Validation::Failure(errors),
            },
            move |value| match next_inverse(value) {
                Validation::Success(mid) => self_inverse(mid),
                Validation::Failure(errors) => Validation::Failure(errors),
            },
        )
    }
}

/// The identity transformer: both directions succeed with the input
/// unchanged. Left and right unit of [`Transformer::compose`].
pub fn identity<A: 'static>() -> Transformer<A, A> {
    Transformer::new(
        |source| Validation::Success(source),
        |value| Validation::Success(value),
    )
}

/// A transformer over loosely typed values, which is what the structural
/// combinators produce and consume.
///
/// `None` models an absent value (`undefined`), distinct from
/// `Some(Value::Null)`. See [`crate::type_name`].
pub type ValueTransformer = Transformer<Option<Value>, Option<Value>>;
