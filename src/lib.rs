//! # Turnstile
//!
//! Bidirectional, path-aware value transformers that accumulate every
//! validation error.
//!
//! ## Overview
//!
//! A [`Transformer`] is a composable, invertible, validating function pair:
//! the forward direction turns a loosely typed value into a validated one,
//! the inverse turns it back. The same declarative definition therefore
//! serves both decoding and encoding. When a composite fails, it fails
//! completely: every member of an object, array, or tuple is evaluated and
//! all errors come back together, each annotated with the path to the
//! member that produced it.
//!
//! ## Core types
//!
//! - [`Transformer`]: an invertible transformation with [`compose`](Transformer::compose)
//!   and [`invert`](Transformer::invert)
//! - [`TransformResult`]: success, or at least one error, built on
//!   stillwater's `Validation` for applicative error accumulation
//! - [`TransformError`] / [`TransformErrors`]: a path-annotated failure and
//!   the non-empty collections failed results carry
//! - [`ValuePath`]: where in the input a failure occurred (e.g. `users[0].email`)
//!
//! Structural combinators ([`obj`], [`array`], [`tuple`], [`optional`],
//! [`nullable`], [`either`], [`with_default`]) assemble composite
//! transformers out of leaves such as [`number`] or [`string`], re-rooting
//! member error paths as they bubble out.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use turnstile::{array, number, obj, string};
//!
//! let person = obj([
//!     ("name", string()),
//!     ("scores", array(number())),
//! ]);
//!
//! let result = person.transform(Some(json!({
//!     "name": "tanaka",
//!     "scores": [70, 80],
//! })));
//! assert!(result.is_success());
//!
//! // every failure is reported, each at its own path
//! let errors = person
//!     .try_transform(Some(json!({"scores": [70, "x"]})))
//!     .unwrap_err();
//! let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
//! assert_eq!(paths, vec!["name", "scores[1]"]);
//! ```
//!
//! Inputs are `Option<serde_json::Value>`: `None` models an absent value
//! (`undefined`), which is distinct from `Some(Value::Null)`. See
//! [`type_name`] for the diagnostic labels.

pub mod combinator;
pub mod error;
pub mod path;
pub mod primitive;
pub mod registry;
pub mod result;
pub mod transformer;
pub mod value;

pub use combinator::{array, either, nullable, obj, optional, tuple, with_default};
pub use error::{ErrorCause, TransformError, TransformErrors};
pub use path::{PathSegment, ValuePath};
pub use primitive::{any, boolean, literal, number, string};
pub use registry::{RegistryError, TransformerRegistry};
pub use result::{combine, fail, succeed, TransformResult};
pub use transformer::{identity, Transformer, ValueTransformer};
pub use value::type_name;
