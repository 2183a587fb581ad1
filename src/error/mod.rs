//! Error types for transformation failures.
//!
//! This module provides the cause taxonomy, the path-annotated single error,
//! and the non-empty error collection carried by failed results.

mod transform_error;

pub use transform_error::{ErrorCause, TransformError, TransformErrors};
