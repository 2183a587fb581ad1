//! Named transformer storage for reuse across call sites.
//!
//! Transformers are immutable once built, so the natural way to reuse them
//! is to construct each one once and share it. [`TransformerRegistry`] is
//! that shared home, with an explicit lifecycle: build it, register
//! transformers under names, hand it (or clones of it) to whoever needs to
//! run them. Reconstructing a transformer instead of looking it up always
//! produces identical results; the registry is an optimization, never a
//! correctness requirement.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::result::TransformResult;
use crate::transformer::ValueTransformer;

/// A thread-safe registry of named transformers.
///
/// Clones share the same underlying storage. Reads (lookups, by-name
/// transforms) can proceed concurrently from many threads; registrations
/// are serialized by the lock.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use turnstile::{number, obj, string, TransformerRegistry};
///
/// let registry = TransformerRegistry::new();
/// registry.register("Person", obj([("name", string()), ("age", number())])).unwrap();
///
/// let result = registry
///     .transform("Person", Some(json!({"name": "tanaka", "age": 35})))
///     .unwrap();
/// assert!(result.is_success());
/// ```
#[derive(Clone)]
pub struct TransformerRegistry {
    transformers: Arc<RwLock<HashMap<String, ValueTransformer>>>,
}

impl TransformerRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            transformers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a transformer under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register(
        &self,
        name: impl Into<String>,
        transformer: ValueTransformer,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut transformers = self.transformers.write();

        if transformers.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        transformers.insert(name, transformer);
        Ok(())
    }

    /// Retrieves a transformer by name.
    ///
    /// The returned transformer is a cheap handle sharing the registered
    /// one; `None` if the name is unknown.
    pub fn get(&self, name: &str) -> Option<ValueTransformer> {
        self.transformers.read().get(name).cloned()
    }

    /// Returns true if a transformer is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.transformers.read().contains_key(name)
    }

    /// Runs the named transformer's forward direction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TransformerNotFound`] if the name is
    /// unknown. Transformation failures are inside the `Ok` result.
    pub fn transform(
        &self,
        name: &str,
        source: Option<Value>,
    ) -> Result<TransformResult<Option<Value>>, RegistryError> {
        let transformer = self
            .get(name)
            .ok_or_else(|| RegistryError::TransformerNotFound(name.to_string()))?;
        Ok(transformer.transform(source))
    }

    /// Runs the named transformer's inverse direction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TransformerNotFound`] if the name is
    /// unknown.
    pub fn inverse_transform(
        &self,
        name: &str,
        value: Option<Value>,
    ) -> Result<TransformResult<Option<Value>>, RegistryError> {
        let transformer = self
            .get(name)
            .ok_or_else(|| RegistryError::TransformerNotFound(name.to_string()))?;
        Ok(transformer.inverse_transform(value))
    }
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a transformer with a name that already exists.
    #[error("transformer '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to use a transformer name that doesn't exist.
    #[error("transformer '{0}' not found")]
    TransformerNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::string;
    use serde_json::json;

    #[test]
    fn test_register_and_get() {
        let registry = TransformerRegistry::new();
        registry.register("Email", string()).unwrap();

        assert!(registry.contains("Email"));
        assert!(registry.get("Email").is_some());
        assert!(registry.get("Unknown").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = TransformerRegistry::new();
        registry.register("Email", string()).unwrap();

        let error = registry.register("Email", string()).unwrap_err();
        assert!(matches!(error, RegistryError::DuplicateName(name) if name == "Email"));
    }

    #[test]
    fn test_transform_by_name() {
        let registry = TransformerRegistry::new();
        registry.register("Email", string()).unwrap();

        let result = registry.transform("Email", Some(json!("a@example.com"))).unwrap();
        assert!(result.is_success());

        let result = registry.transform("Email", Some(json!(10))).unwrap();
        assert!(result.is_failure());
    }

    #[test]
    fn test_unknown_name_is_a_registry_error() {
        let registry = TransformerRegistry::new();
        let error = registry.transform("Nope", Some(json!(1))).unwrap_err();
        assert!(matches!(error, RegistryError::TransformerNotFound(_)));
    }

    #[test]
    fn test_clones_share_storage() {
        let registry = TransformerRegistry::new();
        let handle = registry.clone();
        registry.register("Email", string()).unwrap();

        assert!(handle.contains("Email"));
    }
}
