//! Registry of named definitions.
//!
//! Payload contracts are usually declared once and checked in many places.
//! [`DefinitionRegistry`] stores them under names and validates against them
//! by name.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::definition::Definition;
use crate::describe::describe;
use crate::matcher::validate;
use crate::ValidationResult;

/// Type alias for the definition storage map.
type DefinitionMap = Arc<RwLock<HashMap<String, Arc<Definition>>>>;

/// A thread-safe registry of named definitions.
///
/// Clones share the same storage, so a registry can be handed to worker
/// threads and extended from any of them.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Definition, DefinitionRegistry};
/// use serde_json::json;
///
/// let registry = DefinitionRegistry::new();
/// registry
///     .register("User", Definition::object([
///         ("name", Definition::string()),
///         ("age", Definition::number()),
///     ]))
///     .unwrap();
///
/// let result = registry.validate("User", &json!({"name": "Alice", "age": 30})).unwrap();
/// assert!(result.is_success());
///
/// // Duplicate registration fails
/// assert!(registry.register("User", Definition::any_object()).is_err());
/// ```
#[derive(Clone, Default)]
pub struct DefinitionRegistry {
    definitions: DefinitionMap,
}

impl DefinitionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register(
        &self,
        name: impl Into<String>,
        definition: impl Into<Definition>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut definitions = self.definitions.write();

        if definitions.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(name = %name, "registered definition");
        definitions.insert(name, Arc::new(definition.into()));
        Ok(())
    }

    /// Retrieves a definition by name.
    pub fn get(&self, name: &str) -> Option<Arc<Definition>> {
        self.definitions.read().get(name).cloned()
    }

    /// Returns true if a definition is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Human-readable description of a registered definition.
    pub fn describe(&self, name: &str) -> Option<String> {
        self.get(name).map(|definition| describe(&definition, None))
    }

    /// Validates a value against a named definition.
    ///
    /// The lock is released before matching starts.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DefinitionNotFound` if the name is not registered.
    pub fn validate(&self, name: &str, value: &Value) -> Result<ValidationResult, RegistryError> {
        let definition = self
            .get(name)
            .ok_or_else(|| RegistryError::DefinitionNotFound(name.to_string()))?;

        Ok(validate(&definition, value))
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a definition with a name that already exists.
    #[error("definition '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate against a name that doesn't exist.
    #[error("definition '{0}' not found")]
    DefinitionNotFound(String),
}
