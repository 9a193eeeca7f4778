//! Named pipeline registry.
//!
//! This module provides [`PipelineRegistry`], which stores pipelines under
//! names (e.g. `"signup"`, `"profile"`) so request handlers can look up the
//! pipeline for a form without owning it.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::changeset::Changeset;
use crate::error::MisuseError;
use crate::pipeline::Pipeline;

/// Type alias for the pipeline storage map.
type PipelineMap = Arc<RwLock<HashMap<String, Arc<Pipeline>>>>;

/// A thread-safe registry of named pipelines.
///
/// The registry is an ordinary value owned by the caller; there is no global
/// instance. Cloning it yields a handle to the same storage.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Pipeline, PipelineRegistry, Validate};
/// use serde_json::json;
///
/// let registry = PipelineRegistry::new();
/// registry
///     .register("signup", Pipeline::new().then(Validate::required(["email"])))
///     .unwrap();
///
/// let result = registry.validate("signup", &Changeset::new()).unwrap();
/// assert_eq!(result.errors_on("email").len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct PipelineRegistry {
    pipelines: PipelineMap,
}

impl PipelineRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pipeline under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register(&self, name: impl Into<String>, pipeline: Pipeline) -> Result<(), RegistryError> {
        let name = name.into();
        let mut pipelines = self.pipelines.write();

        if pipelines.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, stages = pipeline.len(), "pipeline registered");
        pipelines.insert(name, Arc::new(pipeline));
        Ok(())
    }

    /// Retrieves a pipeline by name.
    pub fn get(&self, name: &str) -> Option<Arc<Pipeline>> {
        self.pipelines.read().get(name).cloned()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.pipelines.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Runs the named pipeline on a changeset.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PipelineNotFound` if no pipeline has that name,
    /// or `RegistryError::Misuse` if a validator was misused.
    pub fn validate(&self, name: &str, changeset: &Changeset) -> Result<Changeset, RegistryError> {
        let pipeline = self.lookup(name)?;
        Ok(pipeline.validate(changeset)?)
    }

    /// Runs the named pipeline over independent changesets in parallel.
    pub fn validate_all(
        &self,
        name: &str,
        changesets: &[Changeset],
    ) -> Result<Vec<Changeset>, RegistryError> {
        let pipeline = self.lookup(name)?;
        Ok(pipeline.validate_all(changesets)?)
    }

    fn lookup(&self, name: &str) -> Result<Arc<Pipeline>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::PipelineNotFound(name.to_string()))
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a pipeline with a name that already exists.
    #[error("pipeline '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a pipeline name that doesn't exist.
    #[error("pipeline '{0}' not found")]
    PipelineNotFound(String),

    /// A validator in the pipeline was misused.
    #[error(transparent)]
    Misuse(#[from] MisuseError),
}
