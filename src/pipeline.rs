//! Composition of validators.
//!
//! This module provides [`pipe`] and [`compose`] for joining two validators,
//! and [`Pipeline`] for an ordered list of them. A composition is itself a
//! [`Validator`], so compositions nest.

use rayon::prelude::*;

use crate::changeset::Changeset;
use crate::error::MisuseError;
use crate::validators::Validator;

/// Two validators run left to right. See [`pipe`].
#[derive(Debug, Clone)]
pub struct Pipe<A, B> {
    first: A,
    second: B,
}

/// Joins two validators so that `first` runs, then `second` on its result.
///
/// ```rust
/// use changeset_validators::{pipe, Changeset, Validate, Validator};
///
/// let title = pipe(
///     Validate::required(["title"]),
///     Validate::length(["title"], 5, 100),
/// );
///
/// let result = title.validate(&Changeset::new()).unwrap();
/// assert_eq!(result.errors_on("title").len(), 1);
/// assert_eq!(result.errors_on("title")[0].validation, "required");
/// ```
pub fn pipe<A, B>(first: A, second: B) -> Pipe<A, B>
where
    A: Validator,
    B: Validator,
{
    Pipe { first, second }
}

impl<A, B> Validator for Pipe<A, B>
where
    A: Validator,
    B: Validator,
{
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        let changeset = self.first.validate(changeset)?;
        self.second.validate(&changeset)
    }
}

/// Joins two validators right to left: `outer` runs on the result of `inner`.
///
/// `compose(f, g)` behaves like `pipe(g, f)`.
pub fn compose<A, B>(outer: A, inner: B) -> Pipe<B, A>
where
    A: Validator,
    B: Validator,
{
    pipe(inner, outer)
}

/// An ordered list of validators applied one after another.
///
/// Validation failures accumulate on the changeset and never stop the
/// pipeline. A [`MisuseError`] from any stage aborts it.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Pipeline, Validate};
/// use serde_json::json;
///
/// let pipeline = Pipeline::new()
///     .then(Validate::required(["role", "age"]))
///     .then(Validate::inclusion(["role"], [json!("admin"), json!("user")]))
///     .then(Validate::greater_than_or_equal_to(["age"], 18));
///
/// let changeset = Changeset::new()
///     .put_change("role", json!("guest"))
///     .put_change("age", json!(17));
///
/// let result = pipeline.validate(&changeset).unwrap();
/// assert_eq!(result.error_count(), 2);
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Validator>>,
}

impl Pipeline {
    /// Creates an empty pipeline. An empty pipeline returns its input unchanged.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a validator and returns self for chaining.
    pub fn then<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.stages.push(Box::new(validator));
        self
    }

    /// Appends a boxed validator.
    pub fn push(&mut self, validator: Box<dyn Validator>) {
        self.stages.push(validator);
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order.
    pub fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        tracing::debug!(stages = self.stages.len(), "running validation pipeline");

        let mut current = changeset.clone();
        for stage in &self.stages {
            current = stage.validate(&current).inspect_err(|err| {
                tracing::warn!(
                    field = err.field(),
                    validator = err.validator(),
                    "validator misuse aborted pipeline"
                );
            })?;
        }

        tracing::debug!(errors = current.error_count(), "validation pipeline finished");
        Ok(current)
    }

    /// Runs the pipeline over independent changesets in parallel.
    ///
    /// Results keep the input order. If any changeset hits a misuse error, one
    /// of those errors is returned.
    pub fn validate_all(&self, changesets: &[Changeset]) -> Result<Vec<Changeset>, MisuseError> {
        changesets
            .par_iter()
            .map(|changeset| self.validate(changeset))
            .collect()
    }
}

impl Validator for Pipeline {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        Pipeline::validate(self, changeset)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
