//! # Changeset Validators
//!
//! Composable validators over immutable changesets. A changeset pairs
//! persisted data with proposed changes and collects per-field errors; each
//! validator takes a changeset and returns the next one, so validators chain
//! into pipelines that record every problem instead of stopping at the first.
//!
//! ## Overview
//!
//! Two kinds of failure are kept apart. Bad input is recorded as a
//! [`ValidationError`] on the returned changeset and the pipeline keeps going.
//! A validator applied to a value type it cannot judge (for example `length`
//! on a number) returns a [`MisuseError`] and the pipeline stops.
//!
//! ## Core Types
//!
//! - [`Changeset`]: Persisted data, pending changes and accumulated errors
//! - [`Validate`]: Entry point for building validators
//! - [`Validator`]: The trait every validator and pipeline implements
//! - [`Pipeline`]: An ordered list of validators
//! - [`PipelineRegistry`]: Named pipelines shared across threads
//!
//! ## Example
//!
//! ```rust
//! use changeset_validators::{Changeset, Pipeline, Validate};
//! use serde_json::json;
//!
//! let pipeline = Pipeline::new()
//!     .then(Validate::required(["title"]))
//!     .then(Validate::length(["title"], 5, 100));
//!
//! let changeset = Changeset::new().put_change("title", json!("Hi"));
//! let result = pipeline.validate(&changeset).unwrap();
//!
//! let errors = result.errors_on("title");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "should be at least 5 character(s)");
//! ```

pub mod changeset;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod validators;

pub use changeset::Changeset;
pub use error::{MisuseError, ValidationError, ValidationErrors};
pub use pipeline::{compose, pipe, Pipe, Pipeline};
pub use registry::{PipelineRegistry, RegistryError};
pub use validators::{
    confirmation_field, from_fn, Acceptance, Change, Comparator, Comparison, Confirmation,
    Exclusion, FnValidator, Format, Inclusion, Length, NumericBound, Required, Validate,
    Validator,
};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
