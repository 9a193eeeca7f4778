//! Validation error descriptors.
//!
//! This module provides [`ValidationError`] for a single failed rule on a single
//! field and [`ValidationErrors`] for accumulating failures across a changeset.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::prelude::*;

/// A single validation failure on one field.
///
/// `ValidationError` carries everything a consumer needs to present or
/// translate the failure:
/// - **field**: The field the error was recorded on
/// - **validation**: Tag naming the rule that failed (e.g. `required`, `less than`)
/// - **message**: Human-readable description, either the rule default or a caller override
/// - **attributes**: Rule-specific parameters (`min`, `max`, `number`, ...) so an
///   i18n layer can rebuild the message from structured data
///
/// # Example
///
/// ```rust
/// use changeset_validators::ValidationError;
/// use serde_json::json;
///
/// let error = ValidationError::new("length", "should be at least 3 character(s)")
///     .with_field("name")
///     .with_attribute("min", json!(3))
///     .with_attribute("max", json!(20));
///
/// assert_eq!(error.validation, "length");
/// assert_eq!(error.attribute("min"), Some(&json!(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The field this error belongs to. Filled in when the error is put on a changeset.
    pub field: String,
    /// Tag identifying the rule that failed.
    pub validation: String,
    /// Human-readable error message.
    pub message: String,
    /// Rule-specific attributes, in insertion order.
    pub attributes: IndexMap<String, Value>,
}

impl ValidationError {
    /// Creates a new error with the given rule tag and message.
    ///
    /// The field is left empty; [`Changeset::put_error`](crate::Changeset::put_error)
    /// assigns it when the error is recorded.
    pub fn new(validation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            validation: validation.into(),
            message: message.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Sets the field and returns self for chaining.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Adds a rule-specific attribute and returns self for chaining.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the attribute stored under `key`, if any.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Renders this error as a JSON object: `validation`, `message`, then every attribute.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("validation".to_string(), Value::from(self.validation.as_str()));
        object.insert("message".to_string(), Value::from(self.message.as_str()));
        for (key, value) in &self.attributes {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// Errors cross thread boundaries in batch validation.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` so that a
/// `Validation::Failure` always carries at least one error. It is produced by
/// [`Changeset::apply_changes`](crate::Changeset::apply_changes) and combines
/// through `Semigroup`:
///
/// ```rust
/// use changeset_validators::{ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let title = ValidationErrors::single(
///     ValidationError::new("required", "can't be blank").with_field("title")
/// );
/// let age = ValidationErrors::single(
///     ValidationError::new("greater than", "must be greater than 18").with_field("age")
/// );
///
/// let combined = title.combine(age);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = Self::single(errors.next()?);
        Some(errors.fold(head, |acc, error| acc.combine(Self::single(error))))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors recorded on `field`.
    pub fn on_field(&self, field: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.field == field).collect()
    }

    /// Returns all errors produced by the rule tagged `validation`.
    pub fn with_validation(&self, validation: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.validation == validation).collect()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Changeset has {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
