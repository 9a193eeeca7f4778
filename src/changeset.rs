//! Immutable changeset and its accessor primitives.
//!
//! This module provides [`Changeset`], a record of persisted data, pending
//! changes and per-field errors. Writes consume the changeset and return the
//! next one, so validators that borrow a changeset leave it intact.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::ValidationResult;

/// An immutable record of persisted data, proposed changes and accumulated errors.
///
/// - **data**: Previously persisted values, the read-only baseline
/// - **changes**: Proposed new values; may cover only some fields
/// - **errors**: Field name to the ordered errors recorded against it
///
/// A change or data entry holding `null` reads as absent through
/// [`get_change`](Self::get_change) and [`get_field`](Self::get_field).
///
/// # Example
///
/// ```rust
/// use changeset_validators::Changeset;
/// use serde_json::json;
///
/// let changeset = Changeset::from_data([("name", json!("Ada"))])
///     .put_change("name", json!("Grace"));
///
/// assert_eq!(changeset.get_change("name"), Some(&json!("Grace")));
/// assert_eq!(changeset.get_field("name"), Some(&json!("Ada")));
/// assert!(changeset.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Changeset {
    data: IndexMap<String, Value>,
    changes: IndexMap<String, Value>,
    errors: IndexMap<String, Vec<ValidationError>>,
}

impl Changeset {
    /// Creates an empty changeset with no data, changes or errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a changeset over the given persisted data.
    pub fn from_data<K, I>(data: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            data: data.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    /// Creates a changeset from JSON objects for data and changes.
    ///
    /// Returns `None` if either value is not a JSON object.
    ///
    /// ```rust
    /// use changeset_validators::Changeset;
    /// use serde_json::json;
    ///
    /// let changeset = Changeset::from_json(json!({"age": 30}), json!({"age": 31})).unwrap();
    /// assert_eq!(changeset.get_change("age"), Some(&json!(31)));
    ///
    /// assert!(Changeset::from_json(json!([]), json!({})).is_none());
    /// ```
    pub fn from_json(data: Value, changes: Value) -> Option<Self> {
        match (data, changes) {
            (Value::Object(data), Value::Object(changes)) => {
                Some(Self::from_data(data).with_changes(changes))
            }
            _ => None,
        }
    }

    /// Returns a new changeset with every given pair put as a pending change.
    pub fn with_changes<K, I>(self, changes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        changes
            .into_iter()
            .fold(self, |changeset, (field, value)| changeset.put_change(field, value))
    }

    /// Reads the pending change for `field`.
    ///
    /// Returns `None` when there is no change or when the change is `null`.
    pub fn get_change(&self, field: &str) -> Option<&Value> {
        self.changes.get(field).filter(|v| !v.is_null())
    }

    /// Reads the persisted value for `field`, ignoring pending changes.
    ///
    /// Returns `None` when the field is missing or `null`.
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    /// Reads the effective value for `field`: the pending change if there is
    /// one, otherwise the persisted value.
    pub fn effective(&self, field: &str) -> Option<&Value> {
        self.get_change(field).or_else(|| self.get_field(field))
    }

    /// Returns a new changeset with `value` as the pending change for `field`.
    pub fn put_change(mut self, field: impl Into<String>, value: Value) -> Self {
        self.changes.insert(field.into(), value);
        self
    }

    /// Returns a new changeset with `error` appended to the errors of `field`.
    ///
    /// The error's `field` is set to `field`.
    pub fn put_error(mut self, field: impl Into<String>, error: ValidationError) -> Self {
        let field = field.into();
        tracing::trace!(field = %field, validation = %error.validation, "validation error recorded");
        let error = error.with_field(field.clone());
        self.errors.entry(field).or_default().push(error);
        self
    }

    /// Returns the persisted data.
    pub fn data(&self) -> &IndexMap<String, Value> {
        &self.data
    }

    /// Returns the pending changes, including explicit `null` changes.
    pub fn changes(&self) -> &IndexMap<String, Value> {
        &self.changes
    }

    /// Returns the error map. Fields without errors are absent.
    pub fn errors(&self) -> &IndexMap<String, Vec<ValidationError>> {
        &self.errors
    }

    /// Returns the errors recorded on `field`, in the order they were appended.
    pub fn errors_on(&self, field: &str) -> &[ValidationError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the total number of recorded errors across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Returns true if no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Merges changes over data if the changeset is valid.
    ///
    /// On success the result holds every persisted field with pending changes
    /// written over it. On failure it holds every recorded error, grouped by
    /// field in the order fields first failed.
    ///
    /// ```rust
    /// use changeset_validators::Changeset;
    /// use serde_json::json;
    ///
    /// let changeset = Changeset::from_data([("name", json!("Ada")), ("age", json!(36))])
    ///     .put_change("age", json!(37));
    ///
    /// let applied = changeset.apply_changes().into_result().unwrap();
    /// assert_eq!(applied["name"], json!("Ada"));
    /// assert_eq!(applied["age"], json!(37));
    /// ```
    pub fn apply_changes(&self) -> ValidationResult<IndexMap<String, Value>> {
        let errors: Vec<ValidationError> = self.errors.values().flatten().cloned().collect();
        match ValidationErrors::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => {
                let mut merged = self.data.clone();
                for (field, value) in &self.changes {
                    merged.insert(field.clone(), value.clone());
                }
                Validation::Success(merged)
            }
        }
    }

    /// Renders the error map as JSON: `{field: [{validation, message, ...}]}`.
    pub fn errors_to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .errors
            .iter()
            .map(|(field, errors)| {
                let rendered = errors.iter().map(ValidationError::to_json).collect();
                (field.clone(), Value::Array(rendered))
            })
            .collect();
        Value::Object(object)
    }
}
