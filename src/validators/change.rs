//! Custom per-field validation through a caller-supplied function.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field};

type CheckFn = dyn Fn(&Value) -> Vec<ValidationError> + Send + Sync;

/// Runs a custom check on each pending change and records whatever errors it returns.
///
/// Fields without a pending change are skipped. The returned errors are
/// appended in order; their `field` is filled in automatically.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, ValidationError, Validator};
/// use serde_json::{json, Value};
///
/// let even = Validate::change(["count"], |value: &Value| {
///     match value.as_i64() {
///         Some(n) if n % 2 == 0 => vec![],
///         _ => vec![ValidationError::new("even", "must be even")],
///     }
/// });
///
/// let changeset = Changeset::new().put_change("count", json!(3));
/// let result = even.validate(&changeset).unwrap();
/// assert_eq!(result.errors_on("count")[0].validation, "even");
/// ```
#[derive(Clone)]
pub struct Change {
    fields: Vec<String>,
    check: Arc<CheckFn>,
}

impl Change {
    /// Creates a `change` validator over `fields` that delegates to `check`.
    pub fn new<I, S, F>(fields: I, check: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Value) -> Vec<ValidationError> + Send + Sync + 'static,
    {
        Self {
            fields: field_list(fields),
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Change")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl Validator for Change {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let errors = match acc.get_change(field) {
                Some(value) => (self.check)(value),
                None => return Ok(acc),
            };
            Ok(errors
                .into_iter()
                .fold(acc, |acc, error| acc.put_error(field, error)))
        })
    }
}
