//! Presence validators: [`Required`] and [`Acceptance`].

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{value_type_name, MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field};

/// Flags fields that have no present value.
///
/// The pending change is read first, then the persisted value. A pending
/// `null` counts as a change, so clearing a field fails even when persisted
/// data holds a value. A value is
/// present if it is a non-blank string, a number, a boolean, an array or an
/// object (empty arrays and objects count). A missing field gets a `required`
/// error and its pending change is reset to `null`.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let changeset = Changeset::new().put_change("title", json!("   "));
/// let result = Validate::required(["title"]).validate(&changeset).unwrap();
///
/// assert_eq!(result.errors_on("title")[0].message, "can't be blank");
/// assert_eq!(result.changes()["title"], json!(null));
/// ```
#[derive(Debug, Clone)]
pub struct Required {
    fields: Vec<String>,
    message: Option<String>,
}

impl Required {
    /// Creates a `required` validator over `fields`.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_list(fields),
            message: None,
        }
    }

    /// Overrides the default "can't be blank" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Required {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            // A pending `null` is a cleared field, not a missing change.
            let present = acc
                .changes()
                .get(field)
                .or_else(|| acc.get_field(field))
                .is_some_and(is_present);
            if present {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "can't be blank".to_string());
            Ok(acc
                .put_change(field, Value::Null)
                .put_error(field, ValidationError::new("required", message)))
        })
    }
}

/// Returns true if `value` counts as present for [`Required`].
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// Requires boolean fields, such as terms-of-service checkboxes, to be `true`.
///
/// Only fields with a pending change are checked. A pending change that is not
/// a boolean is a [`MisuseError::ExpectedBoolean`].
#[derive(Debug, Clone)]
pub struct Acceptance {
    fields: Vec<String>,
    message: Option<String>,
}

impl Acceptance {
    /// Creates an `acceptance` validator over `fields`.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_list(fields),
            message: None,
        }
    }

    /// Overrides the default "must be accepted" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Acceptance {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let accepted = match acc.get_change(field) {
                None => true, // nothing pending
                Some(Value::Bool(accepted)) => *accepted,
                Some(other) => {
                    return Err(MisuseError::ExpectedBoolean {
                        validator: "acceptance",
                        field: field.to_string(),
                        got: value_type_name(other),
                    })
                }
            };
            if accepted {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "must be accepted".to_string());
            Ok(acc.put_error(field, ValidationError::new("acceptance", message)))
        })
    }
}
