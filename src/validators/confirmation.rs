//! Confirmation validation: a field must equal its `<field>Confirmation` companion.

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field, same_value};

/// Checks that each field equals its confirmation companion.
///
/// For a field `email` the companion is `emailConfirmation`. The check runs when
/// either of the two has a pending change and compares effective values (pending
/// change, else persisted data) by deep equality, with numbers compared by
/// value. A mismatch is recorded on the
/// field itself, never on the companion, and carries the companion's value.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let changeset = Changeset::new()
///     .put_change("password", json!("hunter2"))
///     .put_change("passwordConfirmation", json!("hunter3"));
///
/// let result = Validate::confirmation(["password"]).validate(&changeset).unwrap();
/// let error = &result.errors_on("password")[0];
/// assert_eq!(error.message, "does not match");
/// assert_eq!(error.attribute("confirmation"), Some(&json!("hunter3")));
/// assert!(result.errors_on("passwordConfirmation").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Confirmation {
    fields: Vec<String>,
    message: Option<String>,
}

impl Confirmation {
    /// Creates a `confirmation` validator over `fields`.
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

    /// Overrides the default "does not match" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Returns the name of the companion field for `field`.
pub fn confirmation_field(field: &str) -> String {
    format!("{field}Confirmation")
}

impl Validator for Confirmation {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let companion = confirmation_field(field);
            if acc.get_change(field).is_none() && acc.get_change(&companion).is_none() {
                return Ok(acc);
            }

            let confirmed = acc.effective(&companion).cloned();
            let matches = match (acc.effective(field), confirmed.as_ref()) {
                (Some(value), Some(confirmed)) => same_value(value, confirmed),
                (None, None) => true,
                _ => false,
            };
            if matches {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "does not match".to_string());
            let error = ValidationError::new("confirmation", message)
                .with_attribute("confirmation", confirmed.unwrap_or(Value::Null));
            Ok(acc.put_error(field, error))
        })
    }
}
