//! Set membership validators: [`Exclusion`] and [`Inclusion`].

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field, same_value};

/// Rejects pending changes equal to any value in a reserved list.
///
/// Equality is strict: `"1"` does not match `1`. Numbers compare by value, so
/// `1.0` matches `1`.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let reserved = Validate::exclusion(["username"], [json!("admin"), json!("root")]);
///
/// let changeset = Changeset::new().put_change("username", json!("root"));
/// let result = reserved.validate(&changeset).unwrap();
/// assert_eq!(result.errors_on("username")[0].message, "is reserved");
/// ```
#[derive(Debug, Clone)]
pub struct Exclusion {
    fields: Vec<String>,
    reserved: Vec<Value>,
    message: Option<String>,
}

impl Exclusion {
    /// Creates an `exclusion` validator over `fields`.
    pub fn new<I, S, R>(fields: I, reserved: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Value>,
    {
        Self {
            fields: field_list(fields),
            reserved: reserved.into_iter().collect(),
            message: None,
        }
    }

    /// Overrides the default "is reserved" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Exclusion {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let is_reserved = acc
                .get_change(field)
                .is_some_and(|value| self.reserved.iter().any(|r| same_value(r, value)));
            if !is_reserved {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "is reserved".to_string());
            let error = ValidationError::new("exclusion", message)
                .with_attribute("reserved", self.reserved.clone());
            Ok(acc.put_error(field, error))
        })
    }
}

/// Rejects pending changes that match none of the allowed values.
///
/// Equality follows the same rule as [`Exclusion`].
#[derive(Debug, Clone)]
pub struct Inclusion {
    fields: Vec<String>,
    include: Vec<Value>,
    message: Option<String>,
}

impl Inclusion {
    /// Creates an `inclusion` validator over `fields`.
    pub fn new<I, S, A>(fields: I, include: A) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: IntoIterator<Item = Value>,
    {
        Self {
            fields: field_list(fields),
            include: include.into_iter().collect(),
            message: None,
        }
    }

    /// Overrides the default "is invalid" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Inclusion {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let is_excluded = acc
                .get_change(field)
                .is_some_and(|value| !self.include.iter().any(|a| same_value(a, value)));
            if !is_excluded {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "is invalid".to_string());
            let error = ValidationError::new("inclusion", message)
                .with_attribute("include", self.include.clone());
            Ok(acc.put_error(field, error))
        })
    }
}
