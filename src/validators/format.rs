//! Regex format validation.

use regex::Regex;
use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{value_type_name, MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field};

/// Checks pending string changes against a regular expression.
///
/// The pattern may match anywhere in the value; anchor it with `^...$` to
/// require a full match. A pending change that is not a string is a
/// [`MisuseError::ExpectedString`].
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let email = Validate::format(["email"], r"^[^@\s]+@[^@\s]+$").unwrap();
///
/// let changeset = Changeset::new().put_change("email", json!("not-an-email"));
/// let result = email.validate(&changeset).unwrap();
/// assert_eq!(result.errors_on("email")[0].message, "has invalid format");
/// ```
#[derive(Debug, Clone)]
pub struct Format {
    fields: Vec<String>,
    regex: Regex,
    message: Option<String>,
}

impl Format {
    /// Creates a `format` validator from a pattern string.
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn new<I, S>(fields: I, pattern: &str) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_regex(fields, Regex::new(pattern)?))
    }

    /// Creates a `format` validator from a compiled regex.
    pub fn with_regex<I, S>(fields: I, regex: Regex) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_list(fields),
            regex,
            message: None,
        }
    }

    /// Overrides the default "has invalid format" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Format {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let matches = match acc.get_change(field) {
                None => true,
                Some(Value::String(s)) => self.regex.is_match(s),
                Some(other) => {
                    return Err(MisuseError::ExpectedString {
                        validator: "format",
                        field: field.to_string(),
                        got: value_type_name(other),
                    })
                }
            };
            if matches {
                return Ok(acc);
            }

            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "has invalid format".to_string());
            let error = ValidationError::new("format", message)
                .with_attribute("format", self.regex.as_str());
            Ok(acc.put_error(field, error))
        })
    }
}
