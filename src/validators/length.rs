//! Length validation for strings and arrays.

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{value_type_name, MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field};

/// Checks that pending string or array changes have between `min` and `max`
/// elements, inclusive.
///
/// Strings are measured in characters (Unicode scalar values), arrays in items.
/// Fields without a pending change are skipped; persisted data is never read.
/// Any other value type is a [`MisuseError::ExpectedLengthValue`].
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let changeset = Changeset::new().put_change("tags", json!([1, 2, 3, 4, 5, 6]));
/// let result = Validate::length(["tags"], 2, 5).validate(&changeset).unwrap();
///
/// let error = &result.errors_on("tags")[0];
/// assert_eq!(error.message, "should be at most 5 items(s)");
/// assert_eq!(error.attribute("max"), Some(&json!(5)));
/// ```
#[derive(Debug, Clone)]
pub struct Length {
    fields: Vec<String>,
    min: usize,
    max: usize,
    message: Option<String>,
}

/// What is being measured, which decides the unit noun in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Measured {
    Text,
    Items,
}

impl Measured {
    fn unit(self) -> &'static str {
        match self {
            Measured::Text => "character(s)",
            Measured::Items => "items(s)",
        }
    }
}

impl Length {
    /// Creates a `length` validator over `fields` with inclusive bounds.
    pub fn new<I, S>(fields: I, min: usize, max: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_list(fields),
            min,
            max,
            message: None,
        }
    }

    /// Overrides the generated message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Picks the default message for a measured length.
    ///
    /// Each rule is evaluated in turn and a later match replaces an earlier one:
    /// exact count, then below minimum, then above maximum.
    fn default_message(&self, len: usize, measured: Measured) -> Option<String> {
        let unit = measured.unit();
        let mut message = None;
        if self.min == self.max && len == self.min {
            message = Some(format!("should be exactly {} {}", self.min, unit));
        }
        if len < self.min {
            message = Some(format!("should be at least {} {}", self.min, unit));
        }
        if len > self.max {
            message = Some(format!("should be at most {} {}", self.max, unit));
        }
        message
    }
}

impl Validator for Length {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let (len, measured) = match acc.get_change(field) {
                None => return Ok(acc),
                Some(Value::String(s)) => (s.chars().count(), Measured::Text),
                Some(Value::Array(items)) => (items.len(), Measured::Items),
                Some(other) => {
                    return Err(MisuseError::ExpectedLengthValue {
                        validator: "length",
                        field: field.to_string(),
                        got: value_type_name(other),
                    })
                }
            };
            if (self.min..=self.max).contains(&len) {
                return Ok(acc);
            }

            let message = match (&self.message, self.default_message(len, measured)) {
                (Some(custom), _) => custom.clone(),
                (None, Some(message)) => message,
                (None, None) => return Ok(acc),
            };
            let error = ValidationError::new("length", message)
                .with_attribute("min", self.min)
                .with_attribute("max", self.max);
            Ok(acc.put_error(field, error))
        })
    }
}
