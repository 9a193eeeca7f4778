//! Misuse errors.
//!
//! A [`MisuseError`] means a validator was pointed at a value it cannot judge,
//! such as `length` on a number. It is a contract violation by the caller and is
//! returned as `Err`, never recorded on the changeset.

use serde_json::Value;

/// A fatal contract violation raised while running a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MisuseError {
    /// `length` was given something other than a string or an array.
    #[error("{validator} on '{field}' expects a string or array, got {got}")]
    ExpectedLengthValue {
        validator: &'static str,
        field: String,
        got: &'static str,
    },

    /// A boolean-only validator was given a non-boolean.
    #[error("{validator} on '{field}' expects a boolean, got {got}")]
    ExpectedBoolean {
        validator: &'static str,
        field: String,
        got: &'static str,
    },

    /// A string-only validator was given a non-string.
    #[error("{validator} on '{field}' expects a string, got {got}")]
    ExpectedString {
        validator: &'static str,
        field: String,
        got: &'static str,
    },
}

impl MisuseError {
    /// Returns the field whose value triggered the misuse.
    pub fn field(&self) -> &str {
        match self {
            MisuseError::ExpectedLengthValue { field, .. }
            | MisuseError::ExpectedBoolean { field, .. }
            | MisuseError::ExpectedString { field, .. } => field,
        }
    }

    /// Returns the name of the validator that was misused.
    pub fn validator(&self) -> &'static str {
        match self {
            MisuseError::ExpectedLengthValue { validator, .. }
            | MisuseError::ExpectedBoolean { validator, .. }
            | MisuseError::ExpectedString { validator, .. } => validator,
        }
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
