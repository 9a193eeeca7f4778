//! Validators over changesets.
//!
//! Each validator is a small struct holding its options. Building one binds the
//! options; calling [`Validator::validate`] applies it to a changeset. Fields
//! are processed left to right and errors are appended in that order.
//!
//! # Example
//!
//! ```rust
//! use changeset_validators::{Changeset, Validate, Validator};
//! use serde_json::json;
//!
//! let changeset = Changeset::new()
//!     .put_change("role", json!("guest"))
//!     .put_change("age", json!(19));
//!
//! let role = Validate::inclusion(["role"], [json!("admin"), json!("user")]);
//! let age = Validate::greater_than(["age"], 18);
//!
//! let result = age.validate(&role.validate(&changeset).unwrap()).unwrap();
//! assert_eq!(result.errors_on("role").len(), 1);
//! assert!(result.errors_on("age").is_empty());
//! ```

mod change;
mod confirmation;
mod format;
mod length;
mod membership;
mod numeric;
mod presence;
mod traits;

use regex::Regex;
use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{MisuseError, ValidationError};

pub use change::Change;
pub use confirmation::{confirmation_field, Confirmation};
pub use format::Format;
pub use length::Length;
pub use membership::{Exclusion, Inclusion};
pub use numeric::{Comparator, Comparison, NumericBound};
pub use presence::{Acceptance, Required};
pub use traits::{from_fn, FnValidator, Validator};

/// Entry point for building validators.
///
/// Every function binds a validator's options and returns it ready for
/// composition into a [`Pipeline`](crate::Pipeline).
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Pipeline, Validate};
///
/// let signup = Pipeline::new()
///     .then(Validate::required(["email", "password"]))
///     .then(Validate::length(["password"], 8, 128))
///     .then(Validate::confirmation(["password"]))
///     .then(Validate::acceptance(["terms"]));
///
/// assert_eq!(signup.len(), 4);
/// ```
pub struct Validate;

impl Validate {
    /// Builds a [`Required`] validator.
    pub fn required<I, S>(fields: I) -> Required
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Required::new(fields)
    }

    /// Builds a [`Length`] validator with inclusive bounds.
    pub fn length<I, S>(fields: I, min: usize, max: usize) -> Length
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Length::new(fields, min, max)
    }

    /// Builds an [`Acceptance`] validator.
    pub fn acceptance<I, S>(fields: I) -> Acceptance
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Acceptance::new(fields)
    }

    /// Builds a [`Change`] validator around a custom check.
    pub fn change<I, S, F>(fields: I, check: F) -> Change
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Value) -> Vec<ValidationError> + Send + Sync + 'static,
    {
        Change::new(fields, check)
    }

    /// Builds a [`Confirmation`] validator.
    pub fn confirmation<I, S>(fields: I) -> Confirmation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Confirmation::new(fields)
    }

    /// Builds an [`Exclusion`] validator.
    pub fn exclusion<I, S, R>(fields: I, reserved: R) -> Exclusion
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Value>,
    {
        Exclusion::new(fields, reserved)
    }

    /// Builds an [`Inclusion`] validator.
    pub fn inclusion<I, S, A>(fields: I, include: A) -> Inclusion
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: IntoIterator<Item = Value>,
    {
        Inclusion::new(fields, include)
    }

    /// Builds a [`Format`] validator from a pattern string.
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn format<I, S>(fields: I, pattern: &str) -> Result<Format, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Format::new(fields, pattern)
    }

    /// Builds a [`Format`] validator from a compiled regex.
    pub fn format_regex<I, S>(fields: I, regex: Regex) -> Format
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Format::with_regex(fields, regex)
    }

    /// Builds a `less than` [`Comparison`].
    pub fn less_than<I, S>(fields: I, number: impl NumericBound) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comparison::new(fields, Comparator::LessThan, number)
    }

    /// Builds a `greater than` [`Comparison`].
    pub fn greater_than<I, S>(fields: I, number: impl NumericBound) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comparison::new(fields, Comparator::GreaterThan, number)
    }

    /// Builds a `less than or equal to` [`Comparison`].
    pub fn less_than_or_equal_to<I, S>(fields: I, number: impl NumericBound) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comparison::new(fields, Comparator::LessThanOrEqualTo, number)
    }

    /// Builds a `greater than or equal to` [`Comparison`].
    pub fn greater_than_or_equal_to<I, S>(fields: I, number: impl NumericBound) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comparison::new(fields, Comparator::GreaterThanOrEqualTo, number)
    }

    /// Builds an `equal to` [`Comparison`].
    pub fn equal_to<I, S>(fields: I, number: impl NumericBound) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comparison::new(fields, Comparator::EqualTo, number)
    }
}

fn field_list<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields.into_iter().map(Into::into).collect()
}

/// Folds `step` over `fields` in order, starting from a copy of `changeset`.
///
/// The first misuse error stops the fold.
fn for_each_field<F>(
    fields: &[String],
    changeset: &Changeset,
    mut step: F,
) -> Result<Changeset, MisuseError>
where
    F: FnMut(Changeset, &str) -> Result<Changeset, MisuseError>,
{
    fields
        .iter()
        .try_fold(changeset.clone(), |acc, field| step(acc, field.as_str()))
}

/// Strict value equality where numbers compare by value, so `1` equals `1.0`.
///
/// Values of different JSON types never match. Arrays and objects compare
/// element-wise under the same rule.
pub(crate) fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                return a == b;
            }
            a.as_f64() == b.as_f64()
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| same_value(a, b)))
        }
        _ => left == right,
    }
}
