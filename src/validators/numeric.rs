//! Numeric comparison validators.
//!
//! One [`Comparison`] type covers `less than`, `greater than`,
//! `less than or equal to`, `greater than or equal to` and `equal to`.
//!
//! Pending values are coerced to numbers before comparing rather than type
//! checked: numbers compare as-is, strings are trimmed and parsed (a blank
//! string reads as 0), booleans read as 1 or 0, and arrays or objects read as
//! NaN. Every comparison against NaN fails, so non-numeric input is recorded
//! as a validation error.

use serde_json::Value;

use crate::changeset::Changeset;
use crate::error::{MisuseError, ValidationError};

use super::traits::Validator;
use super::{field_list, for_each_field};

/// A numeric bound accepted by [`Comparison`].
///
/// Implemented for every primitive integer and float type, so `i64` and
/// `usize` bounds need no cast. Bounds are compared as `f64`.
pub trait NumericBound {
    /// Converts the bound to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_bound {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericBound for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// The operator a [`Comparison`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    EqualTo,
}

impl Comparator {
    /// The validation tag, which is also the phrase used in default messages.
    pub fn tag(self) -> &'static str {
        match self {
            Comparator::LessThan => "less than",
            Comparator::GreaterThan => "greater than",
            Comparator::LessThanOrEqualTo => "less than or equal to",
            Comparator::GreaterThanOrEqualTo => "greater than or equal to",
            Comparator::EqualTo => "equal to",
        }
    }

    /// Returns true if `value <op> number` holds.
    pub fn holds(self, value: f64, number: f64) -> bool {
        match self {
            Comparator::LessThan => value < number,
            Comparator::GreaterThan => value > number,
            Comparator::LessThanOrEqualTo => value <= number,
            Comparator::GreaterThanOrEqualTo => value >= number,
            Comparator::EqualTo => value == number,
        }
    }
}

/// Compares each pending change against a fixed number.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let adult = Validate::greater_than(["age"], 18);
///
/// let changeset = Changeset::new().put_change("age", json!(18));
/// let result = adult.validate(&changeset).unwrap();
/// let error = &result.errors_on("age")[0];
/// assert_eq!(error.validation, "greater than");
/// assert_eq!(error.message, "must be greater than 18");
/// assert_eq!(error.attribute("number"), Some(&json!(18)));
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    fields: Vec<String>,
    comparator: Comparator,
    number: f64,
    message: Option<String>,
}

impl Comparison {
    /// Creates a comparison validator over `fields`.
    pub fn new<I, S>(fields: I, comparator: Comparator, number: impl NumericBound) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_list(fields),
            comparator,
            number: number.to_f64(),
            message: None,
        }
    }

    /// Overrides the default "must be <comparison> <number>" message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the operator this validator applies.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }
}

impl Validator for Comparison {
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        for_each_field(&self.fields, changeset, |acc, field| {
            let holds = acc
                .get_change(field)
                .map_or(true, |value| self.comparator.holds(coerce(value), self.number));
            if holds {
                return Ok(acc);
            }

            let tag = self.comparator.tag();
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("must be {} {}", tag, self.number));
            let error =
                ValidationError::new(tag, message).with_attribute("number", number_value(self.number));
            Ok(acc.put_error(field, error))
        })
    }
}

/// Coerces a JSON value to a number for comparison.
fn coerce(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Renders a bound as JSON, keeping whole numbers integral.
fn number_value(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Value::from(number as i64)
    } else {
        Value::from(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coercion() {
        assert_eq!(coerce(&json!(3)), 3.0);
        assert_eq!(coerce(&json!(2.5)), 2.5);
        assert_eq!(coerce(&json!(" 42 ")), 42.0);
        assert_eq!(coerce(&json!("")), 0.0);
        assert_eq!(coerce(&json!(true)), 1.0);
        assert_eq!(coerce(&json!(false)), 0.0);
        assert!(coerce(&json!("abc")).is_nan());
        assert!(coerce(&json!([1])).is_nan());
        assert!(coerce(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_comparators() {
        assert!(Comparator::LessThan.holds(1.0, 2.0));
        assert!(!Comparator::LessThan.holds(2.0, 2.0));
        assert!(Comparator::LessThanOrEqualTo.holds(2.0, 2.0));
        assert!(Comparator::GreaterThanOrEqualTo.holds(2.0, 2.0));
        assert!(!Comparator::GreaterThan.holds(2.0, 2.0));
        assert!(Comparator::EqualTo.holds(2.0, 2.0));
        assert!(!Comparator::EqualTo.holds(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(18.0), json!(18));
        assert_eq!(number_value(-3.0), json!(-3));
        assert_eq!(number_value(2.5), json!(2.5));
    }

    #[test]
    fn test_fractional_bound_in_message() {
        let comparison = Comparison::new(["ratio"], Comparator::LessThanOrEqualTo, 0.5);
        let changeset = Changeset::new().put_change("ratio", json!(0.75));

        let result = comparison.validate(&changeset).unwrap();
        let error = &result.errors_on("ratio")[0];
        assert_eq!(error.message, "must be less than or equal to 0.5");
        assert_eq!(error.validation, "less than or equal to");
    }

    #[test]
    fn test_numeric_string_is_compared() {
        let comparison = Comparison::new(["age"], Comparator::GreaterThan, 18);
        let changeset = Changeset::new().put_change("age", json!("21"));
        assert!(comparison.validate(&changeset).unwrap().is_valid());
    }

    #[test]
    fn test_non_numeric_string_fails_without_misuse() {
        let comparison = Comparison::new(["age"], Comparator::EqualTo, 1);
        let changeset = Changeset::new().put_change("age", json!("one"));

        let result = comparison.validate(&changeset).unwrap();
        assert_eq!(result.errors_on("age")[0].message, "must be equal to 1");
    }

    #[test]
    fn test_integer_bound_types() {
        let limit: i64 = 10;
        let count: usize = 3;
        let changeset = Changeset::new().put_change("n", json!(11));

        let result = Comparison::new(["n"], Comparator::LessThan, limit)
            .validate(&changeset)
            .unwrap();
        assert_eq!(result.errors_on("n")[0].attribute("number"), Some(&json!(10)));

        let result = Comparison::new(["n"], Comparator::GreaterThan, count)
            .validate(&changeset)
            .unwrap();
        assert!(result.is_valid());
    }
}
