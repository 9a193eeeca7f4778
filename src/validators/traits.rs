//! The [`Validator`] trait shared by every rule and by pipelines.

use crate::changeset::Changeset;
use crate::error::MisuseError;

/// A validator bound to its options, ready to be applied to changesets.
///
/// `validate` borrows the input and returns the next changeset, leaving the
/// input untouched. Bad input is recorded as errors on the returned changeset;
/// `Err` is reserved for [`MisuseError`], where the validator was pointed at a
/// value type it does not accept.
///
/// The `Send + Sync` bounds allow validators to be boxed into pipelines that are
/// shared across threads.
///
/// # Example
///
/// ```rust
/// use changeset_validators::{Changeset, Validate, Validator};
/// use serde_json::json;
///
/// let required = Validate::required(["title"]);
///
/// let before = Changeset::new();
/// let after = required.validate(&before).unwrap();
///
/// assert!(before.is_valid());
/// assert_eq!(after.errors_on("title")[0].validation, "required");
/// ```
pub trait Validator: Send + Sync {
    /// Applies this validator to a changeset.
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError>;
}

/// A validator built from a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FnValidator<F>(F);

/// Wraps a closure as a [`Validator`].
///
/// ```rust
/// use changeset_validators::{from_fn, Changeset, ValidationError, Validator};
///
/// let always_fails = from_fn(|changeset: &Changeset| {
///     Ok(changeset
///         .clone()
///         .put_error("base", ValidationError::new("locked", "record is locked")))
/// });
///
/// let result = always_fails.validate(&Changeset::new()).unwrap();
/// assert_eq!(result.errors_on("base").len(), 1);
/// ```
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&Changeset) -> Result<Changeset, MisuseError> + Send + Sync,
{
    FnValidator(f)
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Changeset) -> Result<Changeset, MisuseError> + Send + Sync,
{
    fn validate(&self, changeset: &Changeset) -> Result<Changeset, MisuseError> {
        (self.0)(changeset)
    }
}
