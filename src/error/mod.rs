//! Error types.
//!
//! Two channels that never mix: [`ValidationError`]s describe bad input and are
//! accumulated on the changeset, while [`MisuseError`] describes a validator
//! applied to a value type it does not accept and aborts the call.

mod misuse;
mod validation_error;

pub(crate) use misuse::value_type_name;
pub use misuse::MisuseError;
pub use validation_error::{ValidationError, ValidationErrors};
