//! Null guards over `Option` inputs.
//!
//! "Null" here is an absent `Option`: the checks unwrap on success, so the
//! caller gets the inner value with the absence already ruled out.

use crate::foundation::{Emptiness, GuardError, GuardResult};
use crate::guards::{display_name, emptiness::not_empty};

/// Ensures `value` is present and unwraps it.
///
/// # Examples
///
/// ```
/// use precept::guards::not_null;
///
/// let port = not_null(Some(8080), Some("port"))?;
/// assert_eq!(port, 8080);
///
/// let error = not_null(None::<u16>, Some("port")).unwrap_err();
/// assert_eq!(error.to_string(), "Argument 'port' cannot be null.");
/// # Ok::<(), precept::foundation::GuardError>(())
/// ```
pub fn not_null<T>(value: Option<T>, name: Option<&str>) -> GuardResult<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(GuardError::new(format!(
            "Argument '{}' cannot be null.",
            display_name(name)
        ))),
    }
}

/// Ensures `value` is present and non-empty.
///
/// The null check runs first: an absent value reports the null message,
/// never the empty one.
pub fn not_null_or_empty<V>(value: Option<V>, name: Option<&str>) -> GuardResult<V>
where
    V: Emptiness,
{
    not_empty(not_null(value, name)?, name)
}
