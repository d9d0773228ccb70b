//! Boolean assertion guards.

use crate::foundation::{GuardError, GuardResult};

/// Default message for [`required_that`] when none is supplied.
pub const REQUIRED_EXPECTATION_MESSAGE: &str = "The required expectation was not met.";

/// Default message for [`is_true`] and [`is_false`] when none is supplied.
pub const CONDITION_MESSAGE: &str = "Condition must be true.";

/// Ensures an arbitrary caller-evaluated condition holds.
///
/// On failure the supplied message is used verbatim;
/// [`REQUIRED_EXPECTATION_MESSAGE`] when absent.
///
/// # Examples
///
/// ```
/// use precept::guards::required_that;
///
/// assert!(required_that(1 + 1 == 2, None).is_ok());
///
/// let error = required_that(false, Some("Custom")).unwrap_err();
/// assert_eq!(error.to_string(), "Custom");
/// ```
pub fn required_that(condition: bool, message: Option<&str>) -> GuardResult<()> {
    if condition {
        Ok(())
    } else {
        Err(match message {
            Some(message) => GuardError::new(message.to_owned()),
            None => GuardError::new(REQUIRED_EXPECTATION_MESSAGE),
        })
    }
}

/// Ensures `condition` is `true`.
///
/// Delegates to [`required_that`] with the message defaulted to
/// [`CONDITION_MESSAGE`].
pub fn is_true(condition: bool, message: Option<&str>) -> GuardResult<()> {
    required_that(condition, Some(message.unwrap_or(CONDITION_MESSAGE)))
}

/// Ensures `condition` is `false`.
///
/// Delegates to [`required_that`] on the negated condition, with the same
/// default message as [`is_true`].
pub fn is_false(condition: bool, message: Option<&str>) -> GuardResult<()> {
    required_that(!condition, Some(message.unwrap_or(CONDITION_MESSAGE)))
}
