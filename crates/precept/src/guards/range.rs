//! Range guards.
//!
//! The inclusive/exclusive *membership* checks delegate to the comparison
//! guards, so their failure messages are exactly the comparison messages
//! and the first violated bound wins. The *non-membership* checks format
//! their own message over the whole range.
//!
//! None of these normalize `start`/`end` ordering: with `start > end` the
//! membership condition is unsatisfiable, so `in_range` always fails and
//! `not_in_range` always passes. Callers own the bounds they pass.

use std::fmt::Display;

use crate::foundation::{GuardError, GuardResult};
use crate::guards::comparison::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to,
};
use crate::guards::display_name;

/// Ensures `start <= value <= end` (boundaries included).
///
/// # Examples
///
/// ```
/// use precept::guards::in_range;
///
/// assert!(in_range(3, 3, 7, Some("x")).is_ok());
/// assert!(in_range(7, 3, 7, Some("x")).is_ok());
/// assert!(in_range(8, 3, 7, Some("x")).is_err());
/// ```
pub fn in_range<T>(value: T, start: T, end: T, name: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    let value = greater_than_or_equal_to(value, start, name)?;
    less_than_or_equal_to(value, end, name)
}

/// Ensures `start < value < end` (boundaries excluded).
pub fn in_range_exclusive<T>(value: T, start: T, end: T, name: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    let value = greater_than(value, start, name)?;
    less_than(value, end, name)
}

/// Ensures `value` lies outside the inclusive range `[start, end]`.
///
/// Boundary values count as inside and are rejected.
pub fn not_in_range<T>(value: T, start: T, end: T, name: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    if value >= start && value <= end {
        Err(GuardError::new(format!(
            "Argument '{}' must not be in the range '{start}' - '{end}' but was '{value}'.",
            display_name(name)
        )))
    } else {
        Ok(value)
    }
}

/// Ensures `value` lies outside the exclusive range `(start, end)`.
///
/// Boundary values count as outside and pass.
pub fn not_in_range_exclusive<T>(value: T, start: T, end: T, name: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    if value > start && value < end {
        Err(GuardError::new(format!(
            "Argument '{}' must not be in the range '{start}' - '{end}' (exclusive) but was '{value}'.",
            display_name(name)
        )))
    } else {
        Ok(value)
    }
}
