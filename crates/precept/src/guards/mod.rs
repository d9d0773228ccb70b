//! The guard-check set, grouped by category.
//!
//! Every check takes the value under test (plus a bound or two where
//! relevant) and an optional display name, and returns
//! [`GuardResult`](crate::foundation::GuardResult): the original value on
//! success, a [`GuardError`](crate::foundation::GuardError) with a
//! deterministic message on failure.
//!
//! # Categories
//!
//! - **Nullable**: [`not_null`], [`not_null_or_empty`]
//! - **Emptiness**: [`not_empty`] (strings, slices, collections)
//! - **String**: [`not_null_or_white_space`]
//! - **Comparison**: [`greater_than`], [`less_than_or_equal_to`], …
//! - **Range**: [`in_range`], [`not_in_range_exclusive`], …
//! - **Boolean**: [`required_that`], [`is_true`], [`is_false`]
//!
//! # Examples
//!
//! ```
//! use precept::guards::{greater_than, not_empty, not_null};
//! use precept::foundation::GuardResult;
//!
//! fn open_session(user: Option<String>, retries: u32) -> GuardResult<()> {
//!     let user = not_null(user, Some("user"))?;
//!     let user = not_empty(user, Some("user"))?;
//!     let _retries = greater_than(retries, 0, Some("retries"))?;
//!     let _ = user;
//!     Ok(())
//! }
//!
//! assert!(open_session(Some("alice".into()), 3).is_ok());
//! assert!(open_session(None, 3).is_err());
//! ```

pub mod boolean;
pub mod comparison;
pub mod emptiness;
pub mod nullable;
pub mod range;
pub mod string;

pub use boolean::{
    CONDITION_MESSAGE, REQUIRED_EXPECTATION_MESSAGE, is_false, is_true, required_that,
};
pub use comparison::{
    equal_to, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to,
    not_equal_to,
};
pub use emptiness::not_empty;
pub use nullable::{not_null, not_null_or_empty};
pub use range::{in_range, in_range_exclusive, not_in_range, not_in_range_exclusive};
pub use string::not_null_or_white_space;

/// Display form of an argument name: the name itself, or the literal
/// `[unknown]` when absent.
///
/// Shared by every check's message formatting; public because
/// [`comparison_guard!`](crate::comparison_guard) expands to calls of it.
#[must_use]
pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("[unknown]")
}
