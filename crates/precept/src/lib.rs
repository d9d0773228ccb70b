//! # precept
//!
//! Guard-clause precondition checks: validate arguments at function entry
//! and get the value back, or a typed [`GuardError`](foundation::GuardError).
//!
//! ## Quick Start
//!
//! ```
//! use precept::prelude::*;
//!
//! fn resize(label: &str, width: u32) -> GuardResult<u32> {
//!     let label = not_empty(label, Some("label"))?;
//!     let width = in_range(width, 1, 4096, Some("width"))?;
//!     let _ = label;
//!     Ok(width)
//! }
//!
//! assert_eq!(resize("thumbnail", 640).unwrap(), 640);
//! assert_eq!(
//!     resize("thumbnail", 0).unwrap_err().to_string(),
//!     "Argument 'width' must be greater than or equal to '1' but was '0'.",
//! );
//! ```
//!
//! ## Chained checks
//!
//! [`Guard`](fluent::Guard) wraps one value/name pair so several checks can
//! run against it without repeating either; see the [`fluent`] module.
//!
//! ## Custom checks
//!
//! Use the [`comparison_guard!`] macro to mint further ordered checks in
//! the house message format.
//!
//! ## Built-in checks
//!
//! - **Nullable**: [`not_null`](guards::not_null),
//!   [`not_null_or_empty`](guards::not_null_or_empty)
//! - **Emptiness**: [`not_empty`](guards::not_empty)
//! - **String**: [`not_null_or_white_space`](guards::not_null_or_white_space)
//! - **Comparison**: [`greater_than`](guards::greater_than),
//!   [`equal_to`](guards::equal_to), …
//! - **Range**: [`in_range`](guards::in_range),
//!   [`not_in_range_exclusive`](guards::not_in_range_exclusive), …
//! - **Boolean**: [`required_that`](guards::required_that),
//!   [`is_true`](guards::is_true), [`is_false`](guards::is_false)

pub mod fluent;
pub mod foundation;
pub mod guards;
mod macros;
pub mod prelude;
