//! Prelude module for convenient imports.
//!
//! A single `use precept::prelude::*;` brings in the error and result
//! types, the check functions, and the fluent wrapper.
//!
//! # Examples
//!
//! ```
//! use precept::prelude::*;
//!
//! fn rename(id: Option<u64>, title: &str) -> GuardResult<()> {
//!     let _id = not_null(id, Some("id"))?;
//!     let _title = not_null_or_white_space(Some(title), Some("title"))?;
//!     Ok(())
//! }
//!
//! assert!(rename(Some(7), "Quarterly report").is_ok());
//! ```

// ============================================================================
// FOUNDATION: error, result, seams
// ============================================================================

pub use crate::foundation::{BoxedCause, Emptiness, GuardError, GuardResult};

// ============================================================================
// GUARDS: the full check set
// ============================================================================

pub use crate::guards::{
    CONDITION_MESSAGE, REQUIRED_EXPECTATION_MESSAGE, display_name, equal_to, greater_than,
    greater_than_or_equal_to, in_range, in_range_exclusive, is_false, is_true, less_than,
    less_than_or_equal_to, not_empty, not_equal_to, not_in_range, not_in_range_exclusive,
    not_null, not_null_or_empty, not_null_or_white_space, required_that,
};

// ============================================================================
// FLUENT: chained checks
// ============================================================================

pub use crate::fluent::{Guard, MISSING_TEMPLATE_MESSAGE};
