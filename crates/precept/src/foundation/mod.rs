//! Core types shared by every guard check.
//!
//! - **Error**: [`GuardError`], the single failure type of the crate
//! - **Result**: [`GuardResult`], what every check returns
//! - **Seams**: [`Emptiness`], the input trait behind the emptiness checks
//!
//! # Architecture
//!
//! Checks are plain functions over these types. A check either hands the
//! validated value back unchanged, enabling inline use:
//!
//! ```
//! use precept::guards::not_empty;
//!
//! fn connect(host: &str) -> Result<(), precept::foundation::GuardError> {
//!     let host = not_empty(host, Some("host"))?;
//!     // host is the exact same value, now known non-empty
//!     let _ = host;
//!     Ok(())
//! }
//! ```
//!
//! or produces a [`GuardError`] that propagates to the caller. Nothing in
//! the crate catches or retries its own failures.

pub mod emptiness;
pub mod error;

pub use emptiness::Emptiness;
pub use error::{BoxedCause, GuardError};

/// Result of a guard check: the validated value, or the violation.
pub type GuardResult<T> = Result<T, GuardError>;
