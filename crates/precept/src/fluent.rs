//! Fluent chained checks over a single named value.
//!
//! [`Guard`] wraps one value/name pair so several checks can run against
//! it without repeating either. Each check consumes the wrapper and
//! returns `Result<Self, GuardError>`, so chains compose with `?`:
//!
//! ```
//! use precept::fluent::Guard;
//!
//! let port = Guard::new(8080_u16, Some("port"))
//!     .requires(|v| v.is_some_and(|&p| p >= 1024), Some("Argument '{0}' must be unprivileged, got '{1}'."))?
//!     .requires(|v| v.is_some_and(|&p| p != 8443), Some("Argument '{0}' clashes with the TLS listener."))?
//!     .into_value();
//! assert_eq!(port, Some(8080));
//! # Ok::<(), precept::foundation::GuardError>(())
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::{GuardError, GuardResult};

/// Fixed text used by [`Guard::requires`] when no failure-message template
/// is supplied. Used verbatim, without substitution.
pub const MISSING_TEMPLATE_MESSAGE: &str =
    "A guard constraint failed. No failure message was supplied.";

const UNKNOWN_NAME: &str = "Unknown";
const NULL_VALUE: &str = "[NULL]";

// ============================================================================
// GUARD WRAPPER
// ============================================================================

/// A value under test together with its display name.
///
/// The wrapped value is an `Option` so the absent ("null") case is
/// type-checked rather than sentinel-based; [`Guard::new`] wraps a value
/// that is known present, [`Guard::from_option`] one that may not be.
/// Both fields are read-only after construction.
#[derive(Debug, Clone)]
pub struct Guard<T> {
    value: Option<T>,
    name: Option<Cow<'static, str>>,
}

impl<T> Guard<T> {
    /// Wraps a present value.
    pub fn new<N>(value: T, name: Option<N>) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::from_option(Some(value), name)
    }

    /// Wraps a possibly-absent value.
    pub fn from_option<N>(value: Option<T>, name: Option<N>) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            value,
            name: name.map(Into::into),
        }
    }

    /// The wrapped value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The display name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Unwraps the guard back into the (possibly absent) value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Re-raises the [`not_null`](crate::guards::not_null) check against
    /// the wrapped value and name, then hands the wrapper back for
    /// further chaining.
    ///
    /// The failure message (and its `[unknown]` name fallback) is exactly
    /// the standalone check's.
    pub fn is_not_null(self) -> GuardResult<Self> {
        crate::guards::not_null(self.value.as_ref(), self.name.as_deref())?;
        Ok(self)
    }
}

impl<T: Display> Guard<T> {
    /// Evaluates an arbitrary predicate against the wrapped value.
    ///
    /// On success the same wrapper comes back for further chaining. On
    /// failure the template is formatted with two positional
    /// substitutions, in this order:
    ///
    /// - `{0}` — the name, or the literal `Unknown` when absent
    /// - `{1}` — the value's display text, or the literal `[NULL]` when
    ///   the value is absent
    ///
    /// An absent template yields [`MISSING_TEMPLATE_MESSAGE`] verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use precept::fluent::Guard;
    ///
    /// let error = Guard::new(-2, Some("offset"))
    ///     .requires(|v| v.is_some_and(|&n| n >= 0), Some("Argument '{0}' must not be negative, got '{1}'."))
    ///     .unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Argument 'offset' must not be negative, got '-2'.",
    /// );
    /// ```
    pub fn requires<P>(self, predicate: P, template: Option<&str>) -> GuardResult<Self>
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        if predicate(self.value.as_ref()) {
            Ok(self)
        } else {
            Err(GuardError::new(self.failure_message(template)))
        }
    }

    fn failure_message(&self, template: Option<&str>) -> String {
        let Some(template) = template else {
            return MISSING_TEMPLATE_MESSAGE.to_owned();
        };
        let name = self.name.as_deref().unwrap_or(UNKNOWN_NAME);
        let value = self
            .value
            .as_ref()
            .map_or_else(|| NULL_VALUE.to_owned(), ToString::to_string);
        format_template(template, name, &value)
    }
}

/// Substitutes `{0}` with the name and `{1}` with the value text, in that
/// order.
fn format_template(template: &str, name: &str, value: &str) -> String {
    template.replace("{0}", name).replace("{1}", value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_preserves_value_and_name() {
        let guard = Guard::new(5, Some("x"))
            .requires(|v| v.is_some_and(|&n| n > 0), Some("unused"))
            .unwrap();
        assert_eq!(guard.value(), Some(&5));
        assert_eq!(guard.name(), Some("x"));
    }

    #[test]
    fn chains_compose() {
        let result = Guard::new(5, Some("x"))
            .is_not_null()
            .and_then(|g| g.requires(|v| v.is_some_and(|&n| n > 0), Some("positive")))
            .and_then(|g| g.requires(|v| v.is_some_and(|&n| n < 10), Some("small")));
        assert!(result.is_ok());
    }

    #[test]
    fn template_substitutes_name_and_value() {
        let error = Guard::new(42, Some("answer"))
            .requires(|_| false, Some("Check '{0}' failed with value '{1}'."))
            .unwrap_err();
        assert_eq!(error.to_string(), "Check 'answer' failed with value '42'.");
    }

    #[test]
    fn absent_name_substitutes_unknown() {
        let error = Guard::new(1, None::<&str>)
            .requires(|_| false, Some("{0}: {1}"))
            .unwrap_err();
        assert_eq!(error.to_string(), "Unknown: 1");
    }

    #[test]
    fn absent_value_substitutes_null_marker() {
        let error = Guard::<i32>::from_option(None, Some("x"))
            .requires(|v| v.is_some(), Some("{0} was {1}"))
            .unwrap_err();
        assert_eq!(error.to_string(), "x was [NULL]");
    }

    #[test]
    fn absent_template_uses_the_fixed_text_verbatim() {
        let error = Guard::new(1, Some("x")).requires(|_| false, None).unwrap_err();
        assert_eq!(error.to_string(), MISSING_TEMPLATE_MESSAGE);
    }

    #[test]
    fn is_not_null_matches_the_standalone_check() {
        let error = Guard::<i32>::from_option(None, Some("conn")).is_not_null().unwrap_err();
        assert_eq!(error.to_string(), "Argument 'conn' cannot be null.");

        let error = Guard::<i32>::from_option(None, None::<&str>).is_not_null().unwrap_err();
        assert_eq!(error.to_string(), "Argument '[unknown]' cannot be null.");
    }

    #[test]
    fn predicate_sees_the_absent_value() {
        // A predicate that tolerates absence keeps the chain alive.
        let guard = Guard::<i32>::from_option(None, Some("opt"))
            .requires(|v| v.is_none_or(|&n| n > 0), Some("unused"))
            .unwrap();
        assert_eq!(guard.into_value(), None);
    }
}
