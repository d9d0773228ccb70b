//! The failure type raised when a guard check is violated.
//!
//! Every check in this crate reports through [`GuardError`]: an
//! always-present human-readable message, an optional wrapped cause
//! (surfaced through [`std::error::Error::source`]), and an optional
//! diagnostic help link. The message is never absent; constructors
//! normalize the optional-message cases (see [`GuardError::from_message`]).

use std::borrow::Cow;
use std::error::Error as StdError;

/// Boxed cause stored inside a [`GuardError`].
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A violated precondition.
///
/// Constructed exactly at the point a guard check fails and immutable
/// afterwards; the library never catches its own errors, they propagate to
/// the caller via `?`.
///
/// # Examples
///
/// ```
/// use precept::foundation::GuardError;
///
/// let error = GuardError::new("Argument 'port' cannot be null.");
/// assert_eq!(error.to_string(), "Argument 'port' cannot be null.");
///
/// // Attach a cause and a diagnostic link:
/// let error = GuardError::new("Config rejected.")
///     .with_source(std::io::Error::other("disk gone"))
///     .with_help_link("https://example.org/errors/config");
/// assert!(std::error::Error::source(&error).is_some());
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct GuardError {
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedCause>,
    help_link: Option<Cow<'static, str>>,
}

impl GuardError {
    /// Message used by [`GuardError::default`].
    pub const DEFAULT_MESSAGE: &'static str = "A guard condition has been violated.";

    /// Creates an error with the given message.
    ///
    /// Static strings are stored without allocation.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            source: None,
            help_link: None,
        }
    }

    /// Creates an error from an optional message.
    ///
    /// An absent message normalizes to the empty string, not to
    /// [`DEFAULT_MESSAGE`](Self::DEFAULT_MESSAGE); only default
    /// construction substitutes the default text.
    pub fn from_message<M>(message: Option<M>) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        match message {
            Some(message) => Self::new(message),
            None => Self::new(""),
        }
    }

    /// Attaches the underlying cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: impl Into<BoxedCause>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches a diagnostic help link (typically a URL).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help_link(mut self, help_link: impl Into<Cow<'static, str>>) -> Self {
        self.help_link = Some(help_link.into());
        self
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The diagnostic help link, if one was attached.
    #[must_use]
    pub fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }
}

impl Default for GuardError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

// ============================================================================
// SERDE WIRE FORM
// ============================================================================

#[cfg(feature = "serde")]
mod wire {
    //! Wire form of [`GuardError`].
    //!
    //! The message and help link round-trip exactly; the cause does not
    //! implement `Serialize`, so it crosses the boundary rendered to text
    //! and rehydrates as a nested [`GuardError`].

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::GuardError;

    #[derive(Serialize, Deserialize)]
    struct WireError {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        help_link: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cause: Option<String>,
    }

    impl Serialize for GuardError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            WireError {
                message: self.message.clone().into_owned(),
                help_link: self.help_link.as_ref().map(|link| link.clone().into_owned()),
                cause: self.source.as_ref().map(ToString::to_string),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for GuardError {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = WireError::deserialize(deserializer)?;
            let mut error = GuardError::new(wire.message);
            if let Some(link) = wire.help_link {
                error = error.with_help_link(link);
            }
            if let Some(cause) = wire.cause {
                error = error.with_source(GuardError::new(cause));
            }
            Ok(error)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_default_message() {
        let error = GuardError::default();
        assert_eq!(error.message(), GuardError::DEFAULT_MESSAGE);
        assert!(StdError::source(&error).is_none());
    }

    #[test]
    fn display_is_the_message() {
        let error = GuardError::new("Argument 'x' cannot be empty.");
        assert_eq!(error.to_string(), "Argument 'x' cannot be empty.");
    }

    #[test]
    fn absent_message_normalizes_to_empty() {
        let error = GuardError::from_message(None::<&str>);
        assert_eq!(error.message(), "");
    }

    #[test]
    fn present_message_stored_as_given() {
        let error = GuardError::from_message(Some("Custom"));
        assert_eq!(error.message(), "Custom");
    }

    #[test]
    fn source_is_exposed_through_the_error_trait() {
        let error = GuardError::new("outer").with_source(GuardError::new("inner"));
        let source = StdError::source(&error).expect("cause was attached");
        assert_eq!(source.to_string(), "inner");
    }

    #[test]
    fn help_link_round_trips_through_the_accessor() {
        let error = GuardError::new("x").with_help_link("https://example.org/guard");
        assert_eq!(error.help_link(), Some("https://example.org/guard"));
    }

    #[test]
    fn zero_alloc_static_message() {
        let error = GuardError::new("static text");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_message_and_link() {
        let error = GuardError::new("boom")
            .with_help_link("https://example.org/boom")
            .with_source(GuardError::new("root cause"));

        let json = serde_json::to_string(&error).unwrap();
        let back: GuardError = serde_json::from_str(&json).unwrap();

        assert_eq!(back.message(), "boom");
        assert_eq!(back.help_link(), Some("https://example.org/boom"));
        assert_eq!(StdError::source(&back).unwrap().to_string(), "root cause");
    }
}
