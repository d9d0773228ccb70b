//! Declarative macro for minting ordered-comparison guard checks.
//!
//! The six comparison checks in [`guards::comparison`](crate::guards::comparison)
//! share one shape: compare the value against a bound with [`Ord::cmp`],
//! hand the value back on success, format
//! `Argument '{name}' must <phrase> '{bound}' but was '{value}'.` on
//! failure. [`comparison_guard!`] captures that shape once; downstream
//! crates can use it to mint their own ordered checks.

// ============================================================================
// COMPARISON GUARD MACRO
// ============================================================================

/// Creates a complete ordered-comparison guard check.
///
/// Expands to a public function
/// `fn name<T: Ord + Display>(value: T, bound: T, name: Option<&str>) -> GuardResult<T>`.
/// The `passes` block receives the [`Ordering`](std::cmp::Ordering) of
/// `value` against `bound`; the `describe` phrase is spliced into the
/// failure message after `must`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// precept::comparison_guard! {
///     /// Ensures `value` sorts after `bound`.
///     pub fn after;
///     passes(ord) { ord == Ordering::Greater }
///     describe "be after";
/// }
///
/// assert!(after('b', 'a', Some("letter")).is_ok());
/// let error = after('a', 'b', Some("letter")).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Argument 'letter' must be after 'b' but was 'a'.",
/// );
/// ```
#[macro_export]
macro_rules! comparison_guard {
    (
        $(#[$meta:meta])*
        $vis:vis fn $fname:ident;
        passes($ord:ident) $rule:block
        describe $phrase:literal;
    ) => {
        $(#[$meta])*
        $vis fn $fname<T>(
            value: T,
            bound: T,
            name: ::core::option::Option<&str>,
        ) -> $crate::foundation::GuardResult<T>
        where
            T: ::core::cmp::Ord + ::core::fmt::Display,
        {
            let $ord = value.cmp(&bound);
            if $rule {
                ::core::result::Result::Ok(value)
            } else {
                ::core::result::Result::Err($crate::foundation::GuardError::new(format!(
                    concat!("Argument '{}' must ", $phrase, " '{}' but was '{}'."),
                    $crate::guards::display_name(name),
                    bound,
                    value,
                )))
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
