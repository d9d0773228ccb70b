//! String guards beyond plain emptiness.

use crate::foundation::{GuardError, GuardResult};
use crate::guards::{display_name, nullable::not_null};

/// Ensures `value` is present and contains at least one
/// non-whitespace character.
///
/// The null check runs first and reports the null message; an empty or
/// whitespace-only string reports the whitespace message (there is no
/// separate plain-empty message on this path).
///
/// # Examples
///
/// ```
/// use precept::guards::not_null_or_white_space;
///
/// assert!(not_null_or_white_space(Some("label"), Some("label")).is_ok());
///
/// let error = not_null_or_white_space(Some("   "), Some("label")).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Argument 'label' cannot be empty or whitespace only.",
/// );
/// ```
pub fn not_null_or_white_space<S>(value: Option<S>, name: Option<&str>) -> GuardResult<S>
where
    S: AsRef<str>,
{
    let value = not_null(value, name)?;
    if value.as_ref().trim().is_empty() {
        return Err(GuardError::new(format!(
            "Argument '{}' cannot be empty or whitespace only.",
            display_name(name)
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_value_reports_the_null_message() {
        let error = not_null_or_white_space(None::<&str>, Some("name")).unwrap_err();
        assert_eq!(error.to_string(), "Argument 'name' cannot be null.");
    }

    #[test]
    fn empty_string_reports_the_whitespace_message() {
        let error = not_null_or_white_space(Some(""), Some("name")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Argument 'name' cannot be empty or whitespace only.",
        );
    }

    #[test]
    fn tabs_and_newlines_count_as_whitespace() {
        assert!(not_null_or_white_space(Some(" \t\n"), Some("name")).is_err());
    }

    #[test]
    fn inner_whitespace_is_fine() {
        assert_eq!(
            not_null_or_white_space(Some("hello world"), Some("name")).unwrap(),
            "hello world",
        );
    }

    #[test]
    fn owned_strings_are_returned_intact() {
        let value = String::from("data");
        assert_eq!(not_null_or_white_space(Some(value), Some("name")).unwrap(), "data");
    }
}
