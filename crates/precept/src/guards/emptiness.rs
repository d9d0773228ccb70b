//! Emptiness guard over any [`Emptiness`] input.

use crate::foundation::{Emptiness, GuardError, GuardResult};
use crate::guards::display_name;

/// Ensures `value` holds at least one element (or character).
///
/// Serves strings, slices, vectors, maps and sets through the
/// [`Emptiness`] seam, and hands the container back on success.
///
/// # Examples
///
/// ```
/// use precept::guards::not_empty;
///
/// let tags = not_empty(vec!["infra"], Some("tags"))?;
/// assert_eq!(tags, ["infra"]);
///
/// let error = not_empty("", Some("host")).unwrap_err();
/// assert_eq!(error.to_string(), "Argument 'host' cannot be empty.");
/// # Ok::<(), precept::foundation::GuardError>(())
/// ```
pub fn not_empty<V>(value: V, name: Option<&str>) -> GuardResult<V>
where
    V: Emptiness,
{
    if value.is_empty_value() {
        Err(GuardError::new(format!(
            "Argument '{}' cannot be empty.",
            display_name(name)
        )))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filled_string_is_returned() {
        assert_eq!(not_empty("data", Some("arg")).unwrap(), "data");
    }

    #[test]
    fn empty_string_is_rejected() {
        let error = not_empty("", Some("arg")).unwrap_err();
        assert_eq!(error.to_string(), "Argument 'arg' cannot be empty.");
    }

    #[test]
    fn empty_slice_is_rejected() {
        let empty: &[u8] = &[];
        assert!(not_empty(empty, Some("buf")).is_err());
    }

    #[test]
    fn filled_vec_is_returned_intact() {
        let items = vec![1, 2];
        assert_eq!(not_empty(items.clone(), Some("items")).unwrap(), items);
    }

    #[test]
    fn absent_name_falls_back_to_unknown() {
        let error = not_empty("", None).unwrap_err();
        assert_eq!(error.to_string(), "Argument '[unknown]' cannot be empty.");
    }
}
