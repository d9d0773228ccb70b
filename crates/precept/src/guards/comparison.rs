//! Ordered-comparison guards.
//!
//! All six checks are minted by [`comparison_guard!`](crate::comparison_guard)
//! and require a total order (`Ord`): the comparison is the three-way
//! [`Ord::cmp`], never identity. Types with only a partial order (raw
//! floats) need an ordering wrapper before they can be guarded here.

use std::cmp::Ordering;

crate::comparison_guard! {
    /// Ensures `value` is strictly greater than `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use precept::guards::greater_than;
    ///
    /// let retries = greater_than(3_u32, 0, Some("retries"))?;
    /// assert_eq!(retries, 3);
    ///
    /// let error = greater_than(0_u32, 0, Some("retries")).unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Argument 'retries' must be greater than '0' but was '0'.",
    /// );
    /// # Ok::<(), precept::foundation::GuardError>(())
    /// ```
    pub fn greater_than;
    passes(ord) { ord == Ordering::Greater }
    describe "be greater than";
}

crate::comparison_guard! {
    /// Ensures `value` is greater than or equal to `bound`.
    pub fn greater_than_or_equal_to;
    passes(ord) { ord != Ordering::Less }
    describe "be greater than or equal to";
}

crate::comparison_guard! {
    /// Ensures `value` is strictly less than `bound`.
    pub fn less_than;
    passes(ord) { ord == Ordering::Less }
    describe "be less than";
}

crate::comparison_guard! {
    /// Ensures `value` is less than or equal to `bound`.
    pub fn less_than_or_equal_to;
    passes(ord) { ord != Ordering::Greater }
    describe "be less than or equal to";
}

crate::comparison_guard! {
    /// Ensures `value` compares equal to `bound`.
    ///
    /// Equality is `Ord::cmp(..) == Ordering::Equal`, not identity.
    pub fn equal_to;
    passes(ord) { ord == Ordering::Equal }
    describe "be equal to";
}

crate::comparison_guard! {
    /// Ensures `value` does not compare equal to `bound`.
    pub fn not_equal_to;
    passes(ord) { ord != Ordering::Equal }
    describe "not be equal to";
}
