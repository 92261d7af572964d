//! The empty set Ø, as a dedicated value.
//!
//! Every operation on the empty set has a closed form, which [`Hset`] uses whenever its left
//! operand declares no kinds.

use crate::prelude::*;

/// The empty set Ø, declaring no kinds.
///
/// Compares equal to any empty [`Hset`], and converts into [`Hset::empty`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmptySet;

impl Display for EmptySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{}")
    }
}

impl From<EmptySet> for Hset {
    fn from(_: EmptySet) -> Self {
        Hset::empty()
    }
}

impl PartialEq<Hset> for EmptySet {
    fn eq(&self, other: &Hset) -> bool {
        other.is_empty()
    }
}

impl PartialEq<EmptySet> for Hset {
    fn eq(&self, _: &EmptySet) -> bool {
        self.is_empty()
    }
}

impl EmptySet {
    /// Ø ∩ x = Ø.
    #[must_use]
    pub fn intersection(self, _: &Hset) -> Hset {
        Hset::empty()
    }

    /// Ø ∪ x = x.
    #[must_use]
    pub fn union(self, other: &Hset) -> Hset {
        other.clone()
    }

    /// Ø − x = Ø.
    #[must_use]
    pub fn difference(self, _: &Hset) -> Hset {
        Hset::empty()
    }

    /// Ø △ x = x.
    #[must_use]
    pub fn symmetric_difference(self, other: &Hset) -> Hset {
        other.clone()
    }

    /// Ø × x has no pairs.
    #[must_use]
    pub fn cross_product(self, _: &Hset) -> Vec<Hset> {
        Vec::new()
    }

    /// P(Ø) = {Ø}.
    #[must_use]
    pub fn power_set(self) -> Vec<Hset> {
        vec![Hset::empty()]
    }

    /// Ø ⊆ x always holds.
    #[must_use]
    pub fn is_subset(self, _: &Hset) -> bool {
        true
    }

    /// Ø ⊂ x holds unless x is empty.
    #[must_use]
    pub fn is_proper_subset(self, other: &Hset) -> bool {
        !other.is_empty()
    }

    /// Ø ⊇ x holds only for empty x.
    #[must_use]
    pub fn is_superset(self, other: &Hset) -> bool {
        other.is_empty()
    }

    /// Ø ⊃ x never holds.
    #[must_use]
    pub fn is_proper_superset(self, _: &Hset) -> bool {
        false
    }

    /// Equal cardinality, i.e. x is empty.
    #[must_use]
    pub fn is_equivalent(self, other: &Hset) -> bool {
        other.is_empty()
    }

    /// Always `true`.
    ///
    /// Note that this disagrees with set theory, where the empty set overlaps nothing.
    #[must_use]
    pub fn is_overlapping(self, _: &Hset) -> bool {
        true
    }

    /// The negation of [`EmptySet::is_overlapping`], and hence always `false`.
    #[must_use]
    pub fn is_disjoint(self, other: &Hset) -> bool {
        !self.is_overlapping(other)
    }
}
