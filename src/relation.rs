//! Relations between sets, and predicates on a single set.
//!
//! [`PartialOrd`] for [`Hset`] is the subset order, so that `<=` is ⊆ and `<` is ⊂.

use crate::prelude::*;

impl Hset {
    /// Subset relation x ⊆ y.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_subset(other);
        }

        self.size() <= other.size() && self.iter().all(|value| other.contains_tagged(value))
    }

    /// Strict subset relation x ⊂ y.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_proper_subset(other);
        }

        self.size() < other.size() && self.is_subset(other)
    }

    /// Superset relation x ⊇ y.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_superset(other);
        }

        other.is_subset(self)
    }

    /// Strict superset relation x ⊃ y.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_proper_superset(other);
        }

        other.is_proper_subset(self)
    }

    /// Whether both sets have the same cardinality.
    ///
    /// Only cardinalities are compared, not the elements.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_equivalent(other);
        }

        self.size() == other.size()
    }

    /// Whether both sets share some element.
    ///
    /// If `self` is the zero-kind empty set, this is always `true`. See
    /// [`EmptySet::is_overlapping`].
    #[must_use]
    pub fn is_overlapping(&self, other: &Self) -> bool {
        if self.is_zero_kind() {
            return EmptySet.is_overlapping(other);
        }

        let (small, big) = if self.size() < other.size() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|value| big.contains_tagged(value))
    }

    /// Whether both sets share no element. This is the negation of [`Hset::is_overlapping`].
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.is_overlapping(other)
    }

    /// Always `true`: sets are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        true
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        false
    }

    /// Whether the set has exactly one element.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.size() == 1
    }
}

impl PartialOrd for Hset {
    fn le(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.is_superset(other)
    }

    fn lt(&self, other: &Self) -> bool {
        self.is_proper_subset(other)
    }

    fn gt(&self, other: &Self) -> bool {
        self.is_proper_superset(other)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.size().cmp(&other.size());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}
