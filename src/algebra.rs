//! Set algebra: union, intersection, differences, cross product and power set.
//!
//! All operations leave their operands untouched and build a new set. Operators are provided for
//! both owned sets and references: `&`, `|`, `-`, `^`, `*`, and the in-place `&=`, `|=`, `-=`,
//! `^=`.

use crate::prelude::*;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Sub, SubAssign};

/// The largest cardinality for which [`Hset::power_set`] can be computed.
///
/// Subsets are enumerated through the bits of a `u64`.
pub const MAX_POWER_SET_CARD: usize = 63;

impl Hset {
    /// Set intersection x ∩ y.
    ///
    /// The signature of the result holds the kinds declared by both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_zero_kind() {
            return EmptySet.intersection(other);
        }

        let mut set = Self::with_signature(self.signature.intersect(&other.signature));
        if self.is_empty() || other.is_empty() {
            return set;
        }

        // Only values of a shared kind can ever match.
        let same = self.signature == other.signature;
        let (small, big) = if self.size() < other.size() {
            (self, other)
        } else {
            (other, self)
        };
        for value in small {
            if (same || set.signature.contains(value.kind())) && big.storage.contains(value) {
                set.storage.insert(value.clone());
            }
        }

        set
    }

    /// Set union x ∪ y.
    ///
    /// The signature of the result holds the kinds declared by either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_zero_kind() {
            return EmptySet.union(other);
        }

        if self.signature == other.signature {
            let mut set = self.clone();
            set.storage.extend(other);
            return set;
        }

        let signature = self.signature.union(&other.signature);
        tracing::trace!(%signature, "widening signature for union");
        let mut set = Self {
            signature,
            storage: Storage::with_capacity(self.size() + other.size()),
        };
        set.storage.extend(self);
        set.storage.extend(other);
        set
    }

    /// Set difference x − y.
    ///
    /// The result keeps the signature of `self`. Values whose kind is not declared by `other`
    /// are always kept.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_zero_kind() {
            return EmptySet.difference(other);
        }

        let mut set = Self::with_signature(self.signature.clone());
        set.storage
            .extend(self.iter().filter(|value| !other.contains_tagged(value)));
        set
    }

    /// Symmetric difference x △ y = (x − y) ∪ (y − x).
    ///
    /// The signature of the result holds the kinds declared by either set.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        if self.is_zero_kind() {
            return EmptySet.symmetric_difference(other);
        }

        let mut set = Self::with_signature(self.signature.union(&other.signature));
        set.storage
            .extend(self.iter().filter(|value| !other.contains_tagged(value)));
        set.storage
            .extend(other.iter().filter(|value| !self.contains_tagged(value)));
        set
    }

    /// Cross product x × y.
    ///
    /// Returns the set {a, b} for every `a` in `self` and `b` in `other`, which makes for
    /// `|x| · |y|` sets. These are sets rather than ordered pairs: {a, a} is just {a}. Each of
    /// them has the signature of the union of both sets.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Vec<Self> {
        if self.is_zero_kind() {
            return EmptySet.cross_product(other);
        }

        let signature = self.signature.union(&other.signature);
        let mut product = Vec::with_capacity(self.size() * other.size());
        for fst in self {
            for snd in other {
                let mut pair = Self {
                    signature: signature.clone(),
                    storage: Storage::with_capacity(2),
                };
                pair.storage.insert(fst.clone());
                pair.storage.insert(snd.clone());
                product.push(pair);
            }
        }

        tracing::debug!(len = product.len(), "built cross product");
        product
    }

    /// Lazily enumerates the power set P(x).
    ///
    /// Each element of the set is assigned a bit, following iteration order. The `i`-th subset
    /// holds the elements whose bits are set in `i`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::Capacity`] if the set has more than [`MAX_POWER_SET_CARD`]
    /// elements.
    pub fn subsets(&self) -> Result<PowerSet<'_>, SetError> {
        let card = self.size();
        if card > MAX_POWER_SET_CARD {
            tracing::debug!(card, max = MAX_POWER_SET_CARD, "power set too large");
            return Err(SetError::Capacity {
                card,
                max: MAX_POWER_SET_CARD,
            });
        }

        Ok(PowerSet {
            elements: self.iter().collect(),
            signature: &self.signature,
            mask: 0,
            end: 1 << card,
        })
    }

    /// Power set P(x), containing all `2^|x|` subsets, including Ø and x itself.
    ///
    /// Every subset has the signature of `self`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::Capacity`] if the set has more than [`MAX_POWER_SET_CARD`]
    /// elements.
    pub fn power_set(&self) -> Result<Vec<Self>, SetError> {
        if self.is_zero_kind() {
            return Ok(EmptySet.power_set());
        }

        let power_set: Vec<_> = self.subsets()?.collect();
        tracing::debug!(len = power_set.len(), "built power set");
        Ok(power_set)
    }
}

/// An iterator over the subsets of an [`Hset`].
///
/// See [`Hset::subsets`].
#[derive(Clone)]
pub struct PowerSet<'a> {
    /// The elements of the set, each one corresponding to a bit.
    elements: Vec<&'a Tagged>,
    /// The signature of every subset.
    signature: &'a Signature,
    /// The bits for the next subset.
    mask: u64,
    /// One past the last mask.
    end: u64,
}

impl Iterator for PowerSet<'_> {
    type Item = Hset;

    fn next(&mut self) -> Option<Hset> {
        if self.mask >= self.end {
            return None;
        }

        let mut subset = Hset::with_signature(self.signature.clone());
        for i in self.mask.view_bits::<Lsb0>().iter_ones() {
            subset.storage.insert(self.elements[i].clone());
        }

        self.mask += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.mask) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for PowerSet<'_> {}

// -------------------- Operators -------------------- //

/// Implements a binary operator in terms of an [`Hset`] method, for both owned sets and
/// references.
macro_rules! impl_op {
    ($op: ident, $func: ident, $method: ident, $out: ty) => {
        impl $op<&Hset> for &Hset {
            type Output = $out;

            fn $func(self, rhs: &Hset) -> $out {
                self.$method(rhs)
            }
        }

        impl $op for Hset {
            type Output = $out;

            fn $func(self, rhs: Hset) -> $out {
                self.$method(&rhs)
            }
        }
    };
}

impl_op!(BitAnd, bitand, intersection, Hset);
impl_op!(BitOr, bitor, union, Hset);
impl_op!(Sub, sub, difference, Hset);
impl_op!(BitXor, bitxor, symmetric_difference, Hset);
impl_op!(Mul, mul, cross_product, Vec<Hset>);

/// Implements an in-place operator in terms of an [`Hset`] method. The result replaces the left
/// operand, signature included.
macro_rules! impl_op_assign {
    ($op: ident, $func: ident, $method: ident) => {
        impl $op<&Hset> for Hset {
            fn $func(&mut self, rhs: &Hset) {
                *self = self.$method(rhs);
            }
        }

        impl $op for Hset {
            fn $func(&mut self, rhs: Hset) {
                *self = self.$method(&rhs);
            }
        }
    };
}

impl_op_assign!(BitAndAssign, bitand_assign, intersection);
impl_op_assign!(BitOrAssign, bitor_assign, union);
impl_op_assign!(SubAssign, sub_assign, difference);
impl_op_assign!(BitXorAssign, bitxor_assign, symmetric_difference);
