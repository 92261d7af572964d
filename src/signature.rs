//! Type signatures, i.e. the lists of kinds a set may hold.
//!
//! Combining two sets with different signatures yields a set whose signature is computed from
//! those of the operands. Unions use [`Signature::union`], intersections use
//! [`Signature::intersect`].

use crate::prelude::*;

/// A deduplicated list of [kinds](Kind), in declaration order.
///
/// ## Invariants
///
/// No [`KindId`] appears twice within a signature.
#[derive(Clone, Default, PartialEq, Eq, Hash, IntoIterator)]
pub struct Signature(#[into_iterator(owned, ref)] SmallVec<KindId>);

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self}")
    }
}

/// Writes a signature as a tuple type.
impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        let mut iter = self.iter();
        if let Some(kind) = iter.next() {
            write!(f, "{kind}")?;
        }
        for kind in iter {
            write!(f, ", {kind}")?;
        }
        f.write_char(')')
    }
}

impl FromIterator<KindId> for Signature {
    fn from_iter<I: IntoIterator<Item = KindId>>(iter: I) -> Self {
        Self::dedup(iter)
    }
}

impl Signature {
    /// The signature declaring no kinds.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Builds a signature from a list of kinds, removing repeats. The first occurrence of each
    /// kind determines its position.
    pub fn dedup<I: IntoIterator<Item = KindId>>(kinds: I) -> Self {
        let mut signature = Self::empty();
        for kind in kinds {
            signature.push(kind);
        }
        signature
    }

    /// Appends a kind, unless it's already declared.
    pub(crate) fn push(&mut self, kind: KindId) {
        if !self.contains(kind) {
            self.0.push(kind);
        }
    }

    /// The kinds as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[KindId] {
        &self.0
    }

    /// Iterate over the kinds.
    pub fn iter(&self) -> std::slice::Iter<KindId> {
        self.0.iter()
    }

    /// Number of kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no kinds are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `kind` is declared.
    #[must_use]
    pub fn contains(&self, kind: KindId) -> bool {
        self.0.contains(&kind)
    }

    /// Whether the kind `T` is declared.
    #[must_use]
    pub fn declares<T: Kind>(&self) -> bool {
        self.contains(KindId::of::<T>())
    }

    /// The kinds declared by both signatures, in the order of `self`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self(
            self.iter()
                .copied()
                .filter(|&kind| other.contains(kind))
                .collect(),
        )
    }

    /// The kinds declared by either signature: those of `self` followed by the new ones in
    /// `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::dedup(self.iter().chain(other.iter()).copied())
    }
}

#[cfg(test)]
mod signature {
    use super::*;

    fn int() -> KindId {
        KindId::of::<i32>()
    }

    fn chr() -> KindId {
        KindId::of::<char>()
    }

    fn flt() -> KindId {
        KindId::of::<F32>()
    }

    #[test]
    fn dedup() {
        let sig = Signature::dedup([chr(), int(), chr(), flt(), int()]);
        assert_eq!(sig.as_slice(), &[chr(), int(), flt()]);
        assert!(Signature::dedup([]).is_empty());
    }

    #[test]
    fn contains() {
        let sig = <(i32, char)>::signature();
        assert!(sig.contains(int()));
        assert!(sig.declares::<char>());
        assert!(!sig.contains(flt()));
        assert!(!Signature::empty().contains(int()));
    }

    #[test]
    fn intersect() {
        let fst = <(i32, char, F32)>::signature();
        let snd = <(F32, String, i32)>::signature();
        assert_eq!(fst.intersect(&snd).as_slice(), &[int(), flt()]);
        assert_eq!(snd.intersect(&fst).as_slice(), &[flt(), int()]);
        assert!(fst.intersect(&Signature::empty()).is_empty());
    }

    #[test]
    fn union() {
        let fst = <(i32, char)>::signature();
        let snd = <(char, F32)>::signature();
        assert_eq!(fst.union(&snd).as_slice(), &[int(), chr(), flt()]);
        assert_eq!(fst.union(&fst), fst);
    }

    #[test]
    fn display() {
        assert_eq!(<(i32, char)>::signature().to_string(), "(i32, char)");
        assert_eq!(Signature::empty().to_string(), "()");
    }
}
