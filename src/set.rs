//! Heterogeneous finite sets [`Hset`].

use crate::prelude::*;
use std::collections::hash_map::DefaultHasher;

/// A finite set whose elements may be of any of the kinds declared by its [`Signature`].
///
/// ## Invariants
///
/// Every two elements in an [`Hset`] are distinct, and the kind of every element is declared by
/// the signature.
///
/// ## Equality
///
/// Two sets are equal when they have the same elements, regardless of their signatures. In
/// particular, `{1}` with signature `(i32)` equals `{1}` with signature `(i32, char)`.
#[derive(Clone, Default)]
pub struct Hset {
    /// The kinds this set may hold.
    pub(crate) signature: Signature,
    /// The elements.
    pub(crate) storage: Storage,
}

/// An iterator over the elements of an [`Hset`], in unspecified order.
pub type Iter<'a> = hashbrown::hash_set::Iter<'a, Tagged>;

impl<'a> IntoIterator for &'a Hset {
    type Item = &'a Tagged;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Hset {
    type Item = Tagged;
    type IntoIter = hashbrown::hash_set::IntoIter<Tagged>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_values()
    }
}

/// See [`Hset::from_tagged`].
impl FromIterator<Tagged> for Hset {
    fn from_iter<T: IntoIterator<Item = Tagged>>(iter: T) -> Self {
        Self::from_tagged(iter)
    }
}

impl Debug for Hset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self}: {}", self.signature)
    }
}

/// Displays a set in roster notation.
impl Display for Hset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(value) = iter.next() {
            write!(f, "{value}")?;
        }
        for value in iter {
            write!(f, ", {value}")?;
        }
        f.write_char('}')
    }
}

impl PartialEq for Hset {
    fn eq(&self, other: &Self) -> bool {
        if self.signature == other.signature {
            self.storage == other.storage
        } else {
            self.size() == other.size() && self.iter().all(|value| other.contains_tagged(value))
        }
    }
}

impl Eq for Hset {}

/// The hash doesn't depend on the signature nor on the iteration order, so that it's consistent
/// with equality.
impl Hash for Hset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum = 0u64;
        for value in self {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish());
        }

        state.write_usize(self.size());
        state.write_u64(sum);
    }
}

// -------------------- Constructions -------------------- //

impl Hset {
    /// The empty set Ø, declaring no kinds at all.
    ///
    /// Operations on this set use the closed forms from [`EmptySet`].
    #[must_use]
    pub fn empty() -> Self {
        Self::with_signature(Signature::empty())
    }

    /// The empty set of a given kind list, as in `Hset::new::<(i32, char)>()`.
    #[must_use]
    pub fn new<L: KindList>() -> Self {
        Self::with_signature(L::signature())
    }

    /// The empty set with a given signature.
    #[must_use]
    pub fn with_signature(signature: Signature) -> Self {
        Self {
            signature,
            storage: Storage::new(),
        }
    }

    /// Builds a set from some tagged values. The signature lists their kinds, in order of first
    /// appearance.
    ///
    /// This is what [`hset!`] expands to.
    pub fn from_tagged<I: IntoIterator<Item = Tagged>>(values: I) -> Self {
        let mut set = Self::empty();
        for value in values {
            set.signature.push(value.kind());
            set.storage.insert(value);
        }
        set
    }

    /// Set specification: the values from some iterator that satisfy a predicate.
    ///
    /// The resulting set declares the single kind `K`.
    pub fn select<K: Kind, I, P>(iter: I, mut pred: P) -> Self
    where
        I: IntoIterator,
        I::Item: Into<K>,
        P: FnMut(&K) -> bool,
    {
        let mut set = Self::new::<(K,)>();
        for value in iter {
            let value = value.into();
            if pred(&value) {
                set.storage.insert(Tagged::new(value));
            }
        }
        set
    }
}

// -------------------- Basic methods -------------------- //

impl Hset {
    /// The kinds this set may hold.
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Whether the set declares no kinds, which makes it the empty set Ø.
    #[must_use]
    pub fn is_zero_kind(&self) -> bool {
        self.signature.is_empty()
    }

    /// Whether the kind `K` is declared.
    #[must_use]
    pub fn declares<K: Kind>(&self) -> bool {
        self.signature.declares::<K>()
    }

    /// Number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Set cardinality. Same as [`Hset::size`].
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.size()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes all elements. The signature is kept.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Iterate over the elements of the set. The order is unspecified.
    pub fn iter(&self) -> Iter<'_> {
        self.storage.iter()
    }

    /// Iterate over the elements of kind `K`.
    pub fn values<K: Kind>(&self) -> impl Iterator<Item = &K> {
        self.iter().filter_map(Tagged::downcast_ref::<K>)
    }

    /// Set membership ∈ for a value of kind `K`.
    ///
    /// Always `false` if `K` is not declared.
    pub fn contains<K: Kind>(&self, value: &K) -> bool {
        self.declares::<K>() && self.storage.contains_value(value)
    }

    /// Set membership ∈ for a tagged value.
    ///
    /// Always `false` if its kind is not declared.
    #[must_use]
    pub fn contains_tagged(&self, value: &Tagged) -> bool {
        self.signature.contains(value.kind()) && self.storage.contains(value)
    }

    /// Builds a value of kind `K` and inserts it. Returns whether it was not already present.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::UndeclaredKind`] if `K` is not declared. The set is left untouched.
    pub fn emplace<K: Kind, A: Into<K>>(&mut self, arg: A) -> Result<bool, SetError> {
        self.insert_tagged(Tagged::new::<K>(arg.into()))
    }

    /// Inserts a tagged value. Returns whether it was not already present.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::UndeclaredKind`] if the kind of the value is not declared.
    pub fn insert_tagged(&mut self, value: Tagged) -> Result<bool, SetError> {
        if self.signature.contains(value.kind()) {
            Ok(self.storage.insert(value))
        } else {
            Err(SetError::UndeclaredKind(value.kind()))
        }
    }

    /// Removes a value of kind `K`. Returns whether it was present.
    ///
    /// If `K` is not declared, this returns `false` without looking at the elements.
    pub fn erase<K: Kind>(&mut self, value: &K) -> bool {
        self.declares::<K>() && self.storage.remove_value(value)
    }

    /// Removes a tagged value. Returns whether it was present.
    pub fn erase_tagged(&mut self, value: &Tagged) -> bool {
        self.signature.contains(value.kind()) && self.storage.remove(value)
    }
}
