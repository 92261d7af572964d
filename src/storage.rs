//! Hash-backed storage for [`Tagged`] values.

use crate::prelude::*;
use hashbrown::HashSet;

/// A hash set of tagged values.
///
/// Insertion is idempotent. Plain values of any [`Kind`] can be looked up or removed directly,
/// through a [`Probe`].
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct Storage(HashSet<Tagged>);

impl Storage {
    /// Empty storage.
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// Empty storage with space for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, Tagged> {
        self.0.iter()
    }

    /// Moves the values out.
    pub fn into_values(self) -> hashbrown::hash_set::IntoIter<Tagged> {
        self.0.into_iter()
    }

    /// Inserts a value. Returns whether it was not already present.
    pub fn insert(&mut self, value: Tagged) -> bool {
        self.0.insert(value)
    }

    /// Inserts clones of all values from some iterator.
    pub fn extend<'a, I: IntoIterator<Item = &'a Tagged>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().cloned());
    }

    pub fn contains(&self, value: &Tagged) -> bool {
        self.0.contains(value)
    }

    /// Looks up a plain value of kind `T`.
    pub fn contains_value<T: Kind>(&self, value: &T) -> bool {
        self.0.contains(&Probe(value))
    }

    /// Removes a value. Returns whether it was present.
    pub fn remove(&mut self, value: &Tagged) -> bool {
        self.0.remove(value)
    }

    /// Removes a plain value of kind `T`. Returns whether it was present.
    pub fn remove_value<T: Kind>(&mut self, value: &T) -> bool {
        self.0.remove(&Probe(value))
    }
}
