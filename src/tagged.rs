//! Tagged values, the elements of an [`Hset`].

use crate::prelude::*;

/// Object-safe counterpart to [`Kind`].
trait Payload: Any + Debug {
    /// Upcast into [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Upcast a box into [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Equality against a payload of possibly different kind.
    fn eq_payload(&self, other: &dyn Payload) -> bool;

    /// Feeds the value into the hasher.
    fn hash_payload(&self, state: &mut dyn Hasher);

    /// Clones the value into a new box.
    fn clone_payload(&self) -> Box<dyn Payload>;
}

impl<T: Kind> Payload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn eq_payload(&self, other: &dyn Payload) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn hash_payload(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn clone_payload(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }
}

/// A value of some [`Kind`], together with the identity of that kind.
///
/// Two tagged values are equal when they have the same kind and equal payloads. Values of
/// different kinds are never equal, and the kind takes part in the hash.
pub struct Tagged {
    /// The kind of the payload.
    kind: KindId,
    /// The value proper.
    value: Box<dyn Payload>,
}

impl Tagged {
    /// Tags a value with its kind.
    pub fn new<T: Kind>(value: T) -> Self {
        Self {
            kind: KindId::of::<T>(),
            value: Box::new(value),
        }
    }

    /// The kind of the value.
    #[must_use]
    pub const fn kind(&self) -> KindId {
        self.kind
    }

    /// Whether the value is of kind `T`.
    #[must_use]
    pub fn is<T: Kind>(&self) -> bool {
        self.kind.is::<T>()
    }

    /// A reference to the value, if it's of kind `T`.
    #[must_use]
    pub fn downcast_ref<T: Kind>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref()
    }

    /// Takes the value out, if it's of kind `T`. Otherwise, gives the tagged value back.
    ///
    /// ## Errors
    ///
    /// Returns `self` if the value is not of kind `T`.
    pub fn downcast<T: Kind>(self) -> Result<T, Self> {
        if self.is::<T>() {
            self.value
                .into_any()
                .downcast()
                .map(|value| *value)
                .map_err(|_| unreachable!("kind identity was checked"))
        } else {
            Err(self)
        }
    }
}

impl Clone for Tagged {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            value: self.value.clone_payload(),
        }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value.eq_payload(other.value.as_ref())
    }
}

impl Eq for Tagged {}

impl Hash for Tagged {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.value.hash_payload(state);
    }
}

impl Debug for Tagged {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.value)
    }
}

impl Display for Tagged {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.value)
    }
}

/// Looks up a plain value within a hash set of [`Tagged`] values, without tagging it first.
///
/// Hashes exactly as the corresponding [`Tagged`] value would.
pub(crate) struct Probe<'a, T>(pub &'a T);

impl<T: Kind> Hash for Probe<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        KindId::of::<T>().hash(state);
        self.0.hash(state);
    }
}

impl<T: Kind> hashbrown::Equivalent<Tagged> for Probe<'_, T> {
    fn equivalent(&self, key: &Tagged) -> bool {
        key.downcast_ref::<T>() == Some(self.0)
    }
}

#[cfg(test)]
mod tagged {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut state = DefaultHasher::new();
        value.hash(&mut state);
        state.finish()
    }

    #[test]
    fn kinds_never_collide() {
        assert_eq!(Tagged::new(1i32), Tagged::new(1i32));
        assert_ne!(Tagged::new(1i32), Tagged::new(2i32));
        assert_ne!(Tagged::new(1i32), Tagged::new(1i64));
        assert_ne!(Tagged::new('a'), Tagged::new(97u32));
    }

    #[test]
    fn downcast() {
        let value = Tagged::new(String::from("hello"));
        assert!(value.is::<String>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert_eq!(value.downcast_ref::<i32>(), None);

        let value = value.downcast::<i32>().unwrap_err();
        assert_eq!(value.downcast::<String>().unwrap(), "hello");
    }

    #[test]
    fn clone() {
        let value = Tagged::new(vec![1, 2, 3]);
        assert_eq!(value.clone(), value);
        assert_eq!(hash_of(&value.clone()), hash_of(&value));
    }

    #[test]
    fn probe_hash() {
        for value in [0, 1, -7, i32::MAX] {
            assert_eq!(hash_of(&Tagged::new(value)), hash_of(&Probe(&value)));
        }
        assert_eq!(hash_of(&Tagged::new('x')), hash_of(&Probe(&'x')));
    }

    #[test]
    fn display() {
        assert_eq!(Tagged::new(5).to_string(), "5");
        assert_eq!(Tagged::new('a').to_string(), "'a'");
    }
}
