//! Value [kinds](Kind) and their identities.

use crate::prelude::*;
use ordered_float::OrderedFloat;

/// A concrete value type that can be stored within an [`Hset`].
///
/// This is implemented for every `'static` type with value equality, hashing, and a debug
/// representation. Floating point numbers don't qualify on their own, use [`F32`] or [`F64`]
/// instead.
pub trait Kind: Any + Clone + Eq + Hash + Debug {}

impl<T: Any + Clone + Eq + Hash + Debug> Kind for T {}

/// A single precision float kind.
pub type F32 = OrderedFloat<f32>;

/// A double precision float kind.
pub type F64 = OrderedFloat<f64>;

/// The identity of a [`Kind`].
///
/// Two identities are equal exactly when they refer to the same type. The type name is only kept
/// around for display purposes.
#[derive(Clone, Copy, derive_more::Display)]
#[display(fmt = "{}", name)]
pub struct KindId {
    /// The identity proper.
    id: TypeId,
    /// Name of the type.
    name: &'static str,
}

impl KindId {
    /// The identity of the kind `T`.
    #[must_use]
    pub fn of<T: Kind>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The name of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is the identity of `T`.
    #[must_use]
    pub fn is<T: Kind>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for KindId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for KindId {}

/// Only the [`TypeId`] gets hashed. Lookups in [`Storage`] rely on this.
impl Hash for KindId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for KindId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name)
    }
}

/// A list of kinds declared as a tuple type, as in `Hset::new::<(i32, char)>()`.
pub trait KindList {
    /// The declared kinds in order, repeats included.
    fn kinds() -> SmallVec<KindId>;

    /// The declared kinds without repeats.
    fn signature() -> Signature {
        Signature::dedup(Self::kinds())
    }
}

/// Implements [`KindList`] for a tuple.
macro_rules! impl_kind_list {
    ($($t: ident),*) => {
        impl<$($t: Kind),*> KindList for ($($t,)*) {
            fn kinds() -> SmallVec<KindId> {
                smallvec![$(KindId::of::<$t>()),*]
            }
        }
    };
}

impl_kind_list!();
impl_kind_list!(A);
impl_kind_list!(A, B);
impl_kind_list!(A, B, C);
impl_kind_list!(A, B, C, D);
impl_kind_list!(A, B, C, D, E);
impl_kind_list!(A, B, C, D, E, F);
impl_kind_list!(A, B, C, D, E, F, G);
impl_kind_list!(A, B, C, D, E, F, G, H);
