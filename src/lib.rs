//! # Heterogeneous finite sets
//!
//! An [`Hset`] holds values of several distinct [kinds](Kind) at once, say `i32`, `char` and
//! [`F32`], while supporting the usual algebra of finite sets: union, intersection, difference,
//! symmetric difference, cross product and power set, as well as the subset relations.
//!
//! Every set carries a [`Signature`], the deduplicated list of kinds it may hold. Combining two
//! sets computes the signature of the result from the signatures of the operands.
//!
//! ```
//! use hset::prelude::*;
//!
//! let s1 = hset![1, 'a'];
//! let s2 = hset!['a', F32::from(2.5)];
//!
//! assert_eq!(&s1 & &s2, hset!['a']);
//! assert_eq!(&s1 | &s2, hset![1, 'a', F32::from(2.5)]);
//! assert_eq!(&s1 - &s2, hset![1]);
//! assert!(hset![1] <= s1);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod algebra;
pub mod empty;
pub mod error;
pub mod kind;
pub mod prelude;
pub mod relation;
pub mod set;
pub mod signature;
mod storage;
pub mod tagged;
mod tests;

use prelude::*;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// [`smallvec::smallvec`] coerced into [`SmallVec`].
#[macro_export]
macro_rules! smallvec {
    ($elem: expr; $n: expr) => (
        SmallVec::from_elem($elem, $n)
    );
    ($($x: expr), *$(,)*) => ({
        let vec: SmallVec<_> = smallvec::smallvec![$($x,)*];
        vec
    });
}

/// Builds an [`Hset`] from a non-empty list of values.
///
/// The signature of the set lists the kinds of the values, in order of first appearance.
///
/// ```
/// use hset::prelude::*;
///
/// let set = hset![1, 'a', 1];
/// assert_eq!(set.size(), 2);
/// assert!(set.contains(&'a'));
/// ```
#[macro_export]
macro_rules! hset {
    ($($x: expr),+ $(,)?) => {
        $crate::set::Hset::from_tagged([$($crate::tagged::Tagged::new($x)),+])
    };
}

/// Power set P(x).
///
/// See [`Hset::power_set`].
///
/// ## Errors
///
/// Fails with [`SetError::Capacity`] if the set has more than [`MAX_POWER_SET_CARD`] elements.
pub fn power_set(set: &Hset) -> Result<Vec<Hset>, SetError> {
    set.power_set()
}
