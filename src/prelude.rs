//! Crate prelude.

// The actual prelude.
pub use crate::{
    algebra::{PowerSet, MAX_POWER_SET_CARD},
    empty::EmptySet,
    error::SetError,
    hset,
    kind::{Kind, KindId, KindList, F32, F64},
    power_set,
    set::{Hset, Iter},
    signature::Signature,
    tagged::Tagged,
};

// Convenient imports within the crate.
pub(crate) use crate::{smallvec, storage::Storage, tagged::Probe, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::{Hash, Hasher},
};
