//! Errors from set operations.

use crate::prelude::*;

/// Error in a set operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// The power set of a set this large can't be enumerated.
    Capacity {
        /// Cardinality of the set.
        card: usize,
        /// Largest supported cardinality.
        max: usize,
    },

    /// A value was inserted into a set whose signature doesn't declare its kind.
    UndeclaredKind(KindId),
}

impl Display for SetError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Capacity { card, max } => write!(
                f,
                "power set of a set with {card} elements exceeds the maximum of {max}"
            ),
            Self::UndeclaredKind(kind) => write!(f, "kind {kind} is not declared by the set"),
        }
    }
}

impl std::error::Error for SetError {}
