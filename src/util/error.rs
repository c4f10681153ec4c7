use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A positional access past the end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A rank access outside of `[-len, len)`. Negative ranks count back from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOutOfBounds {
    /// The rank that was requested, before any normalization.
    pub rank: isize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for RankOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rank {} out of bounds for collection with {} elements!", self.rank, self.len)
    }
}

impl Error for RankOutOfBounds {}

/// An access to an element of a collection holding none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access an element of an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// An attempt to create a fixed capacity collection which can't hold anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed capacity collections require a capacity of at least 1!")
    }
}

impl Error for ZeroCapacity {}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RankError {
    RankOutOfBounds(RankOutOfBounds),
    EmptyCollection(EmptyCollection),
}
