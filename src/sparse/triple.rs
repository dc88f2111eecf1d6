//! Triple: a single sparse entry identified by its coordinate

use std::cmp::Ordering;

/// One nonzero cell of a [`SparseMatrix`](super::SparseMatrix).
///
/// Equality and ordering compare `(row, col)` only, independent of the stored
/// value. This is what makes a `BTreeSet<Triple<T>>` a coordinate-unique set
/// with deterministic row-major iteration order, and what merge-based sparse
/// arithmetic relies on.
#[derive(Debug, Clone, Copy)]
pub struct Triple<T> {
    /// Row coordinate
    pub row: usize,
    /// Column coordinate
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Triple<T> {
    /// Create a triple.
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// The `(row, col)` coordinate.
    #[inline]
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<T> PartialEq for Triple<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coord() == other.coord()
    }
}

impl<T> Eq for Triple<T> {}

impl<T> PartialOrd for Triple<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Triple<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord().cmp(&other.coord())
    }
}
