//! Core sparse implementation: struct, construction, indexed access, display

use super::Triple;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::Shape;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Sparse matrix: only nonzero cells, stored in an ordered map keyed on
/// `(row, col)`.
///
/// The map enforces at most one entry per coordinate and iterates in
/// row-major coordinate order, which merge-based arithmetic exploits. A
/// coordinate absent from the map denotes the value 0; zero values are never
/// stored — constructors skip them, [`SparseMatrix::set`] with zero removes,
/// and arithmetic drops entries whose result is zero.
///
/// `Clone` deep-copies the entry map; two clones never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    pub(crate) shape: Shape,
    pub(crate) entries: BTreeMap<(usize, usize), T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Create an empty (all-zero) matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            shape: Shape::new(rows, cols)?,
            entries: BTreeMap::new(),
        })
    }

    /// Create a matrix from nested rows, inserting only nonzero cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for an empty outer or inner sequence and
    /// [`Error::InvalidArgument`] if the rows have uneven lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let shape = Shape::new(rows.len(), rows.first().map_or(0, Vec::len))?;
        let mut entries = BTreeMap::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != shape.cols {
                return Err(Error::invalid_argument(
                    "rows",
                    format!("row {} has length {}, expected {}", i, row.len(), shape.cols),
                ));
            }
            for (j, &v) in row.iter().enumerate() {
                if !v.is_zero() {
                    entries.insert((i, j), v);
                }
            }
        }
        Ok(Self { shape, entries })
    }

    /// Create a matrix from a row-major buffer, inserting only nonzero cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for zero dimensions and
    /// [`Error::InvalidArgument`] if the buffer length is not `rows * cols`.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        if data.len() != shape.numel() {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "buffer of length {} cannot fill a {} matrix",
                    data.len(),
                    shape
                ),
            ));
        }
        let mut entries = BTreeMap::new();
        for (i, &v) in data.iter().enumerate() {
            if !v.is_zero() {
                entries.insert((i / cols, i % cols), v);
            }
        }
        Ok(Self { shape, entries })
    }

    /// Create a matrix from a list of triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatedTriple`] if two triples share a coordinate
    /// (a repeated zero-valued coordinate counts too),
    /// [`Error::IndexOutOfBounds`] for a coordinate outside the shape, and
    /// [`Error::InvalidSize`] for zero dimensions.
    pub fn from_triples(rows: usize, cols: usize, triples: &[Triple<T>]) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        let mut entries = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for t in triples {
            if !shape.contains(t.row, t.col) {
                return Err(Error::out_of_bounds(t.row, t.col, shape));
            }
            if !seen.insert(t.coord()) {
                return Err(Error::DuplicatedTriple {
                    row: t.row,
                    col: t.col,
                });
            }
            if !t.value.is_zero() {
                entries.insert(t.coord(), t.value);
            }
        }
        Ok(Self { shape, entries })
    }

    /// Create a matrix from a coordinate-unique set of triples.
    ///
    /// The set's ordering is the coordinate order, so uniqueness holds by
    /// construction and no duplicate check is needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for a coordinate outside the shape
    /// and [`Error::InvalidSize`] for zero dimensions.
    pub fn from_entries(rows: usize, cols: usize, triples: BTreeSet<Triple<T>>) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        let mut entries = BTreeMap::new();
        for t in triples {
            if !shape.contains(t.row, t.col) {
                return Err(Error::out_of_bounds(t.row, t.col, shape));
            }
            if !t.value.is_zero() {
                entries.insert(t.coord(), t.value);
            }
        }
        Ok(Self { shape, entries })
    }

    /// Returns the shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Total number of cells (`rows * cols`), zeros included.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Number of stored (nonzero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no nonzero entry is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of nonzero cells (`nnz / numel`).
    #[inline]
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / self.numel() as f64
    }

    /// Fraction of zero cells (`1 - density`).
    #[inline]
    pub fn sparsity(&self) -> f64 {
        1.0 - self.density()
    }

    /// Value at `(row, col)`; an absent coordinate is 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if !self.shape.contains(row, col) {
            return Err(Error::out_of_bounds(row, col, self.shape));
        }
        Ok(self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero))
    }

    /// Store `value` at `(row, col)`; storing zero removes any entry there.
    ///
    /// This is the only mutation path for individual cells and preserves the
    /// one-entry-per-coordinate invariant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if !self.shape.contains(row, col) {
            return Err(Error::out_of_bounds(row, col, self.shape));
        }
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Snapshot of the stored entries in row-major coordinate order.
    pub fn triples(&self) -> Vec<Triple<T>> {
        self.iter().collect()
    }

    /// Iterate the stored entries in row-major coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = Triple<T>> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Triple::new(row, col, value))
    }
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    /// Renders every cell, materializing zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::zero();
        for row in 0..self.shape.rows {
            for col in 0..self.shape.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let v = self.entries.get(&(row, col)).copied().unwrap_or(zero);
                write!(f, "{}", v)?;
            }
            if row + 1 < self.shape.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_stores_only_nonzeros() {
        let m = SparseMatrix::from_rows(&[vec![0, 5, 0], vec![1, 0, 0]]).unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1).unwrap(), 5);
        assert_eq!(m.get(0, 0).unwrap(), 0);
        let coords: Vec<_> = m.iter().map(|t| t.coord()).collect();
        assert_eq!(coords, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_from_triples_duplicate_detected() {
        let triples = [
            Triple::new(0, 0, 1.0),
            Triple::new(1, 1, 2.0),
            Triple::new(0, 0, 3.0),
        ];
        assert_eq!(
            SparseMatrix::from_triples(2, 2, &triples),
            Err(Error::DuplicatedTriple { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_from_triples_bounds_checked() {
        let triples = [Triple::new(2, 0, 1.0)];
        assert!(SparseMatrix::from_triples(2, 2, &triples).is_err());
    }

    #[test]
    fn test_from_entries() {
        let mut set = BTreeSet::new();
        set.insert(Triple::new(0, 1, 4));
        set.insert(Triple::new(1, 0, 0)); // zero: not materialized
        let m = SparseMatrix::from_entries(2, 2, set).unwrap();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 1).unwrap(), 4);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut m = SparseMatrix::new(2, 2).unwrap();
        m.set(0, 0, 7).unwrap();
        assert_eq!(m.nnz(), 1);
        m.set(0, 0, 0).unwrap();
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_density() {
        let m = SparseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 0.0]]).unwrap();
        assert!((m.density() - 0.25).abs() < 1e-12);
        assert!((m.sparsity() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_display_materializes_zeros() {
        let m = SparseMatrix::from_rows(&[vec![0, 5], vec![1, 0]]).unwrap();
        assert_eq!(m.to_string(), "0 5\n1 0");
    }
}
