//! Sparse reductions: max/min/sum, whole-matrix and per-axis
//!
//! Implicit zeros take part in extrema: a row with fewer stored entries
//! than columns contains at least one zero, so its max/min fold starts
//! from zero. Sums only ever visit stored entries.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};

fn fold_extreme<T: Element>(
    values: impl Iterator<Item = T>,
    seed: Option<T>,
    keep: fn(T, T) -> bool,
) -> T {
    let mut best = seed;
    for v in values {
        best = Some(match best {
            Some(b) if keep(b, v) => b,
            _ => v,
        });
    }
    best.unwrap_or_else(T::zero)
}

impl<T: Element> SparseMatrix<T> {
    fn implicit_zero_seed(&self, stored: usize, extent: usize) -> Option<T> {
        if stored < extent {
            Some(T::zero())
        } else {
            None
        }
    }

    /// Largest value in the matrix, implicit zeros included.
    pub fn max(&self) -> T {
        let seed = self.implicit_zero_seed(self.nnz(), self.shape.numel());
        fold_extreme(self.entries.values().copied(), seed, |b, v| b >= v)
    }

    /// Smallest value in the matrix, implicit zeros included.
    pub fn min(&self) -> T {
        let seed = self.implicit_zero_seed(self.nnz(), self.shape.numel());
        fold_extreme(self.entries.values().copied(), seed, |b, v| b <= v)
    }

    /// Sum of all values. Implicit zeros contribute nothing, so this is a
    /// single pass over the stored entries.
    pub fn sum(&self) -> T {
        let mut total = T::zero();
        for &v in self.entries.values() {
            total += v;
        }
        total
    }

    fn row_entries(&self, row: usize) -> impl Iterator<Item = T> + '_ {
        self.entries
            .range((row, 0)..(row + 1, 0))
            .map(|(_, &v)| v)
    }

    fn col_entries(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        self.entries
            .iter()
            .filter(move |((_, c), _)| *c == col)
            .map(|(_, &v)| v)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.shape.rows {
            return Err(Error::out_of_bounds(row, 0, self.shape));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.shape.cols {
            return Err(Error::out_of_bounds(0, col, self.shape));
        }
        Ok(())
    }

    /// Largest value in one row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `row` is out of range.
    pub fn row_max(&self, row: usize) -> Result<T> {
        self.check_row(row)?;
        let seed = self.implicit_zero_seed(self.row_entries(row).count(), self.shape.cols);
        Ok(fold_extreme(self.row_entries(row), seed, |b, v| b >= v))
    }

    /// Smallest value in one row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `row` is out of range.
    pub fn row_min(&self, row: usize) -> Result<T> {
        self.check_row(row)?;
        let seed = self.implicit_zero_seed(self.row_entries(row).count(), self.shape.cols);
        Ok(fold_extreme(self.row_entries(row), seed, |b, v| b <= v))
    }

    /// Sum of one row's values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `row` is out of range.
    pub fn row_sum(&self, row: usize) -> Result<T> {
        self.check_row(row)?;
        let mut total = T::zero();
        for v in self.row_entries(row) {
            total += v;
        }
        Ok(total)
    }

    /// Largest value in one column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `col` is out of range.
    pub fn col_max(&self, col: usize) -> Result<T> {
        self.check_col(col)?;
        let seed = self.implicit_zero_seed(self.col_entries(col).count(), self.shape.rows);
        Ok(fold_extreme(self.col_entries(col), seed, |b, v| b >= v))
    }

    /// Smallest value in one column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `col` is out of range.
    pub fn col_min(&self, col: usize) -> Result<T> {
        self.check_col(col)?;
        let seed = self.implicit_zero_seed(self.col_entries(col).count(), self.shape.rows);
        Ok(fold_extreme(self.col_entries(col), seed, |b, v| b <= v))
    }

    /// Sum of one column's values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `col` is out of range.
    pub fn col_sum(&self, col: usize) -> Result<T> {
        self.check_col(col)?;
        let mut total = T::zero();
        for v in self.col_entries(col) {
            total += v;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sm(rows: &[Vec<i64>]) -> SparseMatrix<i64> {
        SparseMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_extrema_include_implicit_zeros() {
        let m = sm(&[vec![-3, 0], vec![0, -7]]);
        // all stored values are negative, but the zeros count
        assert_eq!(m.max(), 0);
        assert_eq!(m.min(), -7);
    }

    #[test]
    fn test_extrema_on_a_full_matrix() {
        let m = sm(&[vec![4, 2], vec![9, 1]]);
        assert_eq!(m.max(), 9);
        assert_eq!(m.min(), 1);
    }

    #[test]
    fn test_sum_ignores_implicit_zeros() {
        let m = sm(&[vec![1, 0, 2], vec![0, 3, 0]]);
        assert_eq!(m.sum(), 6);
        assert_eq!(m.row_sum(0).unwrap(), 3);
        assert_eq!(m.col_sum(1).unwrap(), 3);
    }

    #[test]
    fn test_row_extrema_seed_per_row() {
        let m = sm(&[vec![-1, -2, -3], vec![5, 6, 7]]);
        // row 0 is fully stored: no implicit zero
        assert_eq!(m.row_max(0).unwrap(), -1);
        assert_eq!(m.row_min(1).unwrap(), 5);
    }

    #[test]
    fn test_col_extrema_with_sparse_column() {
        let m = sm(&[vec![0, 4], vec![0, -4], vec![2, 1]]);
        assert_eq!(m.col_max(0).unwrap(), 2);
        assert_eq!(m.col_min(0).unwrap(), 0);
        assert_eq!(m.col_min(1).unwrap(), -4);
    }

    #[test]
    fn test_axis_bounds_checked() {
        let m = sm(&[vec![1, 2]]);
        assert!(m.row_sum(1).is_err());
        assert!(m.col_max(2).is_err());
    }
}
