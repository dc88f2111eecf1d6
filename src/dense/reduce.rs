//! Dense reductions: global and per-row/per-column statistics

use super::DenseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};

impl<T: Element> DenseMatrix<T> {
    /// Maximum element value.
    pub fn max(&self) -> T {
        fold_extreme(self.data.iter().copied(), |a, b| a > b)
    }

    /// Minimum element value.
    pub fn min(&self) -> T {
        fold_extreme(self.data.iter().copied(), |a, b| a < b)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut acc = T::zero();
        for v in &self.data {
            acc += *v;
        }
        acc
    }

    /// Maximum value in `row`.
    pub fn row_max(&self, row: usize) -> Result<T> {
        Ok(fold_extreme(self.row_iter(row)?, |a, b| a > b))
    }

    /// Minimum value in `row`.
    pub fn row_min(&self, row: usize) -> Result<T> {
        Ok(fold_extreme(self.row_iter(row)?, |a, b| a < b))
    }

    /// Sum of the values in `row`.
    pub fn row_sum(&self, row: usize) -> Result<T> {
        let mut acc = T::zero();
        for v in self.row_iter(row)? {
            acc += v;
        }
        Ok(acc)
    }

    /// Maximum value in `col`.
    pub fn col_max(&self, col: usize) -> Result<T> {
        Ok(fold_extreme(self.col_iter(col)?, |a, b| a > b))
    }

    /// Minimum value in `col`.
    pub fn col_min(&self, col: usize) -> Result<T> {
        Ok(fold_extreme(self.col_iter(col)?, |a, b| a < b))
    }

    /// Sum of the values in `col`.
    pub fn col_sum(&self, col: usize) -> Result<T> {
        let mut acc = T::zero();
        for v in self.col_iter(col)? {
            acc += v;
        }
        Ok(acc)
    }

    fn row_iter(&self, row: usize) -> Result<impl Iterator<Item = T> + '_> {
        if row >= self.shape.rows {
            return Err(Error::out_of_bounds(row, 0, self.shape));
        }
        let start = self.shape.linear(row, 0);
        Ok(self.data[start..start + self.shape.cols].iter().copied())
    }

    fn col_iter(&self, col: usize) -> Result<impl Iterator<Item = T> + '_> {
        if col >= self.shape.cols {
            return Err(Error::out_of_bounds(0, col, self.shape));
        }
        Ok(self.data[col..].iter().step_by(self.shape.cols).copied())
    }
}

/// Fold a non-empty value stream to the element winning `keep`.
fn fold_extreme<T: Element>(mut values: impl Iterator<Item = T>, keep: fn(T, T) -> bool) -> T {
    // Matrix dimensions are positive, so the stream has at least one value.
    let mut best = values.next().unwrap_or_else(T::zero);
    for v in values {
        if keep(v, best) {
            best = v;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn fixture() -> DenseMatrix<i64> {
        DenseMatrix::from_slice(2, 3, &[3, -1, 4, 1, -5, 9]).unwrap()
    }

    #[test]
    fn test_global_reductions() {
        let m = fixture();
        assert_eq!(m.max(), 9);
        assert_eq!(m.min(), -5);
        assert_eq!(m.sum(), 11);
        assert_eq!(Matrix::mean(&m), 2); // 11 / 6, rounded to nearest
    }

    #[test]
    fn test_row_reductions() {
        let m = fixture();
        assert_eq!(m.row_max(0).unwrap(), 4);
        assert_eq!(m.row_min(1).unwrap(), -5);
        assert_eq!(m.row_sum(0).unwrap(), 6);
        assert!(m.row_sum(2).is_err());
    }

    #[test]
    fn test_col_reductions() {
        let m = fixture();
        assert_eq!(m.col_max(2).unwrap(), 9);
        assert_eq!(m.col_min(1).unwrap(), -5);
        assert_eq!(m.col_sum(0).unwrap(), 4);
        assert!(m.col_max(3).is_err());
    }
}
