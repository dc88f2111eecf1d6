//! Core dense implementation: struct, construction, indexed access, display

use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::Shape;
use std::fmt;

/// Dense matrix: every cell stored in one contiguous row-major buffer.
///
/// `Clone` deep-copies the buffer; two clones never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub(crate) shape: Shape,
    pub(crate) data: Vec<T>,
}

impl<T: Element> DenseMatrix<T> {
    /// Create a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a matrix with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        Ok(Self {
            shape,
            data: vec![value; shape.numel()],
        })
    }

    /// Create a matrix from a row-major buffer.
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
        Ok(Self {
            shape,
            data: data.to_vec(),
        })
    }

    /// Create a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for an empty outer or inner sequence and
    /// [`Error::InvalidArgument`] if the rows have uneven lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let shape = Shape::new(rows.len(), rows.first().map_or(0, Vec::len))?;
        let mut data = Vec::with_capacity(shape.numel());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != shape.cols {
                return Err(Error::invalid_argument(
                    "rows",
                    format!("row {} has length {}, expected {}", i, row.len(), shape.cols),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { shape, data })
    }

    /// The identity matrix of order `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut mat = Self::new(n, n)?;
        for i in 0..n {
            mat.data[mat.shape.linear(i, i)] = T::one();
        }
        Ok(mat)
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

    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// The row-major buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if !self.shape.contains(row, col) {
            return Err(Error::out_of_bounds(row, col, self.shape));
        }
        Ok(self.data[self.shape.linear(row, col)])
    }

    /// Store `value` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if !self.shape.contains(row, col) {
            return Err(Error::out_of_bounds(row, col, self.shape));
        }
        let idx = self.shape.linear(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Value at `(row, col)` without a bounds check; internal hot paths only.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[self.shape.linear(row, col)]
    }
}

impl<T: Element> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.shape.rows {
            for col in 0..self.shape.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.at(row, col))?;
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
    fn test_filled() {
        let m = DenseMatrix::filled(2, 3, 7).unwrap();
        assert_eq!(m.numel(), 6);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(m.get(row, col).unwrap(), 7);
            }
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            DenseMatrix::<f64>::new(0, 3),
            Err(Error::InvalidSize { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn test_from_slice_length_checked() {
        assert!(DenseMatrix::from_slice(2, 2, &[1, 2, 3]).is_err());
        let m = DenseMatrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 3);
    }

    #[test]
    fn test_from_rows_ragged_rejected() {
        let err = DenseMatrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "rows", .. }));
    }

    #[test]
    fn test_indexing_bounds() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        assert_eq!(
            m.set(2, 0, 1.0),
            Err(Error::out_of_bounds(2, 0, m.shape()))
        );
        m.set(1, 1, 5.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 5.0);
    }

    #[test]
    fn test_display_rows_of_values() {
        let m = DenseMatrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4");
    }

    #[test]
    fn test_clone_is_deep() {
        let m = DenseMatrix::from_slice(1, 2, &[1.0, 2.0]).unwrap();
        let mut c = m.clone();
        c.set(0, 0, 9.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }
}
