//! Dense shape operations: transpose, reverse, reshape, slicing

use super::DenseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::{check_range, Shape};

impl<T: Element> DenseMatrix<T> {
    /// Transpose in place, swapping the shape's rows and columns.
    pub fn transpose(&mut self) {
        let transposed = self.shape.transposed();
        let mut data = Vec::with_capacity(self.numel());
        for row in 0..transposed.rows {
            for col in 0..transposed.cols {
                data.push(self.at(col, row));
            }
        }
        self.shape = transposed;
        self.data = data;
    }

    /// Reverse the element order in place (180-degree flip of both axes).
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Change the shape to `(rows, cols)`, keeping the row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for zero dimensions and
    /// [`Error::MismatchedSize`] naming "matrix reshaping" when the element
    /// count would change.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        let new_shape = Shape::new(rows, cols)?;
        if new_shape.numel() != self.numel() {
            return Err(Error::mismatched(self.shape, new_shape, "matrix reshaping"));
        }
        self.shape = new_shape;
        Ok(())
    }

    /// Keep only rows `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty range or one whose
    /// `end` exceeds the row count.
    pub fn slice_rows(&mut self, start: usize, end: usize) -> Result<()> {
        self.slice(start, end, 0, self.shape.cols)
    }

    /// Keep only columns `[start, end)`.
    pub fn slice_cols(&mut self, start: usize, end: usize) -> Result<()> {
        self.slice(0, self.shape.rows, start, end)
    }

    /// Keep only the sub-matrix `[row_start, row_end) × [col_start, col_end)`,
    /// re-indexed from (0, 0).
    pub fn slice(
        &mut self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<()> {
        check_range(row_start, row_end, self.shape.rows, "rows")?;
        check_range(col_start, col_end, self.shape.cols, "cols")?;

        let out_shape = Shape::raw(row_end - row_start, col_end - col_start);
        let mut data = Vec::with_capacity(out_shape.numel());
        for row in row_start..row_end {
            for col in col_start..col_end {
                data.push(self.at(row, col));
            }
        }
        self.shape = out_shape;
        self.data = data;
        Ok(())
    }
}
