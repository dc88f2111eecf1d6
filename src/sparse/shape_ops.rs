//! Sparse shape operations: transpose, reverse, reshape, slicing
//!
//! All of these rewrite coordinates only; values are never touched, and
//! the coordinate map is rebuilt in one pass over the stored entries.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::{check_range, Shape};
use std::collections::BTreeMap;

impl<T: Element> SparseMatrix<T> {
    /// Transpose in place by swapping every entry's coordinates.
    pub fn transpose(&mut self) {
        let mut out = BTreeMap::new();
        for (&(row, col), &v) in &self.entries {
            out.insert((col, row), v);
        }
        self.shape = self.shape.transposed();
        self.entries = out;
    }

    /// Reverse the element order in place (180-degree flip of both axes):
    /// entry `(r, c)` moves to `(rows-1-r, cols-1-c)`.
    pub fn reverse(&mut self) {
        let mut out = BTreeMap::new();
        for (&(row, col), &v) in &self.entries {
            out.insert((self.shape.rows - 1 - row, self.shape.cols - 1 - col), v);
        }
        self.entries = out;
    }

    /// Change the shape to `(rows, cols)`, remapping each entry through its
    /// row-major linear index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for zero dimensions and
    /// [`Error::MismatchedSize`] naming "matrix reshaping" when the element
    /// count would change.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        let new_shape = Shape::new(rows, cols)?;
        if new_shape.numel() != self.shape.numel() {
            return Err(Error::mismatched(self.shape, new_shape, "matrix reshaping"));
        }
        let mut out = BTreeMap::new();
        for (&(row, col), &v) in &self.entries {
            let lin = self.shape.linear(row, col);
            out.insert((lin / cols, lin % cols), v);
        }
        self.shape = new_shape;
        self.entries = out;
        Ok(())
    }

    /// Keep only rows `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty range or one whose
    /// `end` exceeds the row count.
    pub fn slice_rows(&mut self, start: usize, end: usize) -> Result<()> {
        let cols = self.shape.cols;
        self.slice(start, end, 0, cols)
    }

    /// Keep only columns `[start, end)`.
    pub fn slice_cols(&mut self, start: usize, end: usize) -> Result<()> {
        let rows = self.shape.rows;
        self.slice(0, rows, start, end)
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

        let mut out = BTreeMap::new();
        for (&(row, col), &v) in self.entries.range((row_start, 0)..(row_end, 0)) {
            if col >= col_start && col < col_end {
                out.insert((row - row_start, col - col_start), v);
            }
        }
        self.shape = Shape::raw(row_end - row_start, col_end - col_start);
        self.entries = out;
        Ok(())
    }
}
