//! Shape type: row and column extent of a matrix

use crate::error::{Error, Result};
use std::fmt;

/// Row and column extent of a matrix.
///
/// Both dimensions must be positive; [`Shape::new`] enforces this at
/// construction so every live matrix satisfies `rows * cols == numel() > 0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// Create a shape, validating that both dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidSize { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Create a shape without validation.
    ///
    /// Used where the dimensions are already known to be positive
    /// (e.g. error reporting on an existing matrix).
    pub(crate) fn raw(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of elements (`rows * cols`).
    #[inline]
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the shape is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The shape with rows and columns swapped.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Whether `(row, col)` lies inside this shape.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major linear index of `(row, col)`.
    #[inline]
    pub(crate) fn linear(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Validates a half-open slice range against a dimension extent.
///
/// `axis` is "rows" or "cols" and names the dimension in the error.
pub(crate) fn check_range(
    start: usize,
    end: usize,
    extent: usize,
    axis: &'static str,
) -> Result<()> {
    if start >= end {
        return Err(Error::invalid_argument(
            axis,
            format!("empty slice range {}..{}", start, end),
        ));
    }
    if end > extent {
        return Err(Error::invalid_argument(
            axis,
            format!("slice range {}..{} exceeds extent {}", start, end, extent),
        ));
    }
    Ok(())
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({}x{})", self.rows, self.cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}
