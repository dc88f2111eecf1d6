//! Sparse square-matrix linear algebra: inverse and the dominant eigenpair
//!
//! The inverse of a sparse matrix is generally dense; both operations densify
//! into the shared f64 scratch kernels and rebuild the coordinate map from
//! the result, dropping anything that comes back zero.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::linalg::{self, PowerIteration};
use crate::shape::Shape;
use std::collections::BTreeMap;

impl<T: Element> SparseMatrix<T> {
    fn from_scratch(shape: Shape, buf: &[f64]) -> Self {
        let mut entries = BTreeMap::new();
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let v = T::from_f64(buf[shape.linear(row, col)]);
                if !v.is_zero() {
                    entries.insert((row, col), v);
                }
            }
        }
        Self { shape, entries }
    }

    /// Replace the receiver with its inverse (Gauss-Jordan elimination on an
    /// f64 scratch copy; the result converts back through the element type).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`](crate::Error::NotSquare) for a non-square
    /// receiver and [`Error::NoInverse`](crate::Error::NoInverse) for a
    /// singular one; the receiver is unchanged on either failure.
    pub fn inverse(&mut self) -> Result<()> {
        let scratch = linalg::square_scratch(self, "matrix inverse")?;
        let inv = linalg::gauss_jordan_inverse(scratch, self.shape.rows, self.shape)?;
        *self = Self::from_scratch(self.shape, &inv);
        Ok(())
    }

    /// Dominant eigenpair `(eigenvalue, eigenvector)` via power iteration
    /// with an explicit convergence configuration. The eigenvector comes back
    /// as a single-column matrix with unit Euclidean norm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`](crate::Error::NotSquare) for a non-square
    /// receiver.
    pub fn eigen_with(&self, cfg: &PowerIteration) -> Result<(T, Self)> {
        let scratch = linalg::square_scratch(self, "matrix eigenvalue")?;
        let (value, vector) = linalg::power_iteration(&scratch, self.shape.rows, cfg);
        let column = Self::from_scratch(Shape::raw(self.shape.rows, 1), &vector);
        Ok((T::from_f64(value), column))
    }

    /// Dominant eigenvector with the default [`PowerIteration`] configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`](crate::Error::NotSquare) naming
    /// "matrix eigenvector" for a non-square receiver.
    pub fn eigenvector(&self) -> Result<Self> {
        if !self.shape.is_square() {
            return Err(Error::not_square(self.shape, "matrix eigenvector"));
        }
        Ok(self.eigen_with(&PowerIteration::default())?.1)
    }
}
