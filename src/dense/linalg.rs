//! Dense square-matrix linear algebra: inverse and the dominant eigenpair
//!
//! Determinant and trace come from the `Matrix` trait defaults; both run on
//! the same f64 scratch kernels in `crate::linalg`.

use super::DenseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::linalg::{self, PowerIteration};
use crate::shape::Shape;

impl<T: Element> DenseMatrix<T> {
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
        for (dst, src) in self.data.iter_mut().zip(inv.iter()) {
            *dst = T::from_f64(*src);
        }
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
        let data: Vec<T> = vector.iter().map(|x| T::from_f64(*x)).collect();
        Ok((
            T::from_f64(value),
            Self {
                shape: Shape::raw(self.shape.rows, 1),
                data,
            },
        ))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_inverse_roundtrip() {
        let original = DenseMatrix::<f64>::from_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
        let mut inv = original.clone();
        inv.inverse().unwrap();
        let product = &original * &inv;
        for row in 0..2 {
            for col in 0..2 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((product.get(row, col).unwrap() - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let mut m = DenseMatrix::from_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
        let err = m.inverse().unwrap_err();
        assert_eq!(err, Error::NoInverse { shape: m.shape() });
        // untouched on failure
        assert_eq!(m.data(), &[1.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_inverse_not_square() {
        let mut m = DenseMatrix::<f64>::new(2, 3).unwrap();
        assert_eq!(
            m.inverse().unwrap_err(),
            Error::not_square(m.shape(), "matrix inverse")
        );
    }

    #[test]
    fn test_dominant_eigenpair() {
        // [[2, 1], [1, 2]]: dominant eigenvalue 3, eigenvector along (1, 1)
        let m = DenseMatrix::<f64>::from_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]).unwrap();
        let (value, vector) = m.eigen_with(&PowerIteration::default()).unwrap();
        assert!((value - 3.0).abs() < 1e-6);
        assert_eq!(vector.shape(), Shape::raw(2, 1));
        let (a, b) = (vector.get(0, 0).unwrap(), vector.get(1, 0).unwrap());
        assert!((a.abs() - b.abs()).abs() < 1e-5);
    }
}
