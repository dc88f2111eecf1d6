//! Dense element-wise arithmetic: add, sub, scalar ops, dot product, operators

use super::DenseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use std::ops::{Add, Mul, Sub};

impl<T: Element> DenseMatrix<T> {
    /// In-place elementwise addition of another dense matrix.
    ///
    /// Same contract as [`Matrix::add_matrix`](crate::Matrix::add_matrix) but
    /// combines the two buffers directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix addition" when the
    /// shapes differ.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::mismatched(self.shape, other.shape, "matrix addition"));
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += *b;
        }
        Ok(())
    }

    /// In-place elementwise subtraction of another dense matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix subtraction" when the
    /// shapes differ.
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::mismatched(
                self.shape,
                other.shape,
                "matrix subtraction",
            ));
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= *b;
        }
        Ok(())
    }

    /// Multiply every element by `scalar` in place.
    pub fn scalar_mul(&mut self, scalar: T) {
        for v in self.data.iter_mut() {
            *v *= scalar;
        }
    }

    /// Divide every element by `scalar` in place.
    pub fn scalar_div(&mut self, scalar: T) {
        for v in self.data.iter_mut() {
            *v /= scalar;
        }
    }

    /// In-place dot product, replacing the receiver with the result.
    ///
    /// Matching shapes combine elementwise. A single-column receiver whose
    /// row count equals `other`'s broadcasts its column across `other`:
    /// `out[i][j] = self[i][0] * other[i][j]`, and the receiver takes
    /// `other`'s shape. This broadcast rule is part of the contract; see
    /// [`Matrix::dot_product`](crate::Matrix::dot_product).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix dot product" when
    /// neither case applies.
    pub fn dot_product(&mut self, other: &Self) -> Result<()> {
        if self.shape == other.shape {
            for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
                *a *= *b;
            }
            return Ok(());
        }
        if self.shape.cols == 1 && self.shape.rows == other.shape.rows {
            let mut data = Vec::with_capacity(other.numel());
            for row in 0..other.shape.rows {
                let factor = self.at(row, 0);
                for col in 0..other.shape.cols {
                    data.push(factor * other.at(row, col));
                }
            }
            self.shape = other.shape;
            self.data = data;
            return Ok(());
        }
        Err(Error::mismatched(
            self.shape,
            other.shape,
            "matrix dot product",
        ))
    }
}

/// `&a + &b`: new dense matrix. Panics on a shape mismatch; use
/// [`DenseMatrix::add_assign`] to handle the error instead.
impl<T: Element> Add for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> DenseMatrix<T> {
        let mut out = self.clone();
        match out.add_assign(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a - &b`: new dense matrix. Panics on a shape mismatch.
impl<T: Element> Sub for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: Self) -> DenseMatrix<T> {
        let mut out = self.clone();
        match out.sub_assign(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a * &b`: cross product (matrix multiplication) into a new matrix.
/// Panics on an inner-dimension mismatch.
impl<T: Element> Mul for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: Self) -> DenseMatrix<T> {
        let mut out = self.clone();
        match out.cross_product(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a * scalar`: new scaled matrix.
impl<T: Element> Mul<T> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: T) -> DenseMatrix<T> {
        let mut out = self.clone();
        out.scalar_mul(rhs);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: usize, cols: usize, data: &[i64]) -> DenseMatrix<i64> {
        DenseMatrix::from_slice(rows, cols, data).unwrap()
    }

    #[test]
    fn test_add_assign() {
        let mut a = m(2, 2, &[1, 2, 3, 4]);
        a.add_assign(&m(2, 2, &[10, 20, 30, 40])).unwrap();
        assert_eq!(a.data(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_add_shape_mismatch_leaves_receiver_untouched() {
        let mut a = m(2, 2, &[1, 2, 3, 4]);
        let err = a.add_assign(&m(1, 2, &[1, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::mismatched(a.shape(), crate::Shape::raw(1, 2), "matrix addition")
        );
        assert_eq!(a.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_dot_product_elementwise() {
        let mut a = m(2, 2, &[1, 2, 3, 4]);
        a.dot_product(&m(2, 2, &[2, 2, 2, 2])).unwrap();
        assert_eq!(a.data(), &[2, 4, 6, 8]);
    }

    #[test]
    fn test_dot_product_column_broadcast() {
        // (3x1) . (3x2): each left value scales its row of the right operand
        let mut a = m(3, 1, &[1, 2, 3]);
        a.dot_product(&m(3, 2, &[1, 2, 3, 4, 5, 6])).unwrap();
        assert_eq!(a.shape(), crate::Shape::raw(3, 2));
        assert_eq!(a.data(), &[1, 2, 6, 8, 15, 18]);
    }

    #[test]
    fn test_dot_product_mismatch() {
        let mut a = m(2, 2, &[1, 2, 3, 4]);
        let err = a.dot_product(&m(3, 2, &[1, 2, 3, 4, 5, 6])).unwrap_err();
        assert!(matches!(
            err,
            Error::MismatchedSize {
                op: "matrix dot product",
                ..
            }
        ));
    }

    #[test]
    fn test_operators_produce_new_instances() {
        let a = m(2, 2, &[1, 2, 3, 4]);
        let b = m(2, 2, &[4, 3, 2, 1]);
        assert_eq!((&a + &b).data(), &[5, 5, 5, 5]);
        assert_eq!((&a - &b).data(), &[-3, -1, 1, 3]);
        assert_eq!((&a * 2).data(), &[2, 4, 6, 8]);
        // operands unchanged
        assert_eq!(a.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_scalar_roundtrip() {
        let mut a = DenseMatrix::from_slice(2, 2, &[1.5f64, -2.0, 0.25, 8.0]).unwrap();
        let original = a.clone();
        a.scalar_mul(2.0);
        a.scalar_div(2.0);
        assert_eq!(a, original);
    }
}
