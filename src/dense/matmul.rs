//! Dense matrix multiplication

use super::DenseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::Shape;

impl<T: Element> DenseMatrix<T> {
    /// In-place cross product (matrix multiplication): `self = self × other`.
    ///
    /// Requires `self.cols == other.rows`; the receiver takes shape
    /// `(self.rows, other.cols)`. Plain triple-loop accumulation over the
    /// shared dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix cross product" on an
    /// inner-dimension mismatch; the receiver is unchanged in that case.
    pub fn cross_product(&mut self, other: &Self) -> Result<()> {
        if self.shape.cols != other.shape.rows {
            return Err(Error::mismatched(
                self.shape,
                other.shape,
                "matrix cross product",
            ));
        }
        let out_shape = Shape::raw(self.shape.rows, other.shape.cols);
        let mut data = vec![T::zero(); out_shape.numel()];
        for row in 0..out_shape.rows {
            for k in 0..self.shape.cols {
                let lhs = self.at(row, k);
                for col in 0..out_shape.cols {
                    data[out_shape.linear(row, col)] += lhs * other.at(k, col);
                }
            }
        }
        self.shape = out_shape;
        self.data = data;
        Ok(())
    }
}
