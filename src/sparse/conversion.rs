//! Conversion between the sparse and dense representations

use super::SparseMatrix;
use crate::dense::DenseMatrix;
use crate::element::Element;
use std::collections::BTreeMap;

impl<T: Element> SparseMatrix<T> {
    /// Materialize into a dense matrix, implicit zeros included.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::zero(); self.shape.numel()];
        for (&(row, col), &v) in &self.entries {
            data[self.shape.linear(row, col)] = v;
        }
        DenseMatrix {
            shape: self.shape,
            data,
        }
    }

    /// Build a sparse matrix from a dense one, storing only its nonzero
    /// values.
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let shape = dense.shape();
        let mut entries = BTreeMap::new();
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let v = dense.at(row, col);
                if !v.is_zero() {
                    entries.insert((row, col), v);
                }
            }
        }
        Self { shape, entries }
    }
}

impl<T: Element> From<&DenseMatrix<T>> for SparseMatrix<T> {
    fn from(dense: &DenseMatrix<T>) -> Self {
        Self::from_dense(dense)
    }
}

impl<T: Element> From<&SparseMatrix<T>> for DenseMatrix<T> {
    fn from(sparse: &SparseMatrix<T>) -> Self {
        sparse.to_dense()
    }
}
