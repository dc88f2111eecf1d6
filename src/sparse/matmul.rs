//! Sparse matrix multiplication
//!
//! Row-major ordering of the coordinate map lets the inner loop pull one
//! row of the right operand with a range scan instead of touching every
//! stored entry.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::shape::Shape;
use std::collections::BTreeMap;

impl<T: Element> SparseMatrix<T> {
    /// In-place matrix multiplication, replacing the receiver with
    /// `self * other`.
    ///
    /// For each stored left entry `(r, k) -> lv`, scans the right operand's
    /// row `k` and accumulates `lv * rv` into `(r, c)`. Work is proportional
    /// to the number of nonzero products, not to `rows * cols * inner`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix cross product" unless
    /// `self.cols == other.rows`.
    pub fn cross_product(&mut self, other: &Self) -> Result<()> {
        if self.shape.cols != other.shape.rows {
            return Err(Error::mismatched(
                self.shape,
                other.shape,
                "matrix cross product",
            ));
        }

        let mut out: BTreeMap<(usize, usize), T> = BTreeMap::new();
        for (&(lr, lc), &lv) in &self.entries {
            for (&(_, rc), &rv) in other.entries.range((lc, 0)..=(lc, usize::MAX)) {
                let slot = out.entry((lr, rc)).or_insert_with(T::zero);
                *slot += lv * rv;
            }
        }
        out.retain(|_, v| !v.is_zero());

        self.shape = Shape::raw(self.shape.rows, other.shape.cols);
        self.entries = out;
        Ok(())
    }
}
