//! Sparse 2-D convolution
//!
//! Only pairs of stored input and kernel entries can contribute, so the sweep
//! runs over `nnz(input) * nnz(kernel)` pairs instead of every output window.
//! For each pair, the output positions whose window aligns the two entries
//! are recovered from the stride arithmetic.

use super::SparseMatrix;
use crate::conv::output_shape;
use crate::element::Element;
use crate::error::Result;
use std::collections::BTreeMap;

impl<T: Element> SparseMatrix<T> {
    /// Convolve with `kernel`, returning a newly allocated matrix.
    ///
    /// Same geometry as the dense version: zero padding on every side,
    /// window step `stride`, direct correlation without a kernel flip.
    /// An input entry at `(ir, ic)` meets a kernel entry at `(kr, kc)` in
    /// the output cell `((ir + padding - kr) / stride, (ic + padding - kc) / stride)`
    /// when both offsets are nonnegative multiples of the stride.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`](crate::Error::MismatchedSize) naming
    /// "matrix convolution" when the kernel exceeds the padded input and
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a zero
    /// stride.
    pub fn convolve(&self, kernel: &Self, stride: usize, padding: usize) -> Result<Self> {
        let out_shape = output_shape(self.shape, kernel.shape, stride, padding)?;
        let mut out: BTreeMap<(usize, usize), T> = BTreeMap::new();

        for (&(in_row, in_col), &iv) in &self.entries {
            let (pad_row, pad_col) = (in_row + padding, in_col + padding);
            for (&(k_row, k_col), &kv) in &kernel.entries {
                if pad_row < k_row || pad_col < k_col {
                    continue;
                }
                let (off_row, off_col) = (pad_row - k_row, pad_col - k_col);
                if off_row % stride != 0 || off_col % stride != 0 {
                    continue;
                }
                let (out_row, out_col) = (off_row / stride, off_col / stride);
                if out_row >= out_shape.rows || out_col >= out_shape.cols {
                    continue;
                }
                let slot = out.entry((out_row, out_col)).or_insert_with(T::zero);
                *slot += iv * kv;
            }
        }
        out.retain(|_, v| !v.is_zero());

        Ok(Self {
            shape: out_shape,
            entries: out,
        })
    }
}
