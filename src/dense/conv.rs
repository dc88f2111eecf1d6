//! Dense 2-D convolution

use super::DenseMatrix;
use crate::conv::output_shape;
use crate::element::Element;
use crate::error::Result;

impl<T: Element> DenseMatrix<T> {
    /// Convolve with `kernel`, returning a newly allocated matrix.
    ///
    /// The input is zero-padded by `padding` on every side, the kernel slides
    /// with step `stride`, and each output cell is the sum of elementwise
    /// products over the aligned window (direct correlation, no kernel flip).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`](crate::Error::MismatchedSize) naming
    /// "matrix convolution" when the kernel exceeds the padded input and
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a zero
    /// stride.
    pub fn convolve(&self, kernel: &Self, stride: usize, padding: usize) -> Result<Self> {
        let out_shape = output_shape(self.shape, kernel.shape, stride, padding)?;
        let mut data = vec![T::zero(); out_shape.numel()];

        for out_row in 0..out_shape.rows {
            for out_col in 0..out_shape.cols {
                let mut acc = T::zero();
                for k_row in 0..kernel.shape.rows {
                    for k_col in 0..kernel.shape.cols {
                        // Window position in padded coordinates; cells that
                        // fall in the padding contribute zero.
                        let in_row = out_row * stride + k_row;
                        let in_col = out_col * stride + k_col;
                        if in_row < padding || in_col < padding {
                            continue;
                        }
                        let (in_row, in_col) = (in_row - padding, in_col - padding);
                        if in_row >= self.shape.rows || in_col >= self.shape.cols {
                            continue;
                        }
                        acc += self.at(in_row, in_col) * kernel.at(k_row, k_col);
                    }
                }
                data[out_shape.linear(out_row, out_col)] = acc;
            }
        }

        Ok(Self {
            shape: out_shape,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_convolve_identity_kernel() {
        let input = DenseMatrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        let kernel = DenseMatrix::from_slice(1, 1, &[1]).unwrap();
        let out = input.convolve(&kernel, 1, 0).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_convolve_padding_grows_output() {
        let input = DenseMatrix::from_slice(2, 2, &[1, 1, 1, 1]).unwrap();
        let kernel = DenseMatrix::from_slice(2, 2, &[1, 1, 1, 1]).unwrap();
        let out = input.convolve(&kernel, 1, 1).unwrap();
        assert_eq!(out.shape(), Shape::raw(3, 3));
        // Center window covers all four ones
        assert_eq!(out.get(1, 1).unwrap(), 4);
        // Corner window covers exactly one
        assert_eq!(out.get(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_convolve_stride() {
        let input = DenseMatrix::filled(4, 4, 1).unwrap();
        let kernel = DenseMatrix::filled(2, 2, 1).unwrap();
        let out = input.convolve(&kernel, 2, 0).unwrap();
        assert_eq!(out.shape(), Shape::raw(2, 2));
        assert_eq!(out.data(), &[4, 4, 4, 4]);
    }

    #[test]
    fn test_convolve_kernel_too_large() {
        let input = DenseMatrix::filled(2, 2, 1).unwrap();
        let kernel = DenseMatrix::filled(3, 3, 1).unwrap();
        assert!(input.convolve(&kernel, 1, 0).is_err());
    }
}
