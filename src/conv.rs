//! Shared convolution geometry
//!
//! Validation and output-size arithmetic used by both representations, kept
//! in one place so dense and sparse convolution agree exactly on shapes and
//! failure modes.

use crate::error::{Error, Result};
use crate::shape::Shape;

/// Computes the output extent for a single convolution axis.
///
/// `output = (input + 2 * padding - kernel) / stride + 1` (flooring),
/// or 0 when the kernel exceeds the padded input.
#[inline]
pub fn output_size(input: usize, kernel: usize, stride: usize, padding: usize) -> usize {
    let padded = input + 2 * padding;
    if padded < kernel {
        0
    } else {
        (padded - kernel) / stride + 1
    }
}

/// Validates convolution parameters and returns the output shape.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a zero stride and
/// [`Error::MismatchedSize`] naming "matrix convolution" when the kernel
/// exceeds the padded input in either axis.
pub(crate) fn output_shape(
    input: Shape,
    kernel: Shape,
    stride: usize,
    padding: usize,
) -> Result<Shape> {
    if stride == 0 {
        return Err(Error::invalid_argument(
            "stride",
            "matrix convolution requires stride > 0, got 0",
        ));
    }
    if kernel.rows > input.rows + 2 * padding || kernel.cols > input.cols + 2 * padding {
        return Err(Error::mismatched(input, kernel, "matrix convolution"));
    }
    let rows = output_size(input.rows, kernel.rows, stride, padding);
    let cols = output_size(input.cols, kernel.cols, stride, padding);
    Shape::new(rows, cols)
}
