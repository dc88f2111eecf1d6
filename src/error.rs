//! Error types for matr

use crate::shape::Shape;
use thiserror::Error;

/// Result type alias using matr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matr operations
///
/// Shape and validity checks always run before any mutation, so a returned
/// error guarantees the receiver was left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation
    #[error("Mismatched shapes {lhs} and {rhs} for {op}")]
    MismatchedSize {
        /// Left-hand (receiver) shape
        lhs: Shape,
        /// Right-hand (argument) shape
        rhs: Shape,
        /// The operation name
        op: &'static str,
    },

    /// A triple list used for sparse construction repeats a coordinate
    #[error("Duplicated triple at ({row}, {col})")]
    DuplicatedTriple {
        /// Row of the repeated coordinate
        row: usize,
        /// Column of the repeated coordinate
        col: usize,
    },

    /// A square-only operation was requested on a non-square matrix
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare {
        /// Shape of the offending matrix
        shape: Shape,
        /// The operation name
        op: &'static str,
    },

    /// The matrix is singular and cannot be inverted
    #[error("Matrix {shape} is singular and has no inverse")]
    NoInverse {
        /// Shape of the singular matrix
        shape: Shape,
    },

    /// A requested dimension is zero
    #[error("Invalid matrix size {rows}x{cols}: dimensions must be positive")]
    InvalidSize {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Indexed access outside the matrix bounds
    #[error("Index ({row}, {col}) out of bounds for matrix {shape}")]
    IndexOutOfBounds {
        /// The row index
        row: usize,
        /// The column index
        col: usize,
        /// Shape of the matrix
        shape: Shape,
    },

    /// Invalid argument provided to a constructor or operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a mismatched-size error
    pub fn mismatched(lhs: Shape, rhs: Shape, op: &'static str) -> Self {
        Self::MismatchedSize { lhs, rhs, op }
    }

    /// Create a not-square error
    pub fn not_square(shape: Shape, op: &'static str) -> Self {
        Self::NotSquare { shape, op }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(row: usize, col: usize, shape: Shape) -> Self {
        Self::IndexOutOfBounds { row, col, shape }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operation() {
        let err = Error::mismatched(Shape::raw(3, 2), Shape::raw(3, 2), "matrix cross product");
        assert_eq!(
            err.to_string(),
            "Mismatched shapes 3x2 and 3x2 for matrix cross product"
        );

        let err = Error::not_square(Shape::raw(2, 3), "matrix determinant");
        assert_eq!(
            err.to_string(),
            "matrix determinant requires a square matrix, got 2x3"
        );
    }

    #[test]
    fn test_invalid_size_message() {
        let err = Error::InvalidSize { rows: 0, cols: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid matrix size 0x4: dimensions must be positive"
        );
    }
}
