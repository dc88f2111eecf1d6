//! # matr
//!
//! **Dense and sparse matrix algebra behind a single operation contract.**
//!
//! matr provides two interchangeable matrix representations over a generic
//! numeric element type:
//!
//! - [`DenseMatrix`]: row-major contiguous storage; every cell is materialized.
//! - [`SparseMatrix`]: coordinate storage; only nonzero cells are materialized,
//!   kept in an ordered map keyed on `(row, col)`.
//!
//! Both implement the [`Matrix`] trait, which defines the full operation
//! surface: arithmetic (including cross-representation add/subtract),
//! scalar ops, matrix multiplication, transpose/reverse/reshape/slicing,
//! reductions, convolution, and square-matrix linear algebra (trace,
//! determinant, inverse, dominant eigenpair).
//!
//! Every size-sensitive operation validates shape compatibility *before*
//! mutating state and fails with a typed [`Error`] carrying both operands'
//! shapes and the operation's name. A failed operation never leaves a matrix
//! partially mutated.
//!
//! ## Quick Start
//!
//! ```
//! use matr::prelude::*;
//!
//! let mut a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let b = DenseMatrix::filled(2, 2, 1.0)?;
//!
//! a.add_matrix(&b)?;
//! assert_eq!(a.get(0, 0)?, 2.0);
//!
//! let s = SparseMatrix::from_rows(&[vec![0.0, 5.0], vec![0.0, 0.0]])?;
//! assert_eq!(s.nnz(), 1);
//! # Ok::<(), matr::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conv;
pub mod dense;
pub mod element;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod shape;
pub mod sparse;

pub use dense::DenseMatrix;
pub use element::Element;
pub use error::{Error, Result};
pub use linalg::PowerIteration;
pub use matrix::Matrix;
pub use shape::Shape;
pub use sparse::{SparseMatrix, Triple};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dense::DenseMatrix;
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::linalg::PowerIteration;
    pub use crate::matrix::Matrix;
    pub use crate::shape::Shape;
    pub use crate::sparse::{SparseMatrix, Triple};
}
