//! The `Matrix` trait: the operation contract both representations implement
//!
//! Cross-representation arithmetic (`add_matrix`, `sub_matrix`) is generic over
//! any other implementor and reads the other side only through its public
//! accessors, so a sparse matrix can be added to a dense one and vice versa.
//! Representation-specific fast paths (dense buffer arithmetic, sparse
//! coordinate merging) live as inherent methods on the concrete types.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::linalg::{self, PowerIteration};
use crate::shape::Shape;

/// Operation contract shared by [`DenseMatrix`](crate::DenseMatrix) and
/// [`SparseMatrix`](crate::SparseMatrix).
///
/// In-place operations (`add_matrix`, `scalar_mul`, `transpose`, `reshape`, …)
/// mutate the receiver; operations that derive a new matrix (`convolve`,
/// `eigenvector`, the `std::ops` combinators) return an owned value. Every
/// size-sensitive operation validates shapes before touching any state.
pub trait Matrix<T: Element>: Sized + Clone {
    /// Returns the shape of the matrix.
    fn shape(&self) -> Shape;

    /// Number of rows.
    #[inline]
    fn rows(&self) -> usize {
        self.shape().rows
    }

    /// Number of columns.
    #[inline]
    fn cols(&self) -> usize {
        self.shape().cols
    }

    /// Total number of elements (`rows * cols`).
    #[inline]
    fn numel(&self) -> usize {
        self.shape().numel()
    }

    /// Value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside the shape.
    fn get(&self, row: usize, col: usize) -> Result<T>;

    /// Store `value` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside the shape.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    /// In-place elementwise addition against any matrix representation.
    ///
    /// Reads `other` through its accessors only, so the two operands may use
    /// different storage. Concrete types provide faster same-representation
    /// paths (`DenseMatrix::add_assign`, `SparseMatrix::add_assign`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix addition" when the
    /// shapes differ; the receiver is not modified in that case.
    fn add_matrix<M: Matrix<T>>(&mut self, other: &M) -> Result<()> {
        let (lhs, rhs) = (self.shape(), other.shape());
        if lhs != rhs {
            return Err(Error::mismatched(lhs, rhs, "matrix addition"));
        }
        for row in 0..lhs.rows {
            for col in 0..lhs.cols {
                let v = self.get(row, col)? + other.get(row, col)?;
                self.set(row, col, v)?;
            }
        }
        Ok(())
    }

    /// In-place elementwise subtraction against any matrix representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix subtraction" when the
    /// shapes differ.
    fn sub_matrix<M: Matrix<T>>(&mut self, other: &M) -> Result<()> {
        let (lhs, rhs) = (self.shape(), other.shape());
        if lhs != rhs {
            return Err(Error::mismatched(lhs, rhs, "matrix subtraction"));
        }
        for row in 0..lhs.rows {
            for col in 0..lhs.cols {
                let v = self.get(row, col)? - other.get(row, col)?;
                self.set(row, col, v)?;
            }
        }
        Ok(())
    }

    /// Multiply every element by `scalar` in place.
    fn scalar_mul(&mut self, scalar: T);

    /// Divide every element by `scalar` in place.
    ///
    /// Division by zero is the element type's business: floats produce
    /// infinities or NaN, integers panic as they do everywhere else.
    fn scalar_div(&mut self, scalar: T);

    /// In-place dot product, replacing the receiver with the result.
    ///
    /// This is NOT the conventional inner product. Two cases are defined:
    /// matching shapes combine elementwise, and a single-column receiver whose
    /// row count matches `other`'s broadcasts its column across `other`
    /// (`out[i][j] = self[i][0] * other[i][j]`, the receiver taking `other`'s
    /// shape). The broadcast rule is kept deliberately; renaming or "fixing"
    /// it would change the contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix dot product" when
    /// neither case applies.
    fn dot_product(&mut self, other: &Self) -> Result<()>;

    /// In-place matrix multiplication (`self = self × other`).
    ///
    /// Requires `self.cols == other.rows`; the receiver takes shape
    /// `(self.rows, other.cols)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix cross product" on an
    /// inner-dimension mismatch.
    fn cross_product(&mut self, other: &Self) -> Result<()>;

    /// Transpose in place, swapping the shape's rows and columns.
    fn transpose(&mut self);

    /// Reverse the element order in place (a 180-degree flip of both axes).
    fn reverse(&mut self);

    /// Conjugate in place. The element types this crate supports are real,
    /// so this is the identity; it is part of the contract surface.
    fn conjugate(&mut self) {}

    /// Replace the receiver with its inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] for a non-square receiver and
    /// [`Error::NoInverse`] for a singular one; the receiver is unchanged on
    /// either failure.
    fn inverse(&mut self) -> Result<()>;

    /// Maximum element value.
    fn max(&self) -> T;

    /// Minimum element value.
    fn min(&self) -> T;

    /// Sum of all elements.
    fn sum(&self) -> T;

    /// Mean of all elements (rounding to the nearest value for integer element types).
    fn mean(&self) -> T {
        T::from_f64(self.sum().to_f64() / self.numel() as f64)
    }

    /// Maximum value in `row`.
    fn row_max(&self, row: usize) -> Result<T>;

    /// Minimum value in `row`.
    fn row_min(&self, row: usize) -> Result<T>;

    /// Sum of the values in `row`.
    fn row_sum(&self, row: usize) -> Result<T>;

    /// Mean of the values in `row` (rounding to the nearest value for integer element types).
    fn row_mean(&self, row: usize) -> Result<T> {
        Ok(T::from_f64(
            self.row_sum(row)?.to_f64() / self.cols() as f64,
        ))
    }

    /// Maximum value in `col`.
    fn col_max(&self, col: usize) -> Result<T>;

    /// Minimum value in `col`.
    fn col_min(&self, col: usize) -> Result<T>;

    /// Sum of the values in `col`.
    fn col_sum(&self, col: usize) -> Result<T>;

    /// Mean of the values in `col` (rounding to the nearest value for integer element types).
    fn col_mean(&self, col: usize) -> Result<T> {
        Ok(T::from_f64(
            self.col_sum(col)?.to_f64() / self.rows() as f64,
        ))
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] naming "matrix trace" for a non-square
    /// receiver.
    fn trace(&self) -> Result<T> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(Error::not_square(shape, "matrix trace"));
        }
        let mut acc = T::zero();
        for i in 0..shape.rows {
            acc += self.get(i, i)?;
        }
        Ok(acc)
    }

    /// Determinant via LU decomposition with partial pivoting, computed on an
    /// f64 scratch copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] naming "matrix determinant" for a
    /// non-square receiver.
    fn determinant(&self) -> Result<T> {
        let scratch = linalg::square_scratch(self, "matrix determinant")?;
        Ok(T::from_f64(linalg::lu_determinant(scratch, self.rows())))
    }

    /// Dominant eigenvalue via power iteration with the default
    /// [`PowerIteration`] configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] naming "matrix eigenvalue" for a
    /// non-square receiver.
    fn eigenvalue(&self) -> Result<T> {
        let scratch = linalg::square_scratch(self, "matrix eigenvalue")?;
        let (value, _) = linalg::power_iteration(&scratch, self.rows(), &PowerIteration::default());
        Ok(T::from_f64(value))
    }

    /// Dominant eigenvector (as a single-column matrix) via power iteration
    /// with the default [`PowerIteration`] configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] naming "matrix eigenvector" for a
    /// non-square receiver.
    fn eigenvector(&self) -> Result<Self>;

    /// Change the shape to `(rows, cols)`, preserving row-major element order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix reshaping" when the
    /// new shape has a different element count, and [`Error::InvalidSize`]
    /// when either dimension is zero.
    fn reshape(&mut self, rows: usize, cols: usize) -> Result<()>;

    /// Keep only rows in the half-open range `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the range is empty or `end`
    /// exceeds the row count.
    fn slice_rows(&mut self, start: usize, end: usize) -> Result<()>;

    /// Keep only columns in the half-open range `[start, end)`.
    fn slice_cols(&mut self, start: usize, end: usize) -> Result<()>;

    /// Keep only the sub-matrix covered by `[row_start, row_end)` ×
    /// `[col_start, col_end)`, re-indexing from (0, 0).
    fn slice(
        &mut self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<()>;

    /// Convolve with `kernel`, returning a newly allocated matrix owned by
    /// the caller.
    ///
    /// The input is zero-padded by `padding` on every side and the kernel
    /// slides with step `stride`; each output cell is the sum of elementwise
    /// products over the aligned window (direct correlation, no kernel flip).
    /// Output dimensions follow
    /// `(input + 2 * padding - kernel) / stride + 1` per axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix convolution" when the
    /// kernel exceeds the padded input in either axis, and
    /// [`Error::InvalidArgument`] for a zero stride.
    fn convolve(&self, kernel: &Self, stride: usize, padding: usize) -> Result<Self>;

    /// Replace the receiver with its `n`-th power (repeated cross product).
    /// `exponent(0)` yields the identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] naming "matrix exponent" for a non-square
    /// receiver.
    fn exponent(&mut self, n: u32) -> Result<()> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(Error::not_square(shape, "matrix exponent"));
        }
        if n == 0 {
            for row in 0..shape.rows {
                for col in 0..shape.cols {
                    let v = if row == col { T::one() } else { T::zero() };
                    self.set(row, col, v)?;
                }
            }
            return Ok(());
        }
        let base = self.clone();
        for _ in 1..n {
            self.cross_product(&base)?;
        }
        Ok(())
    }
}
