//! Dense matrix: row-major contiguous storage
//!
//! Split by concern: `core` holds the struct and construction, with
//! arithmetic, multiplication, reductions, shape surgery, convolution, and
//! square-matrix linear algebra in sibling modules. The [`Matrix`] impl at
//! the bottom wires the inherent operations into the shared contract.

mod arithmetic;
mod conv;
mod core;
mod linalg;
mod matmul;
mod reduce;
mod shape_ops;

pub use self::core::DenseMatrix;

use crate::element::Element;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::shape::Shape;

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    fn shape(&self) -> Shape {
        self.shape()
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.get(row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.set(row, col, value)
    }

    fn scalar_mul(&mut self, scalar: T) {
        self.scalar_mul(scalar);
    }

    fn scalar_div(&mut self, scalar: T) {
        self.scalar_div(scalar);
    }

    fn dot_product(&mut self, other: &Self) -> Result<()> {
        self.dot_product(other)
    }

    fn cross_product(&mut self, other: &Self) -> Result<()> {
        self.cross_product(other)
    }

    fn transpose(&mut self) {
        self.transpose();
    }

    fn reverse(&mut self) {
        self.reverse();
    }

    fn inverse(&mut self) -> Result<()> {
        self.inverse()
    }

    fn max(&self) -> T {
        self.max()
    }

    fn min(&self) -> T {
        self.min()
    }

    fn sum(&self) -> T {
        self.sum()
    }

    fn row_max(&self, row: usize) -> Result<T> {
        self.row_max(row)
    }

    fn row_min(&self, row: usize) -> Result<T> {
        self.row_min(row)
    }

    fn row_sum(&self, row: usize) -> Result<T> {
        self.row_sum(row)
    }

    fn col_max(&self, col: usize) -> Result<T> {
        self.col_max(col)
    }

    fn col_min(&self, col: usize) -> Result<T> {
        self.col_min(col)
    }

    fn col_sum(&self, col: usize) -> Result<T> {
        self.col_sum(col)
    }

    fn eigenvector(&self) -> Result<Self> {
        self.eigenvector()
    }

    fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.reshape(rows, cols)
    }

    fn slice_rows(&mut self, start: usize, end: usize) -> Result<()> {
        self.slice_rows(start, end)
    }

    fn slice_cols(&mut self, start: usize, end: usize) -> Result<()> {
        self.slice_cols(start, end)
    }

    fn slice(
        &mut self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<()> {
        self.slice(row_start, row_end, col_start, col_end)
    }

    fn convolve(&self, kernel: &Self, stride: usize, padding: usize) -> Result<Self> {
        self.convolve(kernel, stride, padding)
    }
}
