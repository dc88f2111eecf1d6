//! Sparse element-wise arithmetic: merge-based add/sub, scalar ops, dot
//! product, operators
//!
//! Addition and subtraction walk both coordinate sets in one sorted merge
//! pass, O(nnz_lhs + nnz_rhs). The union semantics matter: an entry present
//! in only one operand still appears in the result.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

/// Sorted two-pointer merge of two coordinate maps.
///
/// `combine` receives the left and right value at each coordinate of the
/// union (absent side = None); zero results are not materialized.
fn merge_union<T: Element>(
    lhs: &BTreeMap<(usize, usize), T>,
    rhs: &BTreeMap<(usize, usize), T>,
    combine: impl Fn(Option<T>, Option<T>) -> T,
) -> BTreeMap<(usize, usize), T> {
    let mut out = BTreeMap::new();
    let mut left = lhs.iter().peekable();
    let mut right = rhs.iter().peekable();

    loop {
        let (coord, value) = match (left.peek(), right.peek()) {
            (Some(&(&lc, &lv)), Some(&(&rc, &rv))) => match lc.cmp(&rc) {
                std::cmp::Ordering::Less => {
                    left.next();
                    (lc, combine(Some(lv), None))
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                    (rc, combine(None, Some(rv)))
                }
                std::cmp::Ordering::Equal => {
                    left.next();
                    right.next();
                    (lc, combine(Some(lv), Some(rv)))
                }
            },
            (Some(&(&lc, &lv)), None) => {
                left.next();
                (lc, combine(Some(lv), None))
            }
            (None, Some(&(&rc, &rv))) => {
                right.next();
                (rc, combine(None, Some(rv)))
            }
            (None, None) => break,
        };
        if !value.is_zero() {
            out.insert(coord, value);
        }
    }
    out
}

impl<T: Element> SparseMatrix<T> {
    /// In-place elementwise addition of another sparse matrix.
    ///
    /// One sorted merge over both coordinate sets; coordinates held by only
    /// one operand carry through unchanged, and entries that cancel to zero
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix addition" when the
    /// shapes differ.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::mismatched(self.shape, other.shape, "matrix addition"));
        }
        self.entries = merge_union(&self.entries, &other.entries, |l, r| {
            match (l, r) {
                (Some(l), Some(r)) => l + r,
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (None, None) => unreachable!(),
            }
        });
        Ok(())
    }

    /// In-place elementwise subtraction of another sparse matrix.
    ///
    /// Union merge like [`SparseMatrix::add_assign`]. Right-only entries are
    /// negated through `T::zero() - v`, so unsigned element types keep their
    /// usual underflow semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix subtraction" when the
    /// shapes differ.
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::mismatched(
                self.shape,
                other.shape,
                "matrix subtraction",
            ));
        }
        self.entries = merge_union(&self.entries, &other.entries, |l, r| {
            match (l, r) {
                (Some(l), Some(r)) => l - r,
                (Some(l), None) => l,
                (None, Some(r)) => T::zero() - r,
                (None, None) => unreachable!(),
            }
        });
        Ok(())
    }

    /// Multiply every stored value by `scalar` in place; results that become
    /// zero (e.g. scaling by 0) are dropped.
    pub fn scalar_mul(&mut self, scalar: T) {
        for v in self.entries.values_mut() {
            *v *= scalar;
        }
        self.entries.retain(|_, v| !v.is_zero());
    }

    /// Divide every stored value by `scalar` in place; zero results are
    /// dropped.
    pub fn scalar_div(&mut self, scalar: T) {
        for v in self.entries.values_mut() {
            *v /= scalar;
        }
        self.entries.retain(|_, v| !v.is_zero());
    }

    /// In-place dot product, replacing the receiver with the result.
    ///
    /// Requires `self.rows == other.rows` and `self.cols` to be either 1 or
    /// `other.cols`. A single-column receiver broadcasts each stored left
    /// entry against every right entry sharing its row, the result indexed by
    /// the right entry's coordinates; otherwise entries pair by identical
    /// coordinate (the elementwise product of two sparse operands is nonzero
    /// only where both are).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSize`] naming "matrix dot product"
    /// otherwise.
    pub fn dot_product(&mut self, other: &Self) -> Result<()> {
        if self.shape.rows != other.shape.rows
            || (self.shape.cols != 1 && self.shape.cols != other.shape.cols)
        {
            return Err(Error::mismatched(
                self.shape,
                other.shape,
                "matrix dot product",
            ));
        }

        let mut out = BTreeMap::new();
        if self.shape.cols == 1 && self.shape.cols != other.shape.cols {
            // Column broadcast: left[(r, 0)] scales the whole right row r.
            for (&(row, col), &rv) in &other.entries {
                if let Some(&lv) = self.entries.get(&(row, 0)) {
                    let v = lv * rv;
                    if !v.is_zero() {
                        out.insert((row, col), v);
                    }
                }
            }
        } else {
            for (coord, &lv) in &self.entries {
                if let Some(&rv) = other.entries.get(coord) {
                    let v = lv * rv;
                    if !v.is_zero() {
                        out.insert(*coord, v);
                    }
                }
            }
        }
        self.shape = other.shape;
        self.entries = out;
        Ok(())
    }
}

/// `&a + &b`: new sparse matrix. Panics on a shape mismatch; use
/// [`SparseMatrix::add_assign`] to handle the error instead.
impl<T: Element> Add for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn add(self, rhs: Self) -> SparseMatrix<T> {
        let mut out = self.clone();
        match out.add_assign(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a - &b`: new sparse matrix. Panics on a shape mismatch.
impl<T: Element> Sub for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn sub(self, rhs: Self) -> SparseMatrix<T> {
        let mut out = self.clone();
        match out.sub_assign(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a * &b`: cross product (matrix multiplication) into a new matrix.
/// Panics on an inner-dimension mismatch.
impl<T: Element> Mul for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: Self) -> SparseMatrix<T> {
        let mut out = self.clone();
        match out.cross_product(rhs) {
            Ok(()) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `&a * scalar`: new scaled matrix.
impl<T: Element> Mul<T> for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: T) -> SparseMatrix<T> {
        let mut out = self.clone();
        out.scalar_mul(rhs);
        out
    }
}
