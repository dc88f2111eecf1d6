//! Integration tests for shape operations on both representations
//!
//! Tests verify:
//! - Transpose is an involution and both representations agree
//! - Reverse performs a 180-degree flip
//! - Reshape preserves the element count and rejects everything else
//! - Slicing is half-open, re-indexed from the origin, and bounds-checked
//! - Exponentiation of square matrices through the shared contract

use matr::prelude::*;

fn dense_i64(rows: &[Vec<i64>]) -> DenseMatrix<i64> {
    DenseMatrix::from_rows(rows).unwrap()
}

fn sparse_i64(rows: &[Vec<i64>]) -> SparseMatrix<i64> {
    SparseMatrix::from_rows(rows).unwrap()
}

fn agree(dense: &DenseMatrix<i64>, sparse: &SparseMatrix<i64>) {
    assert_eq!(Matrix::shape(dense), Matrix::shape(sparse));
    for row in 0..dense.rows() {
        for col in 0..dense.cols() {
            assert_eq!(
                dense.get(row, col).unwrap(),
                sparse.get(row, col).unwrap(),
                "disagreement at ({row}, {col})"
            );
        }
    }
}

// ============================================================================
// Transpose
// ============================================================================

#[test]
fn test_transpose_is_an_involution() {
    let rows = [vec![1, 2, 3], vec![4, 5, 6]];
    let original_dense = dense_i64(&rows);
    let original_sparse = sparse_i64(&rows);

    let mut dense = original_dense.clone();
    let mut sparse = original_sparse.clone();
    dense.transpose();
    sparse.transpose();
    assert_eq!(dense.shape(), Shape::new(3, 2).unwrap());
    agree(&dense, &sparse);

    dense.transpose();
    sparse.transpose();
    assert_eq!(dense, original_dense);
    assert_eq!(sparse, original_sparse);
}

// ============================================================================
// Reverse
// ============================================================================

#[test]
fn test_reverse_flips_both_axes() {
    let rows = [vec![1, 2], vec![3, 4], vec![5, 6]];
    let mut dense = dense_i64(&rows);
    let mut sparse = sparse_i64(&rows);
    dense.reverse();
    sparse.reverse();
    assert_eq!(dense.data(), &[6, 5, 4, 3, 2, 1]);
    agree(&dense, &sparse);
}

#[test]
fn test_reverse_twice_is_identity() {
    let original = dense_i64(&[vec![1, 2], vec![3, 4]]);
    let mut m = original.clone();
    m.reverse();
    m.reverse();
    assert_eq!(m, original);
}

// ============================================================================
// Reshape
// ============================================================================

#[test]
fn test_reshape_4x4_to_2x8() {
    let values: Vec<i64> = (1..=16).collect();
    let mut dense = DenseMatrix::from_slice(4, 4, &values).unwrap();
    let mut sparse = SparseMatrix::from_slice(4, 4, &values).unwrap();

    dense.reshape(2, 8).unwrap();
    sparse.reshape(2, 8).unwrap();
    assert_eq!(dense.shape(), Shape::new(2, 8).unwrap());
    assert_eq!(dense.get(1, 0).unwrap(), 9);
    agree(&dense, &sparse);
}

#[test]
fn test_reshape_rejects_different_element_counts() {
    let mut m = dense_i64(&[vec![1, 2], vec![3, 4]]);
    let err = m.reshape(3, 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Mismatched shapes 2x2 and 3x5 for matrix reshaping"
    );
    assert_eq!(m.shape(), Shape::new(2, 2).unwrap());
}

#[test]
fn test_reshape_rejects_zero_dimensions() {
    let mut m = sparse_i64(&[vec![1, 2]]);
    assert!(matches!(
        m.reshape(0, 2),
        Err(Error::InvalidSize { rows: 0, cols: 2 })
    ));
}

// ============================================================================
// Slicing
// ============================================================================

#[test]
fn test_slice_is_half_open_and_reindexed() {
    let rows = [vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
    let mut dense = dense_i64(&rows);
    let mut sparse = sparse_i64(&rows);

    dense.slice(1, 3, 1, 4).unwrap();
    sparse.slice(1, 3, 1, 4).unwrap();
    assert_eq!(dense.shape(), Shape::new(2, 3).unwrap());
    assert_eq!(dense.get(0, 0).unwrap(), 6);
    agree(&dense, &sparse);
}

#[test]
fn test_slice_rows_then_cols() {
    let mut m = dense_i64(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    m.slice_rows(1, 3).unwrap();
    m.slice_cols(0, 2).unwrap();
    assert_eq!(m.data(), &[4, 5, 7, 8]);
}

#[test]
fn test_empty_range_rejected() {
    let mut m = dense_i64(&[vec![1, 2], vec![3, 4]]);
    let err = m.slice_rows(1, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "rows", .. }));
}

#[test]
fn test_slice_end_past_extent_rejected() {
    let mut m = sparse_i64(&[vec![1, 2], vec![3, 4]]);
    let err = m.slice_cols(0, 3).unwrap_err();
    // names the sliced axis, not a cell coordinate
    assert_eq!(
        err,
        Error::invalid_argument("cols", "slice range 0..3 exceeds extent 2")
    );

    let mut d = dense_i64(&[vec![1, 2], vec![3, 4]]);
    assert!(matches!(
        d.slice_rows(0, 5),
        Err(Error::InvalidArgument { arg: "rows", .. })
    ));
}

// ============================================================================
// Exponentiation
// ============================================================================

#[test]
fn test_exponent_zero_is_identity() {
    let mut m = dense_i64(&[vec![3, 1], vec![2, 5]]);
    m.exponent(0).unwrap();
    assert_eq!(m.data(), &[1, 0, 0, 1]);
}

#[test]
fn test_exponent_squares() {
    let mut m = dense_i64(&[vec![1, 1], vec![0, 1]]);
    m.exponent(3).unwrap();
    // upper-triangular shear: nth power accumulates n in the corner
    assert_eq!(m.data(), &[1, 3, 0, 1]);
}

#[test]
fn test_exponent_requires_square() {
    let mut m = dense_i64(&[vec![1, 2, 3], vec![4, 5, 6]]);
    let err = m.exponent(2).unwrap_err();
    assert_eq!(err, Error::not_square(Shape::new(2, 3).unwrap(), "matrix exponent"));
}

#[test]
fn test_sparse_exponent_matches_dense() {
    let rows = [vec![2, 0], vec![1, 3]];
    let mut dense = dense_i64(&rows);
    let mut sparse = sparse_i64(&rows);
    dense.exponent(2).unwrap();
    sparse.exponent(2).unwrap();
    agree(&dense, &sparse);
}
