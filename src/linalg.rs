//! Shared linear-algebra kernels on f64 scratch buffers
//!
//! Determinant, inversion, and the dominant eigenpair are solved on a flat
//! row-major `Vec<f64>` copy of the matrix regardless of representation or
//! element type; callers densify through the `Matrix` accessors and convert
//! the result back through `Element::from_f64`. The matrices these kernels
//! see are small and dense, so plain O(n^3) algorithms are the right tool.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::shape::Shape;
use rand::Rng;

/// Pivot magnitude below which a matrix is treated as singular
pub(crate) const SINGULARITY_TOL: f64 = 1e-12;

/// Convergence configuration for [`power_iteration`]
///
/// Power iteration is numerically approximate; the tolerance bounds the
/// eigenvalue change between successive iterations and the cap bounds the
/// work. If the cap is reached first, the current estimate is returned.
#[derive(Debug, Clone, Copy)]
pub struct PowerIteration {
    /// Stop once the eigenvalue estimate changes by less than this
    pub tolerance: f64,
    /// Hard cap on iterations
    pub max_iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
        }
    }
}

impl PowerIteration {
    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Densify a square matrix into a row-major f64 scratch buffer.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] naming `op` for a non-square matrix.
pub(crate) fn square_scratch<T, M>(matrix: &M, op: &'static str) -> Result<Vec<f64>>
where
    T: Element,
    M: Matrix<T>,
{
    let shape = matrix.shape();
    if !shape.is_square() {
        return Err(Error::not_square(shape, op));
    }
    let n = shape.rows;
    let mut buf = vec![0.0f64; n * n];
    for row in 0..n {
        for col in 0..n {
            buf[row * n + col] = matrix.get(row, col)?.to_f64();
        }
    }
    Ok(buf)
}

/// Determinant of an `n x n` row-major buffer via LU decomposition with
/// partial pivoting. The sign flips with every row swap.
pub(crate) fn lu_determinant(mut a: Vec<f64>, n: usize) -> f64 {
    let mut det = 1.0f64;
    for k in 0..n {
        // Select the largest pivot in column k
        let mut pivot_row = k;
        let mut pivot_mag = a[k * n + k].abs();
        for row in (k + 1)..n {
            let mag = a[row * n + k].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        if pivot_mag < SINGULARITY_TOL {
            return 0.0;
        }
        if pivot_row != k {
            for col in 0..n {
                a.swap(k * n + col, pivot_row * n + col);
            }
            det = -det;
        }
        let pivot = a[k * n + k];
        det *= pivot;
        for row in (k + 1)..n {
            let factor = a[row * n + k] / pivot;
            for col in k..n {
                a[row * n + col] -= factor * a[k * n + col];
            }
        }
    }
    det
}

/// Invert an `n x n` row-major buffer via Gauss-Jordan elimination with
/// partial pivoting.
///
/// # Errors
///
/// Returns [`Error::NoInverse`] carrying `shape` when a pivot falls below
/// [`SINGULARITY_TOL`].
pub(crate) fn gauss_jordan_inverse(mut a: Vec<f64>, n: usize, shape: Shape) -> Result<Vec<f64>> {
    // Augment with the identity; eliminate to reduced row echelon form
    let mut inv = vec![0.0f64; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_mag = a[k * n + k].abs();
        for row in (k + 1)..n {
            let mag = a[row * n + k].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        if pivot_mag < SINGULARITY_TOL {
            return Err(Error::NoInverse { shape });
        }
        if pivot_row != k {
            for col in 0..n {
                a.swap(k * n + col, pivot_row * n + col);
                inv.swap(k * n + col, pivot_row * n + col);
            }
        }
        let pivot = a[k * n + k];
        for col in 0..n {
            a[k * n + col] /= pivot;
            inv[k * n + col] /= pivot;
        }
        for row in 0..n {
            if row == k {
                continue;
            }
            let factor = a[row * n + k];
            if factor == 0.0 {
                continue;
            }
            for col in 0..n {
                a[row * n + col] -= factor * a[k * n + col];
                inv[row * n + col] -= factor * inv[k * n + col];
            }
        }
    }
    Ok(inv)
}

/// Dominant eigenpair of an `n x n` row-major buffer via power iteration.
///
/// Starts from a random unit vector and iterates `v <- A v / |A v|` until the
/// Rayleigh-quotient estimate moves by less than `cfg.tolerance` or the cap is
/// reached. Returns `(eigenvalue, eigenvector)`; the eigenvector has unit
/// Euclidean norm.
pub(crate) fn power_iteration(a: &[f64], n: usize, cfg: &PowerIteration) -> (f64, Vec<f64>) {
    let mut rng = rand::rng();
    let mut v: Vec<f64> = (0..n).map(|_| rng.random::<f64>() + 0.1).collect();
    normalize(&mut v);

    let mut lambda = 0.0f64;
    for _ in 0..cfg.max_iterations {
        let mut av = vec![0.0f64; n];
        for row in 0..n {
            let mut acc = 0.0;
            for col in 0..n {
                acc += a[row * n + col] * v[col];
            }
            av[row] = acc;
        }

        // Rayleigh quotient with the normalized v: lambda = v . Av
        let next: f64 = v.iter().zip(av.iter()).map(|(x, y)| x * y).sum();
        let norm = normalize(&mut av);
        if norm < SINGULARITY_TOL {
            // A v vanished; the dominant eigenvalue along this start is 0
            return (0.0, v);
        }
        v = av;
        if (next - lambda).abs() < cfg.tolerance {
            return (next, v);
        }
        lambda = next;
    }
    (lambda, v)
}

fn normalize(v: &mut [f64]) -> f64 {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
    norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lu_determinant_2x2() {
        // det [[1, 2], [3, 4]] = -2
        let det = lu_determinant(vec![1.0, 2.0, 3.0, 4.0], 2);
        assert!((det - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_lu_determinant_singular() {
        let det = lu_determinant(vec![1.0, 2.0, 2.0, 4.0], 2);
        assert_eq!(det, 0.0);
    }

    #[test]
    fn test_gauss_jordan_roundtrip() {
        let shape = Shape::raw(2, 2);
        let a = vec![4.0, 7.0, 2.0, 6.0];
        let inv = gauss_jordan_inverse(a.clone(), 2, shape).unwrap();
        // a * inv = I
        for row in 0..2 {
            for col in 0..2 {
                let mut acc = 0.0;
                for k in 0..2 {
                    acc += a[row * 2 + k] * inv[k * 2 + col];
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((acc - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_gauss_jordan_singular() {
        let shape = Shape::raw(2, 2);
        let result = gauss_jordan_inverse(vec![1.0, 2.0, 2.0, 4.0], 2, shape);
        assert_eq!(result, Err(Error::NoInverse { shape }));
    }

    #[test]
    fn test_power_iteration_symmetric() {
        // [[2, 1], [1, 2]] has eigenvalues 3 and 1
        let a = vec![2.0, 1.0, 1.0, 2.0];
        let (lambda, v) = power_iteration(&a, 2, &PowerIteration::default());
        assert!((lambda - 3.0).abs() < 1e-6);
        // Eigenvector is parallel to (1, 1) up to sign
        assert!((v[0].abs() - v[1].abs()).abs() < 1e-5);
    }

    #[test]
    fn test_power_iteration_respects_cap() {
        let a = vec![2.0, 1.0, 1.0, 2.0];
        let cfg = PowerIteration::default()
            .with_tolerance(0.0)
            .with_max_iterations(5);
        let (lambda, _) = power_iteration(&a, 2, &cfg);
        // Five iterations already land close to 3, and the cap must not hang
        assert!((lambda - 3.0).abs() < 0.5);
    }
}
