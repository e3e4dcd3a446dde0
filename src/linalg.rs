//! Small shared linear-algebra toolbox: the Euclidean distance primitive used
//! by both clustering algorithms, a pivoted Gaussian-elimination solver for the
//! normal equations, and power iteration for extracting a dominant eigenvector.
//!
//! Matrix products go through `ndarray::dot`; only the pieces `ndarray` does not
//! ship are implemented here.

use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::ArrayView1;

/// Pivots with magnitude below this are treated as zero (singular system).
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Euclidean distance between two points of equal dimensionality.
pub fn euclidean_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Solve the linear system `A x = b` by Gaussian elimination with partial
/// pivoting and back-substitution.
///
/// At each elimination step the row with the largest absolute value in the
/// pivot column is swapped into position; a pivot that is still zero within
/// tolerance means the system is singular and the solve fails rather than
/// producing NaN coefficients.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Vector> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(Error::invalid(
            "a",
            format!("expected a square matrix, got {}x{}", a.nrows(), a.ncols()),
        ));
    }
    if b.len() != n {
        return Err(Error::invalid(
            "b",
            format!("length {} does not match matrix size {}", b.len(), n),
        ));
    }

    // Augmented [A | b], eliminated in place.
    let mut aug = Matrix::zeros((n, n + 1));
    aug.slice_mut(ndarray::s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if aug[[row, col]].abs() > aug[[pivot_row, col]].abs() {
                pivot_row = row;
            }
        }
        if aug[[pivot_row, col]].abs() < PIVOT_TOLERANCE {
            return Err(Error::degenerate(format!(
                "singular system: zero pivot in column {col}"
            )));
        }
        if pivot_row != col {
            for j in col..=n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[pivot_row, j]];
                aug[[pivot_row, j]] = tmp;
            }
        }

        for row in col + 1..n {
            let factor = aug[[row, col]] / aug[[col, col]];
            for j in col..=n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut value = aug[[i, n]];
        for j in i + 1..n {
            value -= aug[[i, j]] * x[j];
        }
        x[i] = value / aug[[i, i]];
    }

    Ok(x)
}

/// Approximate the eigenvector of the largest eigenvalue of a symmetric matrix
/// by power iteration.
///
/// Starts from an all-ones seed and renormalizes to unit length after every
/// multiply, for a fixed iteration budget. Converges to the dominant
/// eigenvector whenever the top eigenvalue is strictly larger than the second.
/// A vanishing iterate (the matrix has no remaining variance to align with)
/// fails instead of dividing by a zero norm.
pub fn dominant_eigenvector(matrix: &Matrix, iterations: usize) -> Result<Vector> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(Error::invalid(
            "matrix",
            format!(
                "expected a square matrix, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            ),
        ));
    }

    let mut v = Vector::ones(n);
    let norm = v.dot(&v).sqrt();
    v /= norm;

    for _ in 0..iterations {
        let next = matrix.dot(&v);
        let norm = next.dot(&next).sqrt();
        if norm < PIVOT_TOLERANCE {
            return Err(Error::degenerate(
                "matrix has no dominant direction (zero iterate in power iteration)",
            ));
        }
        v = next / norm;
    }

    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_distance_2d_and_3d() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert!((euclidean_distance(a.view(), b.view()) - 5.0).abs() < 1e-12);

        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0, 3.0];
        assert_eq!(euclidean_distance(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_solve_known_system() {
        // 2x + y = 5, x + 3y = 10 -> x = 1, y = 3
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![5.0, 10.0];

        let x = solve(&a, &b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // Leading zero forces a row swap before elimination can proceed.
        let a = array![[0.0, 1.0, 1.0], [2.0, 1.0, 0.0], [1.0, 0.0, 2.0]];
        let b = array![3.0, 4.0, 5.0];

        let x = solve(&a, &b).unwrap();
        let check = a.dot(&x);
        for (lhs, rhs) in check.iter().zip(b.iter()) {
            assert!((lhs - rhs).abs() < 1e-10);
        }
    }

    #[test]
    fn test_solve_singular_system() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![3.0, 6.0];

        assert!(matches!(solve(&a, &b), Err(Error::DegenerateInput(_))));
    }

    #[test]
    fn test_solve_rejects_non_square() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0, 2.0];

        assert!(matches!(
            solve(&a, &b),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_dominant_eigenvector_diagonal() {
        // Largest eigenvalue 4 belongs to the second axis.
        let m = array![[1.0, 0.0], [0.0, 4.0]];

        let v = dominant_eigenvector(&m, 50).unwrap();
        assert!(v[0].abs() < 1e-6);
        assert!((v[1].abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dominant_eigenvector_is_unit_norm() {
        let m = array![[2.0, 1.0], [1.0, 2.0]];

        let v = dominant_eigenvector(&m, 50).unwrap();
        assert!((v.dot(&v).sqrt() - 1.0).abs() < 1e-6);
        // Dominant eigenvector of this matrix is (1, 1) / sqrt(2).
        assert!((v[0].abs() - v[1].abs()).abs() < 1e-6);
    }

    #[test]
    fn test_dominant_eigenvector_zero_matrix() {
        let m = Matrix::zeros((3, 3));
        assert!(matches!(
            dominant_eigenvector(&m, 30),
            Err(Error::DegenerateInput(_))
        ));
    }
}
