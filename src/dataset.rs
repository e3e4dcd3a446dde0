//! Synthetic point-set generators for driving the algorithms interactively.
//!
//! Every generator takes the caller's `Rng`, so a seeded generator reproduces
//! the same dataset run after run. Shapes mirror what the playground draws:
//! round and elongated clusters with scattered noise for the clustering demos,
//! a correlated 3D cloud for PCA, noisy polynomial samples for regression and
//! two labeled bands for classification.

use crate::{Matrix, Vector};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

/// `n` points uniformly spread over a disc.
pub fn disc_cluster<R: Rng + ?Sized>(
    rng: &mut R,
    center: [f64; 2],
    radius: f64,
    n: usize,
) -> Matrix {
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let r = rng.gen_range(0.0..radius);
        rows.push([center[0] + r * angle.cos(), center[1] + r * angle.sin()]);
    }
    Matrix::from(rows)
}

/// `n` points jittered around the segment from `origin` to `origin + span`,
/// producing an elongated cluster.
pub fn segment_cluster<R: Rng + ?Sized>(
    rng: &mut R,
    origin: [f64; 2],
    span: [f64; 2],
    jitter: f64,
    n: usize,
) -> Matrix {
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let t = rng.gen_range(0.0..1.0);
        rows.push([
            origin[0] + t * span[0] + rng.gen_range(-jitter..jitter),
            origin[1] + t * span[1] + rng.gen_range(-jitter..jitter),
        ]);
    }
    Matrix::from(rows)
}

/// `n` points scattered uniformly over `[0, x_max) x [0, y_max)`.
pub fn uniform_noise<R: Rng + ?Sized>(rng: &mut R, n: usize, x_max: f64, y_max: f64) -> Matrix {
    let mut points = Matrix::random_using((n, 2), Uniform::new(0.0, 1.0), rng);
    points.column_mut(0).mapv_inplace(|v| v * x_max);
    points.column_mut(1).mapv_inplace(|v| v * y_max);
    points
}

/// A 3D cloud whose y and z are noisy linear mixes of x, so most of its
/// variance lies along a single direction.
pub fn correlated_3d<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Matrix {
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.gen_range(0.0..100.0);
        let y = 0.8 * x + rng.gen_range(-10.0..10.0);
        let z = 0.5 * x + 0.3 * y + rng.gen_range(-7.5..7.5);
        rows.push([x, y, z]);
    }
    Matrix::from(rows)
}

/// `n` samples of the polynomial with the given coefficients (constant term
/// first) over `[0, x_max)`, with uniform noise of the given half-width added
/// to y.
pub fn polynomial_points<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    coefficients: &[f64],
    x_max: f64,
    noise: f64,
) -> (Vector, Vector) {
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.gen_range(0.0..x_max);
        let y = coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c);
        let y = if noise > 0.0 {
            y + rng.gen_range(-noise..noise)
        } else {
            y
        };
        xs.push(x);
        ys.push(y);
    }
    (Vector::from(xs), Vector::from(ys))
}

/// Two bands of `n_per_class` points each: class 0 along `y = 0.5x`, class 1
/// shifted up by 30, both with x in `[10, 60)` and ±7.5 vertical noise.
/// Returns the points and their 0/1 labels.
pub fn binary_classes<R: Rng + ?Sized>(rng: &mut R, n_per_class: usize) -> (Matrix, Vector) {
    let mut rows = Vec::with_capacity(2 * n_per_class);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for class in 0..2 {
        for _ in 0..n_per_class {
            let x = rng.gen_range(10.0..60.0);
            let y = 0.5 * x + 30.0 * class as f64 + rng.gen_range(-7.5..7.5);
            rows.push([x, y]);
            labels.push(class as f64);
        }
    }
    (Matrix::from(rows), Vector::from(labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::euclidean_distance;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_disc_cluster_stays_in_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = array![25.0, 25.0];

        let points = disc_cluster(&mut rng, [25.0, 25.0], 8.0, 30);

        assert_eq!(points.shape(), &[30, 2]);
        for row in points.rows() {
            assert!(euclidean_distance(row, center.view()) < 8.0);
        }
    }

    #[test]
    fn test_segment_cluster_stays_near_segment() {
        let mut rng = StdRng::seed_from_u64(2);

        let points = segment_cluster(&mut rng, [50.0, 50.0], [30.0, 20.0], 2.0, 25);

        assert_eq!(points.shape(), &[25, 2]);
        for row in points.rows() {
            assert!(row[0] >= 48.0 && row[0] < 82.0);
            assert!(row[1] >= 48.0 && row[1] < 72.0);
        }
    }

    #[test]
    fn test_uniform_noise_range() {
        let mut rng = StdRng::seed_from_u64(3);

        let points = uniform_noise(&mut rng, 50, 100.0, 80.0);

        assert_eq!(points.shape(), &[50, 2]);
        for row in points.rows() {
            assert!((0.0..100.0).contains(&row[0]));
            assert!((0.0..80.0).contains(&row[1]));
        }
    }

    #[test]
    fn test_correlated_3d_is_correlated() {
        let mut rng = StdRng::seed_from_u64(4);

        let points = correlated_3d(&mut rng, 100);

        assert_eq!(points.shape(), &[100, 3]);
        // y tracks 0.8x within the noise band.
        for row in points.rows() {
            assert!((row[1] - 0.8 * row[0]).abs() <= 10.0);
        }
    }

    #[test]
    fn test_polynomial_points_without_noise_lie_on_curve() {
        let mut rng = StdRng::seed_from_u64(5);

        let (xs, ys) = polynomial_points(&mut rng, 20, &[5.0, -2.0, 0.5], 10.0, 0.0);

        assert_eq!(xs.len(), 20);
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let expected = 0.5 * x * x - 2.0 * x + 5.0;
            assert!((y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_binary_classes_shape_and_labels() {
        let mut rng = StdRng::seed_from_u64(6);

        let (points, labels) = binary_classes(&mut rng, 30);

        assert_eq!(points.shape(), &[60, 2]);
        assert_eq!(labels.len(), 60);
        assert!(labels.iter().take(30).all(|&l| l == 0.0));
        assert!(labels.iter().skip(30).all(|&l| l == 1.0));
    }

    #[test]
    fn test_same_seed_same_data() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);

        let first = correlated_3d(&mut a, 10);
        let second = correlated_3d(&mut b, 10);

        assert_eq!(first, second);
    }
}
