use crate::error::{Error, Result};
use crate::linalg::dominant_eigenvector;
use crate::{Matrix, Vector};
use ndarray::Axis;
use tracing::debug;

/// Variance below this is treated as no variance at all.
const VARIANCE_TOLERANCE: f64 = 1e-12;

/// Dimensionality reduction onto the directions of greatest variance.
///
/// Components are extracted one at a time by power iteration on the population
/// covariance matrix; after each extraction the covariance is deflated by the
/// found component so the next iteration converges on the residual.
#[derive(Clone, Debug)]
pub struct PCA {
    n_components: usize,
    power_iterations: usize,
}

/// Result of one PCA run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcaFit {
    /// One unit-length direction per row, ordered by explained variance.
    pub components: Matrix,
    /// Eigenvalue estimate per component.
    pub explained_variance: Vec<f64>,
    /// Fraction of total variance per component, each in [0, 1].
    pub explained_variance_ratio: Vec<f64>,
    /// Per-feature mean subtracted before projection.
    pub mean: Vector,
    /// Input points projected onto the components, one column per component.
    pub transformed: Matrix,
}

impl PCA {
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            power_iterations: 50,
        }
    }

    /// Iteration budget for each power-iteration run. The default of 50 is
    /// comfortably past convergence at the data scales this crate targets.
    pub fn power_iterations(mut self, power_iterations: usize) -> Self {
        self.power_iterations = power_iterations;
        self
    }

    pub fn fit(&self, x: &Matrix) -> Result<PcaFit> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples == 0 {
            return Err(Error::degenerate("empty point set"));
        }
        if self.n_components == 0 {
            return Err(Error::invalid("n_components", "must be > 0, got 0"));
        }
        if self.n_components > n_features {
            return Err(Error::invalid(
                "n_components",
                format!(
                    "cannot exceed the {} input features, got {}",
                    n_features, self.n_components
                ),
            ));
        }

        let mean = x.mean_axis(Axis(0)).unwrap();
        let centered = x - &mean.view().insert_axis(Axis(0));

        // Population covariance: consistent with using trace(C) as the total
        // variance below.
        let mut cov = centered.t().dot(&centered) / n_samples as f64;
        let total_variance: f64 = cov.diag().sum();
        if total_variance < VARIANCE_TOLERANCE {
            return Err(Error::degenerate(
                "zero variance: all points are identical",
            ));
        }

        let mut components = Matrix::zeros((self.n_components, n_features));
        let mut explained_variance = Vec::with_capacity(self.n_components);
        let mut explained_variance_ratio = Vec::with_capacity(self.n_components);

        for component in 0..self.n_components {
            let direction = dominant_eigenvector(&cov, self.power_iterations).map_err(|_| {
                Error::degenerate(format!(
                    "no variance left for component {component}"
                ))
            })?;

            // Eigenvalue estimate for a unit direction; tiny negatives from
            // deflation round-off are clamped.
            let eigenvalue = direction.dot(&cov.dot(&direction)).max(0.0);
            debug!(component, eigenvalue, "extracted principal component");

            explained_variance.push(eigenvalue);
            explained_variance_ratio.push(eigenvalue / total_variance);
            components.row_mut(component).assign(&direction);

            // Deflate: remove this component's contribution before the next
            // extraction.
            let outer = direction
                .view()
                .insert_axis(Axis(1))
                .dot(&direction.view().insert_axis(Axis(0)));
            cov = cov - outer * eigenvalue;
        }

        let transformed = centered.dot(&components.t());

        Ok(PcaFit {
            components,
            explained_variance,
            explained_variance_ratio,
            mean,
            transformed,
        })
    }
}

impl PcaFit {
    /// Project further points onto the fitted components.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        if x.ncols() != self.mean.len() {
            return Err(Error::invalid(
                "x",
                format!(
                    "expected {} features to match the fit, got {}",
                    self.mean.len(),
                    x.ncols()
                ),
            ));
        }

        let centered = x - &self.mean.view().insert_axis(Axis(0));
        Ok(centered.dot(&self.components.t()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Correlated 2D cloud with dominant variance along (1, 1).
    fn diagonal_cloud() -> Matrix {
        array![
            [1.0, 1.1],
            [2.0, 1.9],
            [3.0, 3.2],
            [4.0, 3.8],
            [5.0, 5.1],
            [6.0, 6.2],
            [7.0, 6.8],
            [8.0, 8.1]
        ]
    }

    #[test]
    fn test_first_component_follows_the_spread() {
        let fit = PCA::new(1).fit(&diagonal_cloud()).unwrap();

        assert_eq!(fit.components.shape(), &[1, 2]);
        assert_eq!(fit.transformed.shape(), &[8, 1]);
        // Direction is (1, 1) / sqrt(2) up to sign.
        let c = fit.components.row(0);
        assert!((c[0].abs() - c[1].abs()).abs() < 0.05);
        // Nearly all variance lies on the diagonal.
        assert!(fit.explained_variance_ratio[0] > 0.99);
    }

    #[test]
    fn test_components_are_unit_norm() {
        let fit = PCA::new(2).fit(&diagonal_cloud()).unwrap();

        for row in fit.components.axis_iter(Axis(0)) {
            let norm = row.dot(&row).sqrt();
            assert!((norm - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_variance_ratios_sum_to_at_most_one() {
        let fit = PCA::new(2).fit(&diagonal_cloud()).unwrap();

        let total: f64 = fit.explained_variance_ratio.iter().sum();
        assert!(total <= 1.0 + 1e-9);
        for &ratio in &fit.explained_variance_ratio {
            assert!((0.0..=1.0 + 1e-9).contains(&ratio));
        }
        // Components come out in decreasing variance order.
        assert!(fit.explained_variance[0] >= fit.explained_variance[1]);
    }

    #[test]
    fn test_projection_matches_dot_product() {
        let x = diagonal_cloud();
        let fit = PCA::new(1).fit(&x).unwrap();

        let centered_first = array![
            x[[0, 0]] - fit.mean[0],
            x[[0, 1]] - fit.mean[1]
        ];
        let expected = centered_first.dot(&fit.components.row(0));
        assert!((fit.transformed[[0, 0]] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_transform_new_points() {
        let fit = PCA::new(1).fit(&diagonal_cloud()).unwrap();

        let projected = fit.transform(&array![[4.5, 4.5]]).unwrap();
        assert_eq!(projected.shape(), &[1, 1]);

        let mismatched = fit.transform(&array![[1.0, 2.0, 3.0]]);
        assert!(mismatched.is_err());
    }

    #[test]
    fn test_3d_reduction() {
        // z = 0.5x + 0.3y + 0.5 exactly: two components carry everything.
        let x = array![
            [1.0, 2.0, 1.6],
            [2.0, 1.0, 1.8],
            [3.0, 4.0, 3.2],
            [4.0, 3.0, 3.4],
            [5.0, 6.0, 4.8],
            [6.0, 5.0, 5.0]
        ];

        let fit = PCA::new(2).fit(&x).unwrap();

        assert_eq!(fit.components.shape(), &[2, 3]);
        assert_eq!(fit.transformed.shape(), &[6, 2]);
        let total: f64 = fit.explained_variance_ratio.iter().sum();
        assert!(total > 0.999);
    }

    #[test]
    fn test_identical_points_rejected() {
        let x = array![[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]];

        assert!(matches!(
            PCA::new(1).fit(&x),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_invalid_component_counts() {
        let x = diagonal_cloud();

        assert!(matches!(
            PCA::new(0).fit(&x),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            PCA::new(3).fit(&x),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let x = Matrix::zeros((0, 2));
        assert!(matches!(
            PCA::new(1).fit(&x),
            Err(Error::DegenerateInput(_))
        ));
    }
}
