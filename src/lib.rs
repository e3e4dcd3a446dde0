//! Numeric core for an interactive statistical-learning playground.
//!
//! Five from-scratch algorithms over in-memory 2D/3D point sets:
//!
//! - [`DBSCAN`]: density-based clustering with noise detection
//! - [`KMeans`]: centroid clustering, runnable whole or one step at a time
//! - [`PCA`]: dimensionality reduction via power iteration
//! - [`PolynomialRegression`]: least squares through the normal equations
//! - [`LogisticRegression`]: binary classification via batch gradient descent
//!
//! Every `fit` consumes plain numeric arrays plus primitive hyperparameters and
//! returns a fresh, owned result struct; nothing is cached between invocations.
//! Randomness (K-Means initialization, the [`dataset`] generators) always comes
//! from a caller-supplied [`rand::Rng`], so runs are reproducible with a seeded
//! generator. Rendering, (de)serialization and parameter prompts belong to the
//! caller.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod linalg;
pub mod linear_model;
pub mod metrics;

pub use cluster::{DBSCAN, DbscanFit, KMeans, KMeansFit, KMeansStep};
pub use decomposition::{PCA, PcaFit};
pub use error::{Error, Result};
pub use linear_model::{
    LogisticFit, LogisticRegression, PolynomialFit, PolynomialRegression, Prediction,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
