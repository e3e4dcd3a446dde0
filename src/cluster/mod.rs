//! Clustering algorithms for unsupervised learning.
//!
//! - `KMeans`: partitional clustering around centroids
//! - `DBSCAN`: density-based clustering for arbitrary shaped clusters, with
//!   noise detection
//!
//! # Examples
//!
//! ## K-Means
//! ```rust
//! use ml_playground::KMeans;
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.5, 2.0],
//!     [1.2, 1.3],
//!     [8.0, 8.0],
//!     [8.5, 8.2],
//!     [8.1, 8.4]
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let fit = KMeans::new(2).max_iter(100).fit(&x, &mut rng).unwrap();
//!
//! println!("centroids: {:?}", fit.centroids);
//! println!("inertia: {:.4}, converged: {}", fit.inertia, fit.converged);
//! ```
//!
//! ## DBSCAN
//! ```rust
//! use ml_playground::DBSCAN;
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // outlier
//! ];
//!
//! let fit = DBSCAN::new(1.0, 2).fit(&x).unwrap();
//! println!("{} clusters, {} noise points", fit.n_clusters, fit.n_noise);
//! ```

mod dbscan;
mod kmeans;

pub use dbscan::{DBSCAN, DbscanFit, NOISE};
pub use kmeans::{KMeans, KMeansFit, KMeansStep};
