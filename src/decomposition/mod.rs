//! Dimensionality reduction.
//!
//! - `PCA`: principal component analysis via power iteration with deflation
//!
//! # Example
//!
//! ```rust
//! use ml_playground::PCA;
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.1],
//!     [2.0, 1.9],
//!     [3.0, 3.2],
//!     [4.0, 3.8],
//!     [5.0, 5.1]
//! ];
//!
//! let fit = PCA::new(1).fit(&x).unwrap();
//! println!("direction: {:?}", fit.components.row(0));
//! println!("variance explained: {:.1}%", fit.explained_variance_ratio[0] * 100.0);
//! ```

mod pca;

pub use pca::{PCA, PcaFit};
