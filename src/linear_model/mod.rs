//! Linear models for regression and classification.
//!
//! - `PolynomialRegression`: least squares through the normal equations;
//!   degree 1 is ordinary linear regression
//! - `LogisticRegression`: binary classification over two features by batch
//!   gradient descent
//!
//! # Examples
//!
//! ## Polynomial regression
//! ```rust
//! use ml_playground::PolynomialRegression;
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0, 4.0];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let fit = PolynomialRegression::new(1).fit(&x, &y).unwrap();
//! println!("y = {:.2} + {:.2}x, R² = {:.4}", fit.coefficients[0], fit.coefficients[1], fit.r2);
//! println!("prediction at x = 5: {:.2}", fit.predict(5.0));
//! ```
//!
//! ## Logistic regression
//! ```rust
//! use ml_playground::LogisticRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [2.0, 2.0], [8.0, 8.0], [9.0, 9.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let fit = LogisticRegression::new(0.1, 500).fit(&x, &y).unwrap();
//! let prediction = fit.predict(1.5, 1.5);
//! println!("class {} at probability {:.3}", prediction.class, prediction.probability);
//! ```

mod logistic_regression;
mod polynomial;

pub use logistic_regression::{LogisticFit, LogisticRegression, Prediction};
pub use polynomial::{PolynomialFit, PolynomialRegression};
