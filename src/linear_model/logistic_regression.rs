use crate::error::{Error, Result};
use crate::{metrics, Matrix, Vector};

/// Binary classifier over two features, trained by batch gradient descent.
///
/// Model: `p = sigmoid(w0 + w1·x + w2·y)`. Weights start at zero and the
/// full-batch update runs for exactly `iterations` passes — no early stopping,
/// so training is deterministic for a given dataset.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    learning_rate: f64,
    iterations: usize,
}

/// Fitted classifier: bias and the two feature weights, plus training
/// accuracy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticFit {
    /// `[w0, w1, w2]`: the separating line is `w0 + w1·x + w2·y = 0`.
    pub weights: [f64; 3],
    /// Fraction of training points classified correctly, in [0, 1].
    pub accuracy: f64,
}

/// Classification of a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    pub class: u8,
    /// Probability of class 1.
    pub probability: f64,
}

impl LogisticRegression {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    /// Train on 2-feature points with 0/1 labels.
    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LogisticFit> {
        if self.learning_rate <= 0.0 {
            return Err(Error::invalid(
                "learning_rate",
                format!("must be > 0, got {}", self.learning_rate),
            ));
        }
        if self.iterations == 0 {
            return Err(Error::invalid("iterations", "must be > 0, got 0"));
        }
        if x.ncols() != 2 {
            return Err(Error::invalid(
                "x",
                format!("expected 2 feature columns, got {}", x.ncols()),
            ));
        }
        if x.nrows() != y.len() {
            return Err(Error::invalid(
                "y",
                format!(
                    "length {} does not match the {} input points",
                    y.len(),
                    x.nrows()
                ),
            ));
        }
        if x.nrows() == 0 {
            return Err(Error::degenerate("empty point set"));
        }
        for &label in y.iter() {
            if label != 0.0 && label != 1.0 {
                return Err(Error::invalid(
                    "y",
                    format!("labels must be 0 or 1, got {label}"),
                ));
            }
        }

        let n = x.nrows() as f64;
        let mut w = [0.0_f64; 3];

        for _ in 0..self.iterations {
            let mut gradient = [0.0_f64; 3];

            for (i, point) in x.rows().into_iter().enumerate() {
                let z = w[0] + w[1] * point[0] + w[2] * point[1];
                let error = sigmoid(z) - y[i];

                gradient[0] += error;
                gradient[1] += error * point[0];
                gradient[2] += error * point[1];
            }

            for (weight, g) in w.iter_mut().zip(gradient) {
                *weight -= self.learning_rate / n * g;
            }
        }

        let predicted: Vector = x
            .rows()
            .into_iter()
            .map(|point| {
                let z = w[0] + w[1] * point[0] + w[2] * point[1];
                if sigmoid(z) >= 0.5 { 1.0 } else { 0.0 }
            })
            .collect();
        let accuracy = metrics::accuracy_score(y, &predicted)?;

        Ok(LogisticFit {
            weights: w,
            accuracy,
        })
    }
}

impl LogisticFit {
    /// Classify a point; class 1 whenever the probability reaches 0.5.
    pub fn predict(&self, x: f64, y: f64) -> Prediction {
        let z = self.weights[0] + self.weights[1] * x + self.weights[2] * y;
        let probability = sigmoid(z);
        Prediction {
            class: if probability >= 0.5 { 1 } else { 0 },
            probability,
        }
    }

    /// The y-coordinate of the decision boundary at `x`, if the boundary is
    /// not vertical (`w2` too close to zero to divide by).
    pub fn decision_boundary_y(&self, x: f64) -> Option<f64> {
        let [w0, w1, w2] = self.weights;
        if w2.abs() < 1e-3 {
            return None;
        }
        Some(-(w0 + w1 * x) / w2)
    }
}

fn sigmoid(z: f64) -> f64 {
    // exp(-z) overflows past ~709; saturate well before that.
    if z > 500.0 {
        1.0
    } else if z < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}
