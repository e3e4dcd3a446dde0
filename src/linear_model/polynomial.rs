use crate::error::{Error, Result};
use crate::{linalg, metrics, Matrix, Vector};

/// Least-squares polynomial fit of one feature against a target.
///
/// Degree 1 is ordinary linear regression; higher degrees fit
/// `y = a0 + a1·x + ... + an·xⁿ`. The normal equations `XᵀX a = Xᵀy` are
/// formed explicitly and solved by pivoted Gaussian elimination — partial
/// pivoting keeps the solve stable at degree 3 and above on typical input
/// ranges.
#[derive(Clone, Debug)]
pub struct PolynomialRegression {
    degree: usize,
}

/// Fitted polynomial: `degree + 1` coefficients, constant term first.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialFit {
    pub coefficients: Vector,
    /// Coefficient of determination on the training points.
    pub r2: f64,
}

impl PolynomialRegression {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    pub fn fit(&self, x: &Vector, y: &Vector) -> Result<PolynomialFit> {
        if self.degree == 0 {
            return Err(Error::invalid("degree", "must be >= 1, got 0"));
        }
        if x.len() != y.len() {
            return Err(Error::invalid(
                "y",
                format!("length {} does not match x length {}", y.len(), x.len()),
            ));
        }
        if x.is_empty() {
            return Err(Error::degenerate("empty point set"));
        }

        // degree + 1 coefficients need at least that many distinct x-values.
        let mut sorted: Vec<f64> = x.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted.dedup();
        if sorted.len() <= self.degree {
            return Err(Error::invalid(
                "degree",
                format!(
                    "degree {} needs more than {} distinct x-values",
                    self.degree,
                    sorted.len()
                ),
            ));
        }

        let design = self.design_matrix(x);
        let xtx = design.t().dot(&design);
        let xty = design.t().dot(y);

        // A zero pivot here means the system is rank-deficient; solve()
        // reports that instead of returning NaN coefficients.
        let coefficients = linalg::solve(&xtx, &xty)?;

        let predictions = x.mapv(|xi| evaluate(&coefficients, xi));
        let r2 = metrics::r2_score(y, &predictions)?;

        Ok(PolynomialFit { coefficients, r2 })
    }

    /// Vandermonde matrix: row i is `[1, xᵢ, xᵢ², ..., xᵢ^degree]`.
    fn design_matrix(&self, x: &Vector) -> Matrix {
        let mut design = Matrix::ones((x.len(), self.degree + 1));
        for (i, &xi) in x.iter().enumerate() {
            let mut power = 1.0;
            for j in 1..=self.degree {
                power *= xi;
                design[[i, j]] = power;
            }
        }
        design
    }
}

impl PolynomialFit {
    /// Evaluate the fitted polynomial at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        evaluate(&self.coefficients, x)
    }
}

fn evaluate(coefficients: &Vector, x: f64) -> f64 {
    // Horner form, constant term last.
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}
