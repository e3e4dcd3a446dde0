//! Evaluation metrics shared by the regression and classification models.

use crate::error::{Error, Result};
use crate::Vector;

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).mean().unwrap_or(0.0);
    Ok(mse)
}

/// Coefficient of determination, `1 - SS_res / SS_tot` with `SS_tot` taken
/// around the sample mean of `y_true`. Zero total variance counts as a perfect
/// prediction.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    if y_true.is_empty() {
        return Err(Error::degenerate("empty point set"));
    }

    let y_mean = y_true.mean().unwrap();
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of predictions matching the true labels, in [0, 1].
pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    if y_true.is_empty() {
        return Err(Error::degenerate("empty point set"));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, pred)| (*truth - *pred).abs() < 1e-10)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::invalid(
            "y_pred",
            format!(
                "length {} does not match y_true length {}",
                y_pred.len(),
                y_true.len()
            ),
        ));
    }
    Ok(())
}
