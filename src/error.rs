//! Error types shared by every algorithm in the crate.
//!
//! Two failure kinds cover the whole surface: a hyperparameter outside its
//! allowed domain ([`Error::InvalidParameter`]) and input data the algorithm is
//! mathematically undefined on ([`Error::DegenerateInput`]). K-Means hitting its
//! iteration cap is *not* an error — the best-effort result is still usable, so
//! it is reported as `converged: false` on [`crate::KMeansFit`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hyperparameter is outside its allowed domain (eps <= 0, k = 0,
    /// k larger than the sample count, degree too high for the data, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The input data makes the computation undefined: empty point set,
    /// zero-variance data for PCA, a singular normal-equation system.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Error::DegenerateInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = Error::invalid("eps", "must be > 0, got -1");
        assert_eq!(err.to_string(), "invalid parameter `eps`: must be > 0, got -1");

        let err = Error::degenerate("empty point set");
        assert_eq!(err.to_string(), "degenerate input: empty point set");
    }
}
