//! Error types for Ganita

use thiserror::Error;

/// Ganita error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A call parameter is malformed (empty input, bad cluster count, ...).
    #[error("Invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        arg: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// Empty-cluster recovery found no cluster able to donate a point.
    #[error("Convergence failure: {0}")]
    ConvergenceFailure(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_argument("k", "must be positive");
        assert_eq!(err.to_string(), "Invalid argument `k`: must be positive");

        let err = Error::ConvergenceFailure("no donor".to_string());
        assert_eq!(err.to_string(), "Convergence failure: no donor");
    }
}
