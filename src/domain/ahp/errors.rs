//! Error types for the AHP engine.

use thiserror::Error;

/// Errors that can occur during AHP computation.
///
/// Consistency ratios above the acceptability threshold are not errors;
/// they are reported through [`super::ConsistencyResult::consistent`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Degenerate comparison matrix: eigenvector components sum to zero")]
    DegenerateMatrix,

    #[error("Unsupported matrix size {n}: the Random Index table covers 1 through 10 items")]
    UnsupportedSize { n: usize },
}

impl AhpError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AhpError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AhpError::InvalidInput { .. } => "INVALID_INPUT",
            AhpError::DegenerateMatrix => "DEGENERATE_MATRIX",
            AhpError::UnsupportedSize { .. } => "UNSUPPORTED_SIZE",
        }
    }
}
