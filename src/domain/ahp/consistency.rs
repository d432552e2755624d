//! Consistency ratio computation.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Random Index reference values for matrices of 1 to 10 items: the
/// expected consistency index of a randomly filled reciprocal matrix of
/// that size (Saaty's table).
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Judgments with a consistency ratio at or below this are acceptable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// A consistency ratio with its acceptability verdict.
///
/// An unacceptable ratio is a warning, not a failure: weights derived from
/// inconsistent judgments are still reported, flagged for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub ratio: f64,
    pub consistent: bool,
}

/// Computes consistency ratios from the dominant eigenvalue.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Checks that `n` items fit the Random Index table.
    ///
    /// Called before eigen extraction so that an oversized matrix fails
    /// fast instead of after the expensive step.
    pub fn ensure_supported(n: usize) -> Result<(), AhpError> {
        if n > RANDOM_INDEX.len() {
            return Err(AhpError::UnsupportedSize { n });
        }
        Ok(())
    }

    /// Computes the consistency ratio for an `n`-item matrix.
    ///
    /// CI = (lambda_max - n) / (n - 1), CR = CI / RI(n). Matrices of one
    /// or two items are reciprocally determined and can never be
    /// inconsistent, so their ratio is exactly 0 regardless of
    /// `lambda_max`.
    ///
    /// # Errors
    ///
    /// Returns [`AhpError::UnsupportedSize`] for `n` beyond the Random
    /// Index table and [`AhpError::InvalidInput`] for `n = 0`.
    pub fn consistency_ratio(n: usize, lambda_max: f64) -> Result<ConsistencyResult, AhpError> {
        if n == 0 {
            return Err(AhpError::invalid_input(
                "consistency is undefined for an empty item set",
            ));
        }
        Self::ensure_supported(n)?;

        if n < 3 {
            return Ok(ConsistencyResult {
                ratio: 0.0,
                consistent: true,
            });
        }

        let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
        let ratio = ci / RANDOM_INDEX[n - 1];

        Ok(ConsistencyResult {
            ratio,
            consistent: ratio <= CONSISTENCY_THRESHOLD,
        })
    }
}
