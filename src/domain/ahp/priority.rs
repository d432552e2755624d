//! Priority weight derivation from a pairwise matrix.

use serde::{Deserialize, Serialize};

use super::{AhpError, PairwiseMatrix};

/// Iteration cutoff for the power method. Positive reciprocal matrices of
/// the sizes handled here converge in a few dozen iterations.
const MAX_ITERATIONS: usize = 500;

/// Convergence tolerance on the max component change between iterates.
const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Guard against division by a vanishing component sum.
const DEGENERATE_SUM: f64 = 1e-12;

/// Normalized priority weights plus the dominant eigenvalue they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    /// Weight per item, non-negative for consistent judgments, sums to 1.
    pub weights: Vec<f64>,
    /// Dominant (Perron-Frobenius) eigenvalue. Equals the item count
    /// exactly when the judgments are perfectly consistent.
    pub lambda_max: f64,
}

/// Derives priority weights from pairwise comparison matrices.
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Computes the dominant eigenpair of the matrix.
    ///
    /// # Algorithm
    ///
    /// Power iteration with L1 renormalization. A pairwise matrix is
    /// positive, so the Perron-Frobenius theorem guarantees a unique
    /// dominant eigenpair with a strictly positive eigenvector, and the
    /// iteration converges to it from the uniform starting vector. The
    /// eigenvalue is recovered as the component sum of `M * w` for the
    /// converged unit-sum vector `w`. A general dense eigensolver would
    /// also work but is not needed for matrices this small, and the
    /// iteration gives the same answer on every platform.
    ///
    /// Weights are normalized to sum to 1. Components are reported as
    /// computed; callers that observe a negative or zero component are
    /// looking at strongly inconsistent judgments and should consult the
    /// consistency ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AhpError::DegenerateMatrix`] if the eigenvector component
    /// sum vanishes, which would otherwise divide by zero.
    pub fn priority_weights(matrix: &PairwiseMatrix) -> Result<PriorityResult, AhpError> {
        let n = matrix.n();

        if n == 1 {
            return Ok(PriorityResult {
                weights: vec![1.0],
                lambda_max: 1.0,
            });
        }

        let mut weights = vec![1.0 / n as f64; n];
        let mut lambda_max = n as f64;

        for _ in 0..MAX_ITERATIONS {
            let image = matrix.multiply(&weights);
            let sum: f64 = image.iter().sum();
            if !sum.is_finite() || sum.abs() < DEGENERATE_SUM {
                return Err(AhpError::DegenerateMatrix);
            }

            // `weights` has unit component sum, so the sum of its image
            // estimates the dominant eigenvalue.
            lambda_max = sum;

            let next: Vec<f64> = image.iter().map(|x| x / sum).collect();
            let delta = next
                .iter()
                .zip(&weights)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0f64, f64::max);
            weights = next;

            if delta < CONVERGENCE_TOLERANCE {
                break;
            }
        }

        Ok(PriorityResult { weights, lambda_max })
    }
}
