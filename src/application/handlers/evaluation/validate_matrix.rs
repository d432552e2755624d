//! ValidateMatrixHandler - Checks a single pairwise matrix for consistency.
//!
//! Used while judgments are being collected, before a full evaluation run:
//! the caller submits one matrix and gets back its weights, dominant
//! eigenvalue, and consistency verdict.

use crate::domain::ahp::{
    AhpError, ConsistencyChecker, ConsistencyResult, PairwiseMatrix, Polarity,
    PriorityCalculator,
};

/// Command to validate one pairwise comparison matrix.
#[derive(Debug, Clone)]
pub struct ValidateMatrixCommand {
    /// Number of items compared.
    pub n: usize,
    /// Upper-triangle judgments in row-major order.
    pub comparisons: Vec<f64>,
    /// When set to `Cost`, judgments are inverted before the matrix is
    /// built, as for a cost criterion's alternative comparisons.
    pub polarity: Option<Polarity>,
}

/// Result of a matrix validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixValidation {
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency: ConsistencyResult,
}

/// Handler for single-matrix validation.
pub struct ValidateMatrixHandler;

impl ValidateMatrixHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: ValidateMatrixCommand) -> Result<MatrixValidation, AhpError> {
        ConsistencyChecker::ensure_supported(command.n)?;

        let effective: Vec<f64> = match command.polarity {
            Some(Polarity::Cost) => command
                .comparisons
                .iter()
                .map(|v| if *v > 0.0 { 1.0 / v } else { *v })
                .collect(),
            _ => command.comparisons.clone(),
        };

        let matrix = PairwiseMatrix::from_judgments(command.n, &effective)?;
        let priority = PriorityCalculator::priority_weights(&matrix)?;
        let consistency =
            ConsistencyChecker::consistency_ratio(command.n, priority.lambda_max)?;

        tracing::debug!(
            n = command.n,
            lambda_max = priority.lambda_max,
            consistency_ratio = consistency.ratio,
            consistent = consistency.consistent,
            "validated pairwise matrix"
        );

        Ok(MatrixValidation {
            weights: priority.weights,
            lambda_max: priority.lambda_max,
            consistency,
        })
    }
}

impl Default for ValidateMatrixHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_a_consistent_matrix() {
        let handler = ValidateMatrixHandler::new();
        let result = handler
            .handle(ValidateMatrixCommand {
                n: 3,
                comparisons: vec![1.0, 1.0, 1.0],
                polarity: None,
            })
            .unwrap();

        for w in &result.weights {
            assert!((w - 1.0 / 3.0).abs() < 1e-9);
        }
        assert!((result.lambda_max - 3.0).abs() < 1e-9);
        assert!(result.consistency.consistent);
    }

    #[test]
    fn cost_polarity_inverts_judgments() {
        let handler = ValidateMatrixHandler::new();
        let result = handler
            .handle(ValidateMatrixCommand {
                n: 2,
                comparisons: vec![4.0],
                polarity: Some(Polarity::Cost),
            })
            .unwrap();

        assert!((result.weights[0] - 0.2).abs() < 1e-9);
        assert!((result.weights[1] - 0.8).abs() < 1e-9);
    }

    #[test]
    fn benefit_polarity_leaves_judgments_alone() {
        let handler = ValidateMatrixHandler::new();
        let result = handler
            .handle(ValidateMatrixCommand {
                n: 2,
                comparisons: vec![4.0],
                polarity: Some(Polarity::Benefit),
            })
            .unwrap();

        assert!((result.weights[0] - 0.8).abs() < 1e-9);
    }

    #[test]
    fn oversized_matrix_is_rejected() {
        let handler = ValidateMatrixHandler::new();
        let err = handler
            .handle(ValidateMatrixCommand {
                n: 11,
                comparisons: vec![1.0; 55],
                polarity: None,
            })
            .unwrap_err();

        assert_eq!(err, AhpError::UnsupportedSize { n: 11 });
    }

    #[test]
    fn malformed_judgment_vector_is_rejected() {
        let handler = ValidateMatrixHandler::new();
        let err = handler
            .handle(ValidateMatrixCommand {
                n: 3,
                comparisons: vec![1.0, 2.0],
                polarity: None,
            })
            .unwrap_err();

        assert!(matches!(err, AhpError::InvalidInput { .. }));
    }
}
