//! Handlers for AHP evaluation commands.

mod run_evaluation;
mod validate_matrix;

pub use run_evaluation::{EvaluationReport, RunEvaluationCommand, RunEvaluationHandler};
pub use validate_matrix::{MatrixValidation, ValidateMatrixCommand, ValidateMatrixHandler};
