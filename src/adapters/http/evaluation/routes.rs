//! Axum router configuration for evaluation endpoints.

use axum::{routing::post, Router};

use super::handlers::{calculate, validate_alternatives, validate_criteria};

/// Create the evaluation API router.
///
/// # Routes
///
/// - `POST /validate-criteria` - Weights and consistency for the criteria
///   pairwise matrix
/// - `POST /validate-alternatives` - Same for one alternative matrix, with
///   cost inversion
/// - `POST /calculate` - Full evaluation: weights, ranking, sensitivity
///
/// Mount under `/api` to reproduce the public endpoint paths.
pub fn evaluation_router() -> Router {
    Router::new()
        .route("/validate-criteria", post(validate_criteria))
        .route("/validate-alternatives", post(validate_alternatives))
        .route("/calculate", post(calculate))
}
