//! HTTP handlers for evaluation endpoints.
//!
//! These handlers connect axum routes to the application layer command
//! handlers and translate domain errors into HTTP responses.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::evaluation::{
    RunEvaluationCommand, RunEvaluationHandler, ValidateMatrixCommand, ValidateMatrixHandler,
};
use crate::domain::ahp::AhpError;

use super::dto::{
    CalculateRequest, CalculateResponse, ErrorResponse, MatrixValidationResponse,
    ValidateAlternativesRequest, ValidateCriteriaRequest,
};

/// Wrapper turning [`AhpError`] into an HTTP response.
#[derive(Debug)]
pub struct EvaluationApiError(pub AhpError);

impl From<AhpError> for EvaluationApiError {
    fn from(err: AhpError) -> Self {
        Self(err)
    }
}

impl IntoResponse for EvaluationApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            // Caller supplied judgments or measurements the engine cannot
            // accept; re-prompting with different input can succeed.
            AhpError::InvalidInput { .. } | AhpError::UnsupportedSize { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Retrying with identical input would fail identically.
            AhpError::DegenerateMatrix => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// POST /api/validate-criteria - Validate the criteria pairwise matrix.
pub async fn validate_criteria(
    Json(request): Json<ValidateCriteriaRequest>,
) -> Result<impl IntoResponse, EvaluationApiError> {
    let handler = ValidateMatrixHandler::new();
    let result = handler.handle(ValidateMatrixCommand {
        n: request.n,
        comparisons: request.comparisons,
        polarity: None,
    })?;

    Ok(Json(MatrixValidationResponse::from(result)))
}

/// POST /api/validate-alternatives - Validate one alternative pairwise
/// matrix, inverting judgments for cost criteria.
pub async fn validate_alternatives(
    Json(request): Json<ValidateAlternativesRequest>,
) -> Result<impl IntoResponse, EvaluationApiError> {
    let handler = ValidateMatrixHandler::new();
    let result = handler.handle(ValidateMatrixCommand {
        n: request.n,
        comparisons: request.comparisons,
        polarity: Some(request.criterion_type),
    })?;

    Ok(Json(MatrixValidationResponse::from(result)))
}

/// POST /api/calculate - Run a full decision evaluation.
pub async fn calculate(
    Json(request): Json<CalculateRequest>,
) -> Result<impl IntoResponse, EvaluationApiError> {
    let criterion_data = request.criterion_data()?;
    let criteria = request.domain_criteria();

    let handler = RunEvaluationHandler::new();
    let report = handler.handle(RunEvaluationCommand {
        decision: request.decision,
        criteria,
        alternatives: request.alternatives,
        criteria_comparisons: request.criteria_comparisons,
        criterion_data,
    })?;

    Ok(Json(CalculateResponse::from(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::Polarity;

    #[test]
    fn invalid_input_maps_to_unprocessable_entity() {
        let response = EvaluationApiError(AhpError::invalid_input("bad")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unsupported_size_maps_to_unprocessable_entity() {
        let response = EvaluationApiError(AhpError::UnsupportedSize { n: 11 }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn degenerate_matrix_maps_to_internal_error() {
        let response = EvaluationApiError(AhpError::DegenerateMatrix).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validate_criteria_returns_weights() {
        let request = ValidateCriteriaRequest {
            n: 2,
            comparisons: vec![4.0],
        };

        let response = validate_criteria(Json(request)).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn validate_alternatives_honors_cost_polarity() {
        let request = ValidateAlternativesRequest {
            n: 2,
            comparisons: vec![4.0],
            criterion_type: Polarity::Cost,
        };

        let response = validate_alternatives(Json(request)).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn calculate_rejects_inconsistent_payload() {
        let request: CalculateRequest = serde_json::from_str(
            r#"{
                "decision": "d",
                "criteria": [{"name": "C", "type": "benefit"}],
                "alternatives": ["A", "B"],
                "criteria_comparisons": []
            }"#,
        )
        .unwrap();

        let result = calculate(Json(request)).await;
        assert!(result.is_err());
    }
}
