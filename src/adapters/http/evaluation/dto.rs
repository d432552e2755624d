//! HTTP DTOs (Data Transfer Objects) for evaluation endpoints.
//!
//! These types define the JSON request/response structure for the AHP API.
//! Field names are the wire contract and must not change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::application::handlers::evaluation::{EvaluationReport, MatrixValidation};
use crate::domain::ahp::{
    AhpError, Criterion, CriterionData, EvaluationMode, Polarity, RiskOutcome,
    SensitivityRecord,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to validate the criteria comparison matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCriteriaRequest {
    /// Number of criteria compared.
    pub n: usize,
    /// Upper-triangle judgments, length n*(n-1)/2.
    pub comparisons: Vec<f64>,
}

/// Request to validate one alternative comparison matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateAlternativesRequest {
    /// Number of alternatives compared.
    pub n: usize,
    /// Upper-triangle judgments, length n*(n-1)/2.
    pub comparisons: Vec<f64>,
    /// Polarity of the owning criterion; judgments are inverted for cost.
    #[serde(default = "default_criterion_type")]
    pub criterion_type: Polarity,
}

fn default_criterion_type() -> Polarity {
    Polarity::Benefit
}

/// One criterion in a full evaluation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub criterion_type: Polarity,
    #[serde(default = "default_mode")]
    pub mode: EvaluationMode,
}

fn default_mode() -> EvaluationMode {
    EvaluationMode::Subjective
}

/// Mean/variance pair for an uncertain criterion.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskOutcomeDto {
    pub mean: f64,
    pub variance: f64,
}

/// Request for a full decision evaluation.
///
/// Per-criterion alternative data lives in three parallel lists indexed by
/// criterion position; only the list matching each criterion's mode is
/// consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub decision: String,
    pub criteria: Vec<CriterionDto>,
    pub alternatives: Vec<String>,
    /// Upper-triangle judgments over the criteria.
    pub criteria_comparisons: Vec<f64>,
    /// Pairwise judgment lists for subjective criteria.
    #[serde(default)]
    pub alt_comparisons: Vec<Vec<f64>>,
    /// Raw measured values for objective criteria.
    #[serde(default)]
    pub alt_data: Vec<Vec<f64>>,
    /// Mean/variance pairs for uncertain criteria.
    #[serde(default)]
    pub alt_outcomes: Vec<Vec<RiskOutcomeDto>>,
    /// Risk aversion coefficient, required by uncertain criteria.
    #[serde(default)]
    pub risk_aversion: Option<f64>,
}

impl CalculateRequest {
    /// Resolves the per-criterion data list against each criterion's mode.
    pub fn criterion_data(&self) -> Result<Vec<CriterionData>, AhpError> {
        self.criteria
            .iter()
            .enumerate()
            .map(|(i, c)| match c.mode {
                EvaluationMode::Subjective => self
                    .alt_comparisons
                    .get(i)
                    .map(|judgments| CriterionData::Subjective {
                        judgments: judgments.clone(),
                    })
                    .ok_or_else(|| {
                        AhpError::invalid_input(format!(
                            "missing alt_comparisons entry for criterion '{}'",
                            c.name
                        ))
                    }),
                EvaluationMode::Objective => self
                    .alt_data
                    .get(i)
                    .map(|values| CriterionData::Objective {
                        values: values.clone(),
                    })
                    .ok_or_else(|| {
                        AhpError::invalid_input(format!(
                            "missing alt_data entry for criterion '{}'",
                            c.name
                        ))
                    }),
                EvaluationMode::Uncertain => {
                    let outcomes = self.alt_outcomes.get(i).ok_or_else(|| {
                        AhpError::invalid_input(format!(
                            "missing alt_outcomes entry for criterion '{}'",
                            c.name
                        ))
                    })?;
                    let risk_aversion = self.risk_aversion.ok_or_else(|| {
                        AhpError::invalid_input(
                            "risk_aversion is required when any criterion is uncertain",
                        )
                    })?;
                    Ok(CriterionData::Uncertain {
                        outcomes: outcomes
                            .iter()
                            .map(|o| RiskOutcome {
                                mean: o.mean,
                                variance: o.variance,
                            })
                            .collect(),
                        risk_aversion,
                    })
                }
            })
            .collect()
    }

    /// Converts the criteria list into domain criteria.
    pub fn domain_criteria(&self) -> Vec<Criterion> {
        self.criteria
            .iter()
            .map(|c| Criterion::new(c.name.clone(), c.criterion_type, c.mode))
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for both matrix validation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixValidationResponse {
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
}

impl From<MatrixValidation> for MatrixValidationResponse {
    fn from(validation: MatrixValidation) -> Self {
        Self {
            weights: validation.weights,
            lambda_max: validation.lambda_max,
            consistency_ratio: validation.consistency.ratio,
            consistent: validation.consistency.consistent,
        }
    }
}

/// One sensitivity record in a calculate response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityRecordDto {
    pub criterion: String,
    pub original_best: String,
    pub new_best: String,
    pub stable: bool,
    pub new_scores: Vec<f64>,
}

impl From<SensitivityRecord> for SensitivityRecordDto {
    fn from(record: SensitivityRecord) -> Self {
        Self {
            criterion: record.criterion,
            original_best: record.original_best,
            new_best: record.new_best,
            stable: record.stable,
            new_scores: record.new_scores,
        }
    }
}

/// Response for a full decision evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Evaluation id, assigned per request.
    pub id: String,
    /// When the evaluation ran (RFC 3339).
    pub evaluated_at: String,
    pub decision: String,
    pub criteria_weights: Vec<f64>,
    pub criteria_cr: f64,
    pub criteria_consistent: bool,
    pub alt_weights_list: Vec<Vec<f64>>,
    /// Consistency ratio per criterion; null for non-pairwise modes.
    pub alt_crs: Vec<Option<f64>>,
    pub final_scores: Vec<f64>,
    pub ranking: Vec<usize>,
    pub best: String,
    pub detailed_scores: HashMap<String, Vec<f64>>,
    pub sensitivity: Vec<SensitivityRecordDto>,
}

impl From<EvaluationReport> for CalculateResponse {
    fn from(report: EvaluationReport) -> Self {
        let outcome = report.outcome;
        Self {
            id: report.id.to_string(),
            evaluated_at: report.evaluated_at.to_rfc3339(),
            decision: outcome.decision,
            criteria_weights: outcome.criteria_weights,
            criteria_cr: outcome.criteria_consistency.ratio,
            criteria_consistent: outcome.criteria_consistency.consistent,
            alt_weights_list: outcome
                .evaluations
                .iter()
                .map(|e| e.weights.clone())
                .collect(),
            alt_crs: outcome
                .evaluations
                .iter()
                .map(|e| e.consistency.as_ref().map(|c| c.ratio))
                .collect(),
            final_scores: outcome.final_scores,
            ranking: outcome.ranking,
            best: outcome.best,
            detailed_scores: outcome
                .detailed_scores
                .into_iter()
                .map(|d| (d.criterion, d.contribution))
                .collect(),
            sensitivity: outcome
                .sensitivity
                .into_iter()
                .map(SensitivityRecordDto::from)
                .collect(),
        }
    }
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_criteria_request_deserializes() {
        let json = r#"{"n": 3, "comparisons": [2.0, 4.0, 3.0]}"#;
        let request: ValidateCriteriaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.n, 3);
        assert_eq!(request.comparisons, vec![2.0, 4.0, 3.0]);
    }

    #[test]
    fn validate_alternatives_request_defaults_to_benefit() {
        let json = r#"{"n": 2, "comparisons": [5.0]}"#;
        let request: ValidateAlternativesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.criterion_type, Polarity::Benefit);

        let json = r#"{"n": 2, "comparisons": [5.0], "criterion_type": "cost"}"#;
        let request: ValidateAlternativesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.criterion_type, Polarity::Cost);
    }

    #[test]
    fn criterion_dto_reads_type_field_and_defaults_mode() {
        let json = r#"{"name": "Price", "type": "cost"}"#;
        let dto: CriterionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.criterion_type, Polarity::Cost);
        assert_eq!(dto.mode, EvaluationMode::Subjective);
    }

    #[test]
    fn calculate_request_resolves_data_by_mode() {
        let json = r#"{
            "decision": "Which phone",
            "criteria": [
                {"name": "Price", "type": "cost", "mode": "objective"},
                {"name": "Camera", "type": "benefit", "mode": "subjective"}
            ],
            "alternatives": ["A", "B"],
            "criteria_comparisons": [2.0],
            "alt_comparisons": [[], [3.0]],
            "alt_data": [[700.0, 900.0], []]
        }"#;
        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        let data = request.criterion_data().unwrap();

        assert_eq!(
            data[0],
            CriterionData::Objective {
                values: vec![700.0, 900.0]
            }
        );
        assert_eq!(
            data[1],
            CriterionData::Subjective {
                judgments: vec![3.0]
            }
        );
    }

    #[test]
    fn calculate_request_rejects_missing_data_entry() {
        let json = r#"{
            "decision": "d",
            "criteria": [{"name": "C", "type": "benefit", "mode": "objective"}],
            "alternatives": ["A"],
            "criteria_comparisons": []
        }"#;
        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        let err = request.criterion_data().unwrap_err();
        assert!(matches!(err, AhpError::InvalidInput { .. }));
    }

    #[test]
    fn uncertain_mode_requires_risk_aversion() {
        let json = r#"{
            "decision": "d",
            "criteria": [{"name": "C", "type": "benefit", "mode": "uncertain"}],
            "alternatives": ["A"],
            "criteria_comparisons": [],
            "alt_outcomes": [[{"mean": 2.0, "variance": 0.5}]]
        }"#;
        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        let err = request.criterion_data().unwrap_err();
        assert!(matches!(err, AhpError::InvalidInput { .. }));
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("INVALID_INPUT", "bad judgment");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error_code\":\"INVALID_INPUT\""));
        assert!(json.contains("\"message\":\"bad judgment\""));
    }

    #[test]
    fn matrix_validation_response_carries_wire_field_names() {
        let response = MatrixValidationResponse {
            weights: vec![0.5, 0.5],
            lambda_max: 2.0,
            consistency_ratio: 0.0,
            consistent: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        for field in ["weights", "lambda_max", "consistency_ratio", "consistent"] {
            assert!(json.contains(field), "missing field {}", field);
        }
    }
}
