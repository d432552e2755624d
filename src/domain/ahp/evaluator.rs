//! Per-criterion evaluation of alternatives.

use serde::{Deserialize, Serialize};

use super::{
    AhpError, ConsistencyChecker, ConsistencyResult, Criterion, EvaluationMode,
    ObjectiveNormalizer, PairwiseMatrix, Polarity, PriorityCalculator,
};

/// Expected value and variance for one alternative under an uncertain
/// criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskOutcome {
    pub mean: f64,
    pub variance: f64,
}

/// The alternative data supplied for one criterion, tagged by how it is to
/// be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionData {
    /// One measured value per alternative.
    Objective { values: Vec<f64> },
    /// Upper-triangle pairwise judgments over the alternatives.
    Subjective { judgments: Vec<f64> },
    /// Mean/variance pairs plus the decision maker's risk aversion.
    Uncertain {
        outcomes: Vec<RiskOutcome>,
        risk_aversion: f64,
    },
}

/// Alternative weights for one criterion, with a consistency verdict when
/// the evaluation went through a pairwise matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub weights: Vec<f64>,
    pub consistency: Option<ConsistencyResult>,
}

/// Evaluates alternatives under a single criterion.
pub struct CriterionEvaluator;

impl CriterionEvaluator {
    /// Produces the alternative weight vector for one criterion.
    ///
    /// Dispatches on the criterion's evaluation mode:
    ///
    /// - `Objective`: polarity-aware normalization of the raw values; no
    ///   consistency result.
    /// - `Subjective`: pairwise matrix over the alternatives. For a cost
    ///   criterion every judgment is inverted before the matrix is built,
    ///   reinterpreting "strongly preferred" as "strongly disfavored".
    ///   Produces priority weights and a consistency result.
    /// - `Uncertain`: risk-adjusted score `mean - risk_aversion * variance`
    ///   per alternative, shift-normalized; no consistency result.
    ///
    /// # Errors
    ///
    /// [`AhpError::InvalidInput`] when the data variant does not match the
    /// criterion's mode, has the wrong arity for `alternative_count`, or
    /// contains non-positive numbers; [`AhpError::UnsupportedSize`] when a
    /// subjective evaluation covers more alternatives than the Random
    /// Index table supports.
    pub fn evaluate(
        criterion: &Criterion,
        alternative_count: usize,
        data: &CriterionData,
    ) -> Result<EvaluationResult, AhpError> {
        match (criterion.mode, data) {
            (EvaluationMode::Objective, CriterionData::Objective { values }) => {
                Self::evaluate_objective(criterion, alternative_count, values)
            }
            (EvaluationMode::Subjective, CriterionData::Subjective { judgments }) => {
                Self::evaluate_subjective(criterion, alternative_count, judgments)
            }
            (
                EvaluationMode::Uncertain,
                CriterionData::Uncertain {
                    outcomes,
                    risk_aversion,
                },
            ) => Self::evaluate_uncertain(criterion, alternative_count, outcomes, *risk_aversion),
            (mode, _) => Err(AhpError::invalid_input(format!(
                "criterion '{}' is {} but received data for a different mode",
                criterion.name, mode
            ))),
        }
    }

    fn evaluate_objective(
        criterion: &Criterion,
        alternative_count: usize,
        values: &[f64],
    ) -> Result<EvaluationResult, AhpError> {
        if values.len() != alternative_count {
            return Err(AhpError::invalid_input(format!(
                "criterion '{}' needs {} measurements, got {}",
                criterion.name,
                alternative_count,
                values.len()
            )));
        }

        let weights = ObjectiveNormalizer::normalize(values, criterion.polarity)?;
        Ok(EvaluationResult {
            weights,
            consistency: None,
        })
    }

    fn evaluate_subjective(
        criterion: &Criterion,
        alternative_count: usize,
        judgments: &[f64],
    ) -> Result<EvaluationResult, AhpError> {
        ConsistencyChecker::ensure_supported(alternative_count)?;

        // A cost judgment of "a is v times preferred over b" means a costs
        // more, so the preference flips to 1/v before the matrix is built.
        let effective: Vec<f64> = match criterion.polarity {
            Polarity::Benefit => judgments.to_vec(),
            Polarity::Cost => judgments
                .iter()
                .map(|v| if *v > 0.0 { 1.0 / v } else { *v })
                .collect(),
        };

        let matrix = PairwiseMatrix::from_judgments(alternative_count, &effective)?;
        let priority = PriorityCalculator::priority_weights(&matrix)?;
        let consistency =
            ConsistencyChecker::consistency_ratio(alternative_count, priority.lambda_max)?;

        Ok(EvaluationResult {
            weights: priority.weights,
            consistency: Some(consistency),
        })
    }

    fn evaluate_uncertain(
        criterion: &Criterion,
        alternative_count: usize,
        outcomes: &[RiskOutcome],
        risk_aversion: f64,
    ) -> Result<EvaluationResult, AhpError> {
        if outcomes.len() != alternative_count {
            return Err(AhpError::invalid_input(format!(
                "criterion '{}' needs {} outcome pairs, got {}",
                criterion.name,
                alternative_count,
                outcomes.len()
            )));
        }
        if !risk_aversion.is_finite() || risk_aversion < 0.0 {
            return Err(AhpError::invalid_input(format!(
                "risk aversion must be a non-negative number, got {}",
                risk_aversion
            )));
        }
        for (i, o) in outcomes.iter().enumerate() {
            if !o.mean.is_finite() || o.mean <= 0.0 || !o.variance.is_finite() || o.variance <= 0.0
            {
                return Err(AhpError::invalid_input(format!(
                    "outcome at position {} must have positive mean and variance",
                    i
                )));
            }
        }

        let adjusted: Vec<f64> = outcomes
            .iter()
            .map(|o| o.mean - risk_aversion * o.variance)
            .collect();
        let weights = ObjectiveNormalizer::normalize_shifted(&adjusted)?;

        Ok(EvaluationResult {
            weights,
            consistency: None,
        })
    }
}
