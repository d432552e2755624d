//! Full decision evaluation session.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    AggregationEngine, AhpError, ConsistencyChecker, ConsistencyResult, Criterion,
    CriterionData, CriterionEvaluator, EvaluationResult, PairwiseMatrix, PriorityCalculator,
    SensitivityAnalyzer, SensitivityRecord,
};

/// One criterion's weighted contribution to the final scores, kept in
/// criterion order for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub criterion: String,
    pub contribution: Vec<f64>,
}

/// Everything a completed decision run produces. Read-only after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub decision: String,
    pub alternatives: Vec<String>,
    pub criteria_weights: Vec<f64>,
    pub criteria_consistency: ConsistencyResult,
    /// Per-criterion evaluation results, in criterion order.
    pub evaluations: Vec<EvaluationResult>,
    pub final_scores: Vec<f64>,
    /// Alternative indices, best first.
    pub ranking: Vec<usize>,
    /// Name of the recommended alternative.
    pub best: String,
    pub detailed_scores: Vec<CriterionContribution>,
    pub sensitivity: Vec<SensitivityRecord>,
}

/// A single decision run: criteria, alternatives, and the judgments and
/// measurements collected for them.
///
/// The session owns its inputs, validates them up front, and produces one
/// [`DecisionOutcome`]. Nothing is shared between sessions, so concurrent
/// runs are independent by construction.
#[derive(Debug, Clone)]
pub struct DecisionSession {
    decision: String,
    criteria: Vec<Criterion>,
    alternatives: Vec<String>,
    criteria_judgments: Vec<f64>,
    criterion_data: Vec<CriterionData>,
}

impl DecisionSession {
    /// Assembles a session, validating structure before any computation.
    ///
    /// # Errors
    ///
    /// [`AhpError::InvalidInput`] for empty criteria or alternative sets,
    /// duplicate names within either set, or a data list whose length does
    /// not match the criteria list.
    pub fn new(
        decision: impl Into<String>,
        criteria: Vec<Criterion>,
        alternatives: Vec<String>,
        criteria_judgments: Vec<f64>,
        criterion_data: Vec<CriterionData>,
    ) -> Result<Self, AhpError> {
        if criteria.is_empty() {
            return Err(AhpError::invalid_input("at least one criterion is required"));
        }
        if alternatives.is_empty() {
            return Err(AhpError::invalid_input(
                "at least one alternative is required",
            ));
        }
        if criterion_data.len() != criteria.len() {
            return Err(AhpError::invalid_input(format!(
                "expected data for {} criteria, got {}",
                criteria.len(),
                criterion_data.len()
            )));
        }

        Self::ensure_unique("criterion", criteria.iter().map(|c| c.name.as_str()))?;
        Self::ensure_unique("alternative", alternatives.iter().map(String::as_str))?;

        Ok(Self {
            decision: decision.into(),
            criteria,
            alternatives,
            criteria_judgments,
            criterion_data,
        })
    }

    fn ensure_unique<'a>(
        kind: &str,
        names: impl Iterator<Item = &'a str>,
    ) -> Result<(), AhpError> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name) {
                return Err(AhpError::invalid_input(format!(
                    "duplicate {} name '{}'",
                    kind, name
                )));
            }
        }
        Ok(())
    }

    /// Runs the full evaluation: criteria weighting, per-criterion
    /// alternative evaluation, aggregation, and sensitivity analysis.
    pub fn evaluate(&self) -> Result<DecisionOutcome, AhpError> {
        let criteria_count = self.criteria.len();
        ConsistencyChecker::ensure_supported(criteria_count)?;

        let criteria_matrix =
            PairwiseMatrix::from_judgments(criteria_count, &self.criteria_judgments)?;
        let criteria_priority = PriorityCalculator::priority_weights(&criteria_matrix)?;
        let criteria_consistency =
            ConsistencyChecker::consistency_ratio(criteria_count, criteria_priority.lambda_max)?;

        let mut evaluations = Vec::with_capacity(criteria_count);
        for (criterion, data) in self.criteria.iter().zip(&self.criterion_data) {
            evaluations.push(CriterionEvaluator::evaluate(
                criterion,
                self.alternatives.len(),
                data,
            )?);
        }

        let alt_weight_vectors: Vec<Vec<f64>> =
            evaluations.iter().map(|e| e.weights.clone()).collect();
        let aggregate =
            AggregationEngine::aggregate(&criteria_priority.weights, &alt_weight_vectors);
        let best_index = aggregate
            .best()
            .ok_or_else(|| AhpError::invalid_input("at least one alternative is required"))?;

        let detailed_scores = self
            .criteria
            .iter()
            .zip(&aggregate.contributions)
            .map(|(criterion, contribution)| CriterionContribution {
                criterion: criterion.name.clone(),
                contribution: contribution.clone(),
            })
            .collect();

        let criterion_names: Vec<String> =
            self.criteria.iter().map(|c| c.name.clone()).collect();
        let sensitivity = SensitivityAnalyzer::analyze(
            &criteria_priority.weights,
            &alt_weight_vectors,
            &criterion_names,
            &self.alternatives,
        );

        Ok(DecisionOutcome {
            decision: self.decision.clone(),
            alternatives: self.alternatives.clone(),
            criteria_weights: criteria_priority.weights,
            criteria_consistency,
            evaluations,
            final_scores: aggregate.final_scores,
            best: self.alternatives[best_index].clone(),
            ranking: aggregate.ranking,
            detailed_scores,
            sensitivity,
        })
    }
}
