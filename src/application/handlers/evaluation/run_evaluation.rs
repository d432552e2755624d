//! RunEvaluationHandler - Executes a complete decision evaluation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ahp::{
    AhpError, Criterion, CriterionData, DecisionOutcome, DecisionSession,
};

/// Command carrying everything a decision run needs.
#[derive(Debug, Clone)]
pub struct RunEvaluationCommand {
    /// The question being decided, used only for reporting.
    pub decision: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<String>,
    /// Upper-triangle judgments over the criteria.
    pub criteria_comparisons: Vec<f64>,
    /// Per-criterion alternative data, in criterion order.
    pub criterion_data: Vec<CriterionData>,
}

/// A completed evaluation, stamped for reporting.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub outcome: DecisionOutcome,
}

/// Handler for full decision evaluations.
pub struct RunEvaluationHandler;

impl RunEvaluationHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: RunEvaluationCommand) -> Result<EvaluationReport, AhpError> {
        let session = DecisionSession::new(
            command.decision,
            command.criteria,
            command.alternatives,
            command.criteria_comparisons,
            command.criterion_data,
        )?;

        let outcome = session.evaluate()?;

        tracing::info!(
            decision = %outcome.decision,
            best = %outcome.best,
            criteria_consistent = outcome.criteria_consistency.consistent,
            "decision evaluation completed"
        );

        Ok(EvaluationReport {
            id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            outcome,
        })
    }
}

impl Default for RunEvaluationHandler {
    fn default() -> Self {
        Self::new()
    }
}
