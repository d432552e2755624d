//! AHP Engine - Pure domain services for multi-criteria decision analysis.
//!
//! This module implements the Analytic Hierarchy Process pipeline:
//!
//! - `PairwiseMatrix` - Reciprocal comparison matrix over an item set
//! - `PriorityCalculator` - Dominant-eigenvector priority weights
//! - `ConsistencyChecker` - Consistency ratio against the Random Index table
//! - `ObjectiveNormalizer` - Benefit/cost normalization of raw measurements
//! - `CriterionEvaluator` - Per-criterion dispatch over evaluation modes
//! - `AggregationEngine` - Final scores, ranking, contribution breakdown
//! - `SensitivityAnalyzer` - +10% one-factor-at-a-time robustness probe
//! - `DecisionSession` - Orchestrates a complete decision run
//!
//! # Design Philosophy
//!
//! All functions are pure, synchronous, and deterministic. Each evaluation
//! session owns its matrices and result values; nothing is shared, so
//! independent sessions are trivially parallel. No ports or adapters are
//! needed since there's no I/O or external dependencies.

mod aggregation;
mod consistency;
mod criterion;
mod errors;
mod evaluator;
mod matrix;
mod objective;
mod priority;
mod sensitivity;
mod session;

pub use aggregation::{AggregateResult, AggregationEngine};
pub use consistency::{
    ConsistencyChecker, ConsistencyResult, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use criterion::{Criterion, EvaluationMode, Polarity};
pub use errors::AhpError;
pub use evaluator::{CriterionData, CriterionEvaluator, EvaluationResult, RiskOutcome};
pub use matrix::PairwiseMatrix;
pub use objective::{ObjectiveNormalizer, SHIFT_EPSILON};
pub use priority::{PriorityCalculator, PriorityResult};
pub use sensitivity::{SensitivityAnalyzer, SensitivityRecord, PERTURBATION_FACTOR};
pub use session::{CriterionContribution, DecisionOutcome, DecisionSession};
