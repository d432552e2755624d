//! Aggregation of per-criterion weights into final scores.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Final scores, ranking, and the per-criterion contribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Overall score per alternative. Sums to 1 when every input vector is
    /// normalized.
    pub final_scores: Vec<f64>,
    /// Alternative indices sorted by descending score; ties keep ascending
    /// index order.
    pub ranking: Vec<usize>,
    /// One contribution vector per criterion: the criterion's weight
    /// spread across the alternatives. Summing these element-wise yields
    /// `final_scores`.
    pub contributions: Vec<Vec<f64>>,
}

impl AggregateResult {
    /// Index of the top-ranked alternative, if any alternatives exist.
    pub fn best(&self) -> Option<usize> {
        self.ranking.first().copied()
    }
}

/// Combines criterion weights with per-criterion alternative weights.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Computes final scores and ranking.
    ///
    /// For criterion `i`, contribution = `criterion_weights[i] *
    /// alt_weight_vectors[i]` element-wise; final scores are the sum of
    /// all contributions. Every weight vector must be indexed over the
    /// same alternative set.
    pub fn aggregate(
        criterion_weights: &[f64],
        alt_weight_vectors: &[Vec<f64>],
    ) -> AggregateResult {
        debug_assert_eq!(criterion_weights.len(), alt_weight_vectors.len());

        let alternative_count = alt_weight_vectors.first().map_or(0, Vec::len);
        let mut final_scores = vec![0.0; alternative_count];
        let mut contributions = Vec::with_capacity(alt_weight_vectors.len());

        for (weight, alt_weights) in criterion_weights.iter().zip(alt_weight_vectors) {
            let contribution: Vec<f64> = alt_weights.iter().map(|w| weight * w).collect();
            for (total, c) in final_scores.iter_mut().zip(&contribution) {
                *total += c;
            }
            contributions.push(contribution);
        }

        AggregateResult {
            ranking: Self::rank(&final_scores),
            final_scores,
            contributions,
        }
    }

    /// Ranks alternative indices by descending score. The sort is stable,
    /// so tied scores keep their original index order.
    pub fn rank(scores: &[f64]) -> Vec<usize> {
        let mut ranking: Vec<usize> = (0..scores.len()).collect();
        ranking.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });
        ranking
    }
}
