//! One-factor-at-a-time sensitivity analysis.

use serde::{Deserialize, Serialize};

use super::AggregationEngine;

/// Multiplier applied to each criterion weight during perturbation.
pub const PERTURBATION_FACTOR: f64 = 1.10;

/// Outcome of perturbing one criterion's weight by +10%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    /// Name of the perturbed criterion.
    pub criterion: String,
    /// Best alternative under the original weights.
    pub original_best: String,
    /// Best alternative after the perturbation.
    pub new_best: String,
    /// True when the recommendation survived the perturbation.
    pub stable: bool,
    /// Full score vector under the perturbed weights.
    pub new_scores: Vec<f64>,
}

/// Probes how robust the recommendation is to criterion over-weighting.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Perturbs each criterion weight independently by +10%.
    ///
    /// For every criterion in turn: scale its weight by
    /// [`PERTURBATION_FACTOR`], renormalize the whole weight vector to
    /// sum 1, recompute final scores against the unchanged alternative
    /// weight vectors, and record whether the best alternative moved.
    /// Perturbations are independent, not cumulative. This is a
    /// first-order robustness probe, not a derivative-based analysis.
    ///
    /// Returns one record per criterion; empty when there are no criteria
    /// or no alternatives.
    pub fn analyze(
        criterion_weights: &[f64],
        alt_weight_vectors: &[Vec<f64>],
        criterion_names: &[String],
        alternative_names: &[String],
    ) -> Vec<SensitivityRecord> {
        debug_assert_eq!(criterion_weights.len(), criterion_names.len());

        if criterion_weights.is_empty() || alternative_names.is_empty() {
            return Vec::new();
        }

        let original = AggregationEngine::aggregate(criterion_weights, alt_weight_vectors);
        let original_best = match original.best() {
            Some(index) => alternative_names[index].clone(),
            None => return Vec::new(),
        };

        let mut records = Vec::with_capacity(criterion_weights.len());

        for (i, name) in criterion_names.iter().enumerate() {
            let mut perturbed = criterion_weights.to_vec();
            perturbed[i] *= PERTURBATION_FACTOR;
            let sum: f64 = perturbed.iter().sum();
            for w in &mut perturbed {
                *w /= sum;
            }

            let result = AggregationEngine::aggregate(&perturbed, alt_weight_vectors);
            let new_best = result
                .best()
                .map(|index| alternative_names[index].clone())
                .unwrap_or_else(|| original_best.clone());

            records.push(SensitivityRecord {
                criterion: name.clone(),
                stable: new_best == original_best,
                original_best: original_best.clone(),
                new_best,
                new_scores: result.final_scores,
            });
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dominant_alternative_is_stable_everywhere() {
        // Alternative A wins under every criterion; no 10% nudge can
        // change that.
        let records = SensitivityAnalyzer::analyze(
            &[0.5, 0.3, 0.2],
            &[
                vec![0.9, 0.1],
                vec![0.8, 0.2],
                vec![0.7, 0.3],
            ],
            &names(&["Price", "Quality", "Support"]),
            &names(&["A", "B"]),
        );

        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(record.original_best, "A");
            assert_eq!(record.new_best, "A");
            assert!(record.stable);
        }
    }

    #[test]
    fn close_decision_flips_under_perturbation() {
        // B narrowly wins overall, but criterion 0 strongly favors A:
        // boosting it by 10% tips the weight balance past the gap.
        let records = SensitivityAnalyzer::analyze(
            &[0.49, 0.51],
            &[vec![0.9, 0.1], vec![0.1, 0.9]],
            &names(&["Performance", "Price"]),
            &names(&["A", "B"]),
        );

        assert_eq!(records[0].original_best, "B");
        assert_eq!(records[0].new_best, "A");
        assert!(!records[0].stable);

        // Boosting the criterion that already favors B keeps B on top.
        assert!(records[1].stable);
    }

    #[test]
    fn perturbed_scores_stay_normalized() {
        let records = SensitivityAnalyzer::analyze(
            &[0.6, 0.4],
            &[vec![0.3, 0.7], vec![0.5, 0.5]],
            &names(&["C1", "C2"]),
            &names(&["A", "B"]),
        );

        for record in &records {
            let sum: f64 = record.new_scores.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_inputs_produce_no_records() {
        let records = SensitivityAnalyzer::analyze(&[], &[], &[], &names(&["A"]));
        assert!(records.is_empty());

        let records = SensitivityAnalyzer::analyze(&[1.0], &[vec![]], &names(&["C"]), &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn perturbations_are_independent() {
        // Each record perturbs exactly one criterion relative to the
        // original weights, so two records with symmetric inputs mirror
        // each other.
        let records = SensitivityAnalyzer::analyze(
            &[0.5, 0.5],
            &[vec![0.6, 0.4], vec![0.4, 0.6]],
            &names(&["C1", "C2"]),
            &names(&["A", "B"]),
        );

        assert!((records[0].new_scores[0] - records[1].new_scores[1]).abs() < 1e-12);
        assert!((records[0].new_scores[1] - records[1].new_scores[0]).abs() < 1e-12);
    }
}
