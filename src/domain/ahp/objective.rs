//! Normalization of raw measurements into weights.

use super::{AhpError, Polarity};

/// Shift applied above the minimum when risk-adjusted scores dip to zero
/// or below, keeping the sum normalization well-defined.
pub const SHIFT_EPSILON: f64 = 1e-4;

/// Converts raw measured values for one criterion into normalized weights.
pub struct ObjectiveNormalizer;

impl ObjectiveNormalizer {
    /// Normalizes positive measurements according to polarity.
    ///
    /// Benefit criteria divide each value by the total, so larger raw
    /// values earn larger weights. Cost criteria invert every value first,
    /// so larger raw values earn smaller weights. Either way the result
    /// sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`AhpError::InvalidInput`] for an empty slice or any value
    /// that is not a positive finite number; inverting zero or a negative
    /// measurement has no meaning in this domain.
    pub fn normalize(values: &[f64], polarity: Polarity) -> Result<Vec<f64>, AhpError> {
        if values.is_empty() {
            return Err(AhpError::invalid_input(
                "at least one measurement is required",
            ));
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() || *v <= 0.0 {
                return Err(AhpError::invalid_input(format!(
                    "measurement at position {} must be a positive number, got {}",
                    i, v
                )));
            }
        }

        let transformed: Vec<f64> = match polarity {
            Polarity::Benefit => values.to_vec(),
            Polarity::Cost => values.iter().map(|v| 1.0 / v).collect(),
        };

        let sum: f64 = transformed.iter().sum();
        Ok(transformed.into_iter().map(|v| v / sum).collect())
    }

    /// Normalizes scores that may be zero or negative.
    ///
    /// Used for risk-adjusted scores, where `mean - lambda * variance` can
    /// go non-positive. When the minimum is at or below zero, every score
    /// is shifted to sit [`SHIFT_EPSILON`] above it before dividing by the
    /// sum.
    pub fn normalize_shifted(values: &[f64]) -> Result<Vec<f64>, AhpError> {
        if values.is_empty() {
            return Err(AhpError::invalid_input("at least one score is required"));
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(AhpError::invalid_input(format!(
                    "score at position {} must be a finite number",
                    i
                )));
            }
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let shifted: Vec<f64> = if min <= 0.0 {
            values.iter().map(|v| v - min + SHIFT_EPSILON).collect()
        } else {
            values.to_vec()
        };

        let sum: f64 = shifted.iter().sum();
        Ok(shifted.into_iter().map(|v| v / sum).collect())
    }
}
