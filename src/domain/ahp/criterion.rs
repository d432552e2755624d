//! Criterion metadata: polarity and evaluation mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher raw values are preferred (benefit) or lower (cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Benefit,
    Cost,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Benefit => write!(f, "benefit"),
            Polarity::Cost => write!(f, "cost"),
        }
    }
}

/// How alternatives are compared under a criterion.
///
/// - `Objective`: measured numeric values per alternative.
/// - `Subjective`: pairwise human judgments over alternatives.
/// - `Uncertain`: expected value and variance per alternative, collapsed
///   into a risk-adjusted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Objective,
    Subjective,
    Uncertain,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Objective => write!(f, "objective"),
            EvaluationMode::Subjective => write!(f, "subjective"),
            EvaluationMode::Uncertain => write!(f, "uncertain"),
        }
    }
}

/// A decision criterion. Immutable once the evaluation session is set up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub polarity: Polarity,
    pub mode: EvaluationMode,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, polarity: Polarity, mode: EvaluationMode) -> Self {
        Self {
            name: name.into(),
            polarity,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Polarity::Benefit).unwrap(), "\"benefit\"");
        assert_eq!(serde_json::to_string(&Polarity::Cost).unwrap(), "\"cost\"");

        let parsed: Polarity = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(parsed, Polarity::Cost);
    }

    #[test]
    fn mode_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&EvaluationMode::Subjective).unwrap(),
            "\"subjective\""
        );

        let parsed: EvaluationMode = serde_json::from_str("\"uncertain\"").unwrap();
        assert_eq!(parsed, EvaluationMode::Uncertain);
    }

    #[test]
    fn display_matches_wire_vocabulary() {
        assert_eq!(Polarity::Benefit.to_string(), "benefit");
        assert_eq!(EvaluationMode::Objective.to_string(), "objective");
    }

    #[test]
    fn criterion_construction() {
        let c = Criterion::new("Price", Polarity::Cost, EvaluationMode::Objective);
        assert_eq!(c.name, "Price");
        assert_eq!(c.polarity, Polarity::Cost);
        assert_eq!(c.mode, EvaluationMode::Objective);
    }
}
