//! Prediction and screening report data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Screening outcome classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningOutcome {
    /// Class 0: no indication of depressive symptoms
    Negative,
    /// Class 1: potential indication of depressive symptoms
    Positive,
}

impl ScreeningOutcome {
    /// Map a model class label to an outcome
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            ScreeningOutcome::Positive
        } else {
            ScreeningOutcome::Negative
        }
    }
}

/// Result of model inference for one submission
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Predicted class label (0 = negative, 1 = positive)
    pub predicted_class: u8,
    /// Class probabilities `[p_negative, p_positive]`, summing to 1
    pub probabilities: [f64; 2],
}

impl Prediction {
    /// Probability of the predicted class
    pub fn confidence(&self) -> f64 {
        self.probabilities[self.predicted_class as usize]
    }

    /// Whether the model predicted the positive (depressive symptoms) class
    pub fn is_positive(&self) -> bool {
        self.predicted_class == 1
    }

    /// Convert the prediction into a timestamped screening report
    pub fn to_report(&self) -> ScreeningReport {
        ScreeningReport::new(
            ScreeningOutcome::from_class(self.predicted_class),
            self.confidence(),
            self.probabilities,
        )
    }
}

/// Screening report produced for one submission. Derived from a
/// [`Prediction`]; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Unique report identifier
    pub report_id: String,

    /// Screening outcome
    pub outcome: ScreeningOutcome,

    /// Probability of the predicted class (0.0 - 1.0)
    pub confidence: f64,

    /// Class probabilities `[p_negative, p_positive]`
    pub probabilities: [f64; 2],

    /// Report generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl ScreeningReport {
    /// Create a new screening report
    pub fn new(outcome: ScreeningOutcome, confidence: f64, probabilities: [f64; 2]) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            outcome,
            confidence,
            probabilities,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(ScreeningOutcome::from_class(0), ScreeningOutcome::Negative);
        assert_eq!(ScreeningOutcome::from_class(1), ScreeningOutcome::Positive);
    }

    #[test]
    fn test_prediction_confidence() {
        let prediction = Prediction {
            predicted_class: 1,
            probabilities: [0.22, 0.78],
        };

        assert!(prediction.is_positive());
        assert_eq!(prediction.confidence(), 0.78);
    }

    #[test]
    fn test_report_serialization() {
        let prediction = Prediction {
            predicted_class: 0,
            probabilities: [0.91, 0.09],
        };

        let report = prediction.to_report();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ScreeningReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.report_id, deserialized.report_id);
        assert_eq!(report.outcome, deserialized.outcome);
        assert_eq!(report.confidence, deserialized.confidence);
    }
}
