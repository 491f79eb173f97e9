//! Linear SVM with Platt-scaled probability estimates.
//!
//! The trained classifier is a linear SVM exported from the Python
//! training pipeline: a weight per feature column, a bias term, and the
//! sigmoid calibration fitted on the decision margin.

use serde::{Deserialize, Serialize};

use crate::feature_encoder::FeatureVector;

/// Platt scaling coefficients: `p(class=1) = 1 / (1 + exp(a*d + b))`
/// where `d` is the decision margin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Calibration {
    pub a: f64,
    pub b: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        // Plain sigmoid over the margin when no calibration was fitted
        Self { a: -1.0, b: 0.0 }
    }
}

/// A trained linear SVM over the 14-column screening schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvm {
    /// One weight per feature column, in training column order
    pub weights: Vec<f32>,
    /// Bias term
    pub bias: f32,
    /// Probability calibration
    #[serde(default)]
    pub calibration: Calibration,
}

impl LinearSvm {
    /// Number of feature columns this model was trained on
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Signed distance of the feature vector from the decision boundary
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        let x = features.to_vec();
        let dot: f64 = self
            .weights
            .iter()
            .zip(x.iter())
            .map(|(&w, &v)| (w * v) as f64)
            .sum();
        dot + self.bias as f64
    }

    /// Class probabilities `[p_negative, p_positive]`, summing to 1
    pub fn predict_probabilities(&self, features: &FeatureVector) -> [f64; 2] {
        let margin = self.decision_function(features);
        let p_positive = 1.0 / (1.0 + (self.calibration.a * margin + self.calibration.b).exp());
        [1.0 - p_positive, p_positive]
    }

    /// Predicted class label (0 or 1), consistent with the calibrated
    /// probabilities: the class with the higher probability wins.
    pub fn predict(&self, features: &FeatureVector) -> u8 {
        let probabilities = self.predict_probabilities(features);
        if probabilities[1] >= probabilities[0] {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearSvm {
        LinearSvm {
            weights: vec![
                0.02, 0.05, -0.1, -0.3, 0.4, -0.2, 0.1, 0.1, 0.2, 0.3, 0.4, 0.0, 0.3, 0.9,
            ],
            bias: -1.5,
            calibration: Calibration::default(),
        }
    }

    #[test]
    fn test_decision_function() {
        let model = model();
        let features = FeatureVector {
            age: 25.0,
            work_study_hours: 8.0,
            ..Default::default()
        };

        // 25*0.02 + 8*0.05 - 1.5 = -0.6
        let margin = model.decision_function(&features);
        assert!((margin - (-0.6)).abs() < 1e-6);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = model();
        let features = FeatureVector {
            age: 40.0,
            work_study_hours: 12.0,
            suicidal_thoughts_yes: 1.0,
            ..Default::default()
        };

        let probs = model.predict_probabilities(&features);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-9);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_predict_agrees_with_probabilities() {
        let model = model();
        let negative = FeatureVector {
            age: 20.0,
            ..Default::default()
        };
        let positive = FeatureVector {
            age: 60.0,
            work_study_hours: 16.0,
            suicidal_thoughts_yes: 1.0,
            family_history_yes: 1.0,
            ..Default::default()
        };

        for features in [&negative, &positive] {
            let class = model.predict(features);
            let probs = model.predict_probabilities(features);
            let argmax = if probs[1] >= probs[0] { 1 } else { 0 };
            assert_eq!(class, argmax);
        }
    }
}
