//! Inference over the loaded screening model

use anyhow::{bail, Result};
use tracing::debug;

use crate::config::AppConfig;
use crate::feature_encoder::FeatureVector;
use crate::models::loader::{LoadError, ModelLoader};
use crate::models::svm::LinearSvm;
use crate::types::prediction::Prediction;

/// Screening engine holding the loaded model.
///
/// The model is read-only after construction, so the engine can be
/// shared freely across requests without locking.
pub struct ScreeningEngine {
    model: LinearSvm,
}

impl ScreeningEngine {
    /// Create an engine by loading the model named in the configuration
    pub fn new(config: &AppConfig) -> Result<Self, LoadError> {
        let model = ModelLoader::load(&config.model.path)?;
        Ok(Self { model })
    }

    /// Create an engine from an already-loaded model
    pub fn from_model(model: LinearSvm) -> Self {
        Self { model }
    }

    /// Number of feature columns the model expects
    pub fn feature_count(&self) -> usize {
        self.model.n_features()
    }

    /// Run inference on an encoded feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        if self.model.n_features() != FeatureVector::FEATURE_COUNT {
            bail!(
                "model/schema mismatch: {} weights vs {} columns",
                self.model.n_features(),
                FeatureVector::FEATURE_COUNT
            );
        }

        let predicted_class = self.model.predict(features);
        let probabilities = self.model.predict_probabilities(features);

        debug!(
            class = predicted_class,
            p_negative = probabilities[0],
            p_positive = probabilities[1],
            "Inference complete"
        );

        Ok(Prediction {
            predicted_class,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_encoder::FeatureEncoder;
    use crate::models::svm::Calibration;
    use crate::types::answers::{Gender, SleepDuration, UserAnswers};

    fn engine() -> ScreeningEngine {
        ScreeningEngine::from_model(LinearSvm {
            weights: vec![
                0.01, 0.04, -0.05, -0.3, 0.5, -0.1, 0.2, 0.1, 0.2, 0.35, 0.5, 0.0, 0.4, 1.1,
            ],
            bias: -1.2,
            calibration: Calibration::default(),
        })
    }

    #[test]
    fn test_predict_produces_consistent_prediction() {
        let answers = UserAnswers::new(
            25,
            8,
            Gender::Male,
            SleepDuration::UnderFiveHours,
            3,
            true,
            false,
        );
        let features = FeatureEncoder::new().encode(&answers);

        let prediction = engine().predict(&features).unwrap();

        let probs = prediction.probabilities;
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-9);

        let argmax = if probs[1] >= probs[0] { 1 } else { 0 };
        assert_eq!(prediction.predicted_class, argmax);
    }

    #[test]
    fn test_predict_rejects_mismatched_model() {
        let engine = ScreeningEngine::from_model(LinearSvm {
            weights: vec![0.1; 3],
            bias: 0.0,
            calibration: Calibration::default(),
        });

        let features = FeatureVector::default();
        assert!(engine.predict(&features).is_err());
    }
}
