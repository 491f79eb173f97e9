//! Application context constructed once at startup.
//!
//! Holds the loaded model and the encoder, and is handed by reference
//! to whatever drives submissions. This replaces any notion of a
//! cached global: the model lives here for the process lifetime.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::feature_encoder::{FeatureEncoder, FeatureVector};
use crate::models::inference::ScreeningEngine;
use crate::types::answers::UserAnswers;
use crate::types::prediction::Prediction;

/// Outcome of screening one submission: the encoded vector (kept for
/// the report's detail view) and the model's prediction.
#[derive(Debug)]
pub struct Screening {
    pub features: FeatureVector,
    pub prediction: Prediction,
}

/// Application context: configuration, encoder, and the loaded model
pub struct AppContext {
    config: AppConfig,
    encoder: FeatureEncoder,
    engine: ScreeningEngine,
}

impl AppContext {
    /// Bootstrap the context from configuration.
    ///
    /// Loads the model exactly once; a failure here is terminal for the
    /// process since there is no degraded mode without a model.
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        let engine = ScreeningEngine::new(&config)
            .context("model bootstrap failed; screening is unavailable")?;

        let encoder = FeatureEncoder::new();

        info!(
            features = encoder.feature_count(),
            model_path = %config.model.path,
            "Application context initialized"
        );

        Ok(Self {
            config,
            encoder,
            engine,
        })
    }

    /// Access the loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Screen one submission: encode the answers, run inference
    pub fn screen(&self, answers: &UserAnswers) -> Result<Screening> {
        let features = self.encoder.encode(answers);
        let prediction = self.engine.predict(&features)?;

        debug!(
            class = prediction.predicted_class,
            confidence = prediction.confidence(),
            "Submission screened"
        );

        Ok(Screening {
            features,
            prediction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::svm::{Calibration, LinearSvm};
    use crate::types::answers::{Gender, SleepDuration};

    fn context() -> AppContext {
        let model = LinearSvm {
            weights: vec![
                0.01, 0.04, -0.05, -0.3, 0.5, -0.1, 0.2, 0.1, 0.2, 0.35, 0.5, 0.0, 0.4, 1.1,
            ],
            bias: -1.2,
            calibration: Calibration::default(),
        };

        AppContext {
            config: AppConfig::default(),
            encoder: FeatureEncoder::new(),
            engine: ScreeningEngine::from_model(model),
        }
    }

    #[test]
    fn test_screen_end_to_end() {
        let ctx = context();
        let answers = UserAnswers::new(
            25,
            8,
            Gender::Male,
            SleepDuration::UnderFiveHours,
            3,
            true,
            false,
        );

        let screening = ctx.screen(&answers).unwrap();

        assert_eq!(screening.features.age, 25.0);
        assert_eq!(screening.features.suicidal_thoughts_yes, 0.0);

        let probs = screening.prediction.probabilities;
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_screening_is_deterministic() {
        let ctx = context();
        let answers = UserAnswers::new(
            40,
            10,
            Gender::Female,
            SleepDuration::FiveToSixHours,
            5,
            false,
            true,
        );

        let first = ctx.screen(&answers).unwrap();
        let second = ctx.screen(&answers).unwrap();

        assert_eq!(first.features, second.features);
        assert_eq!(
            first.prediction.predicted_class,
            second.prediction.predicted_class
        );
        assert_eq!(first.prediction.probabilities, second.prediction.probabilities);
    }
}
