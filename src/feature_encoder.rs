//! Feature encoding for depression screening model inference.
//!
//! This module encodes user answers into the feature columns that were
//! used during Python model training.

use crate::types::answers::{Gender, SleepDuration, UserAnswers};

/// Fixed-order feature vector matching the training-time schema.
///
/// Field declaration order IS the column order the model was trained
/// with; reordering fields silently corrupts predictions. Default
/// value for every slot is 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    /// Age
    pub age: f32,
    /// Work/Study Hours
    pub work_study_hours: f32,
    /// Gender_Male
    pub gender_male: f32,
    /// Sleep Duration_'7-8 hours'
    pub sleep_7_8_hours: f32,
    /// Sleep Duration_'Less than 5 hours'
    pub sleep_under_5_hours: f32,
    /// Sleep Duration_'More than 8 hours'
    pub sleep_over_8_hours: f32,
    /// Sleep Duration_Others
    pub sleep_others: f32,
    /// Financial Stress_2.0
    pub financial_stress_2: f32,
    /// Financial Stress_3.0
    pub financial_stress_3: f32,
    /// Financial Stress_4.0
    pub financial_stress_4: f32,
    /// Financial Stress_5.0
    pub financial_stress_5: f32,
    /// Financial Stress_? — placeholder column from training; never set
    pub financial_stress_unknown: f32,
    /// Family History of Mental Illness_Yes
    pub family_history_yes: f32,
    /// Have you ever had suicidal thoughts ?_Yes
    pub suicidal_thoughts_yes: f32,
}

impl FeatureVector {
    /// Number of feature columns the model expects
    pub const FEATURE_COUNT: usize = 14;

    /// Flatten into a vector in training column order
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.age,
            self.work_study_hours,
            self.gender_male,
            self.sleep_7_8_hours,
            self.sleep_under_5_hours,
            self.sleep_over_8_hours,
            self.sleep_others,
            self.financial_stress_2,
            self.financial_stress_3,
            self.financial_stress_4,
            self.financial_stress_5,
            self.financial_stress_unknown,
            self.family_history_yes,
            self.suicidal_thoughts_yes,
        ]
    }

    /// Training column names, in column order (matching the columns the
    /// one-hot encoding produced from the original dataset).
    pub fn feature_names() -> [&'static str; Self::FEATURE_COUNT] {
        [
            "Age",
            "Work/Study Hours",
            "Gender_Male",
            "Sleep Duration_'7-8 hours'",
            "Sleep Duration_'Less than 5 hours'",
            "Sleep Duration_'More than 8 hours'",
            "Sleep Duration_Others",
            "Financial Stress_2.0",
            "Financial Stress_3.0",
            "Financial Stress_4.0",
            "Financial Stress_5.0",
            "Financial Stress_?",
            "Family History of Mental Illness_Yes",
            "Have you ever had suicidal thoughts ?_Yes",
        ]
    }

    /// Column names paired with their encoded values, in column order
    pub fn named_values(&self) -> Vec<(&'static str, f32)> {
        Self::feature_names()
            .into_iter()
            .zip(self.to_vec())
            .collect()
    }
}

/// Encoder that transforms user answers into model input features.
///
/// Matches the preprocessing done in the Python training pipeline.
/// Pure and deterministic: the same answers always produce the same
/// vector.
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new feature encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode answers into the 14-column feature vector.
    ///
    /// One-hot categories with no matching answer stay 0, which covers
    /// the baseline categories (Female, financial stress level 1) that
    /// were dropped during training.
    pub fn encode(&self, answers: &UserAnswers) -> FeatureVector {
        let mut features = FeatureVector::default();

        features.age = answers.age as f32;
        features.work_study_hours = answers.work_study_hours as f32;

        if answers.gender == Gender::Male {
            features.gender_male = 1.0;
        }

        // The training data collapsed every sleep category outside the
        // three named ones (including "5-6 hours") into Others. That
        // collapsing is part of the trained schema and is reproduced
        // here as-is.
        match answers.sleep_duration {
            SleepDuration::SevenToEightHours => features.sleep_7_8_hours = 1.0,
            SleepDuration::UnderFiveHours => features.sleep_under_5_hours = 1.0,
            SleepDuration::OverEightHours => features.sleep_over_8_hours = 1.0,
            SleepDuration::FiveToSixHours => features.sleep_others = 1.0,
        }

        // Level 1 is the dropped baseline. The Financial Stress_?
        // column stays 0 for every input; it only exists to match the
        // trained column count.
        match answers.financial_stress {
            2 => features.financial_stress_2 = 1.0,
            3 => features.financial_stress_3 = 1.0,
            4 => features.financial_stress_4 = 1.0,
            5 => features.financial_stress_5 = 1.0,
            _ => {}
        }

        if answers.family_history {
            features.family_history_yes = 1.0;
        }

        if answers.suicidal_thoughts {
            features.suicidal_thoughts_yes = 1.0;
        }

        features
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FeatureVector::FEATURE_COUNT
    }
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self::new()
    }
}
