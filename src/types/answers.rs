//! User answer data structures for depression screening

use serde::{Deserialize, Serialize};

/// Gender of the respondent. Female is the baseline category dropped
/// during training, so it has no feature slot of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Usual sleep duration, using the category labels from the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepDuration {
    /// Less than 5 hours
    #[serde(rename = "Less than 5 hours")]
    UnderFiveHours,

    /// 5-6 hours
    #[serde(rename = "5-6 hours")]
    FiveToSixHours,

    /// 7-8 hours
    #[serde(rename = "7-8 hours")]
    SevenToEightHours,

    /// More than 8 hours
    #[serde(rename = "More than 8 hours")]
    OverEightHours,
}

/// One screening submission. Ranges are enforced by the form layer that
/// collects the answers; the core treats every constructed value as valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswers {
    /// Age in years (15-60)
    #[serde(alias = "Age")]
    pub age: u32,

    /// Daily work/study hours (0-16)
    #[serde(alias = "Work/Study Hours")]
    pub work_study_hours: u32,

    /// Gender
    #[serde(alias = "Gender")]
    pub gender: Gender,

    /// Usual sleep duration
    #[serde(alias = "Sleep Duration")]
    pub sleep_duration: SleepDuration,

    /// Financial stress level (1 = very low, 5 = very high)
    #[serde(alias = "Financial Stress")]
    pub financial_stress: u8,

    /// Family history of mental illness
    #[serde(alias = "Family History of Mental Illness")]
    pub family_history: bool,

    /// Has ever had suicidal thoughts
    #[serde(alias = "Suicidal Thoughts")]
    pub suicidal_thoughts: bool,
}

impl UserAnswers {
    /// Create a new answers record
    pub fn new(
        age: u32,
        work_study_hours: u32,
        gender: Gender,
        sleep_duration: SleepDuration,
        financial_stress: u8,
        family_history: bool,
        suicidal_thoughts: bool,
    ) -> Self {
        Self {
            age,
            work_study_hours,
            gender,
            sleep_duration,
            financial_stress,
            family_history,
            suicidal_thoughts,
        }
    }
}
