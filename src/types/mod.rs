//! Type definitions for the depression screening pipeline

pub mod answers;
pub mod prediction;

pub use answers::{Gender, SleepDuration, UserAnswers};
pub use prediction::{Prediction, ScreeningOutcome, ScreeningReport};
