//! Depression Screening Pipeline Library
//!
//! Encodes demographic and lifestyle answers into the fixed feature
//! schema a pre-trained SVM classifier expects, runs inference, and
//! produces a screening report.

pub mod config;
pub mod context;
pub mod feature_encoder;
pub mod models;
pub mod render;
pub mod types;

pub use config::AppConfig;
pub use context::{AppContext, Screening};
pub use feature_encoder::{FeatureEncoder, FeatureVector};
pub use models::inference::ScreeningEngine;
pub use models::loader::{LoadError, ModelLoader};
pub use render::ReportRenderer;
pub use types::{answers::UserAnswers, prediction::Prediction};
