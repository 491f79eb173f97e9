//! Serialized model artifact format.
//!
//! The artifact file declares its own shape through the `schema` tag
//! instead of relying on runtime type inspection: either a bare model,
//! or a bundle that carries the model together with training metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::loader::LoadError;
use crate::models::svm::LinearSvm;

/// Training metadata stored alongside a bundled model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Model name
    #[serde(default)]
    pub name: Option<String>,

    /// Training pipeline version
    #[serde(default)]
    pub version: Option<String>,

    /// When the model was trained
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,

    /// Free-form evaluation metrics from training
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
}

/// On-disk model artifact, tagged by its `schema` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "lowercase")]
pub enum ModelArtifact {
    /// The artifact is the model itself
    Model(LinearSvm),

    /// The artifact is a container holding the model plus metadata.
    /// `model` is optional at the serde level so a malformed bundle
    /// surfaces as [`LoadError::MissingModelKey`] rather than a generic
    /// parse error.
    Bundle {
        #[serde(default)]
        model: Option<LinearSvm>,
        #[serde(default)]
        metadata: BundleMetadata,
    },
}

impl ModelArtifact {
    /// Unwrap the artifact into the model it carries
    pub fn into_model(self) -> Result<LinearSvm, LoadError> {
        match self {
            ModelArtifact::Model(model) => Ok(model),
            ModelArtifact::Bundle {
                model: Some(model), ..
            } => Ok(model),
            ModelArtifact::Bundle { model: None, .. } => Err(LoadError::MissingModelKey),
        }
    }
}
