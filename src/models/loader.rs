//! Model artifact loader

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::feature_encoder::FeatureVector;
use crate::models::artifact::ModelArtifact;
use crate::models::svm::LinearSvm;

/// Errors raised while bootstrapping the model. All of them are
/// terminal: without a model, screening is refused entirely.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The artifact path does not resolve to a readable file
    #[error("model file not found at {0}")]
    FileNotFound(PathBuf),

    /// The artifact is a bundle but carries no model
    #[error("artifact bundle has no model entry")]
    MissingModelKey,

    /// The artifact could not be read or deserialized
    #[error("failed to load model artifact")]
    LoadFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The model's weight count does not match the feature schema
    #[error("model expects {actual} features but the schema has {expected}")]
    SchemaMismatch { expected: usize, actual: usize },
}

/// Loader for serialized SVM artifacts
pub struct ModelLoader;

impl ModelLoader {
    /// Load the model from an artifact file.
    ///
    /// Meant to be called once at startup; the result is owned by the
    /// application context for the rest of the process lifetime, so no
    /// caching happens here.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LinearSvm, LoadError> {
        let path = path.as_ref();

        info!(path = %path.display(), "Loading model artifact");

        let raw = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LoadError::FileNotFound(path.to_path_buf())
            } else {
                LoadError::LoadFailure(Box::new(e))
            }
        })?;

        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| LoadError::LoadFailure(Box::new(e)))?;

        let model = artifact.into_model()?;

        // Validate the capability contract at load time so a wrong
        // artifact fails here instead of at first prediction.
        if model.n_features() != FeatureVector::FEATURE_COUNT {
            return Err(LoadError::SchemaMismatch {
                expected: FeatureVector::FEATURE_COUNT,
                actual: model.n_features(),
            });
        }

        info!(features = model.n_features(), "Model loaded successfully");

        Ok(model)
    }
}
