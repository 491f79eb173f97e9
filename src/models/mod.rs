//! Model artifact format, loading, and inference

pub mod artifact;
pub mod inference;
pub mod loader;
pub mod svm;

pub use artifact::ModelArtifact;
pub use inference::ScreeningEngine;
pub use loader::{LoadError, ModelLoader};
pub use svm::LinearSvm;
