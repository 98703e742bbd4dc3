//! Model artifacts - serialized pre-trained models loaded from disk
//!
//! An artifact is a JSON object tagged by `family`; the tag selects the
//! `Predictor` implementation at load time. Reading is a one-shot
//! deserialization with no versioning or integrity check.

mod knn;
mod linear;
mod tree;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

pub use knn::KnnModel;
pub use linear::{LinearModel, LinearSvmModel, LogisticModel};
pub use tree::{Aggregation, Tree, TreeEnsembleModel, TreeNode, TreeTask};

use crate::domain::feature::FeatureRecord;
use crate::domain::{DomainError, Predictor};

/// Every supported model family.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Logistic(LogisticModel),
    LinearSvm(LinearSvmModel),
    TreeEnsemble(TreeEnsembleModel),
    Knn(KnnModel),
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes)
            .map_err(|e| DomainError::artifact(format!("Malformed model artifact: {}", e)))
    }

    pub fn into_predictor(self) -> Arc<dyn Predictor> {
        match self {
            Self::Linear(model) => Arc::new(model),
            Self::Logistic(model) => Arc::new(model),
            Self::LinearSvm(model) => Arc::new(model),
            Self::TreeEnsemble(model) => Arc::new(model),
            Self::Knn(model) => Arc::new(model),
        }
    }
}

/// Deserialize the artifact at `path` into a ready predictor.
pub async fn load_artifact(path: &Path) -> Result<Arc<dyn Predictor>, DomainError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        DomainError::artifact(format!("Failed to read artifact {}: {}", path.display(), e))
    })?;

    let artifact = ModelArtifact::from_slice(&bytes)?;
    debug!(path = %path.display(), "Loaded model artifact");

    Ok(artifact.into_predictor())
}

/// Dot product with an explicit feature-count check.
///
/// A silent length mismatch would produce a wrong prediction instead of an
/// error, so every family validates the record against its trained width.
pub(crate) fn dot_checked(weights: &[f64], record: &FeatureRecord) -> Result<f64, DomainError> {
    check_width(weights.len(), record)?;
    Ok(weights
        .iter()
        .zip(record.values())
        .map(|(w, x)| w * x)
        .sum())
}

pub(crate) fn check_width(expected: usize, record: &FeatureRecord) -> Result<(), DomainError> {
    if record.len() != expected {
        return Err(DomainError::validation(format!(
            "Model expects {} features, record has {}",
            expected,
            record.len()
        )));
    }
    Ok(())
}

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
