//! Registry contract

use std::sync::Arc;

use async_trait::async_trait;

use super::{ModelEntry, Predictor};
use crate::domain::DomainError;

/// Maps display names to on-disk model artifacts.
///
/// Entries whose artifact is missing are reported at discovery and excluded
/// from the selectable set; a missing entry is degraded service, not a
/// fatal error.
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    /// Entries whose artifacts exist on disk.
    fn discover(&self) -> Vec<ModelEntry>;

    /// Load a model by display name. Idempotent: the deserialized handle
    /// is cached after the first call.
    async fn load(&self, name: &str) -> Result<Arc<dyn Predictor>, DomainError>;

    /// Hand-entered accuracy for an available model, if recorded.
    fn accuracy(&self, name: &str) -> Option<f64>;

    /// Highest-accuracy available model, used to pre-select the form.
    fn default_model(&self) -> Option<String>;
}
