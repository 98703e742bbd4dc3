//! Application state for shared services

use std::sync::Arc;

use crate::domain::feature::FeatureSchema;
use crate::domain::{HistoryStore, ModelRegistry};
use crate::infrastructure::InferenceService;

/// Shared per-app state: which models exist, how to run them, where
/// results go and what the form looks like.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ModelRegistry>,
    pub history: Arc<dyn HistoryStore>,
    pub inference: Arc<InferenceService>,
    pub schema: Arc<FeatureSchema>,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn ModelRegistry>,
        history: Arc<dyn HistoryStore>,
        inference: Arc<InferenceService>,
        schema: Arc<FeatureSchema>,
    ) -> Self {
        Self {
            registry,
            history,
            inference,
            schema,
        }
    }
}
