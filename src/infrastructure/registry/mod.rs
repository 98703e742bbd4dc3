//! File-backed model registry
//!
//! Resolves a static name -> filename table against a models directory at
//! construction time and lazily deserializes artifacts on first use.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{DomainError, ModelEntry, ModelRegistry, ModelSpec, Predictor};
use crate::infrastructure::artifact::load_artifact;

pub struct FileModelRegistry {
    /// Entries whose artifact exists, in declaration order.
    entries: Vec<ModelEntry>,

    /// Lazily populated name -> predictor cache. A race on first load can
    /// deserialize twice; the overwrite is harmless since loading is
    /// idempotent.
    loaded: RwLock<HashMap<String, Arc<dyn Predictor>>>,
}

impl FileModelRegistry {
    /// Check every declared spec against `dir`. Missing artifacts are
    /// logged and excluded; discovery itself never fails.
    pub fn discover_in(dir: impl Into<PathBuf>, specs: &[ModelSpec]) -> Self {
        let dir = dir.into();
        let mut entries = Vec::new();

        for spec in specs {
            let path = dir.join(spec.file);
            if path.exists() {
                entries.push(ModelEntry::new(spec.name, path, spec.accuracy));
            } else {
                warn!(model = spec.name, path = %path.display(), "Model artifact not found on disk");
            }
        }

        info!(
            available = entries.len(),
            declared = specs.len(),
            "Model registry discovered"
        );

        Self {
            entries,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }
}

#[async_trait]
impl ModelRegistry for FileModelRegistry {
    fn discover(&self) -> Vec<ModelEntry> {
        self.entries.clone()
    }

    async fn load(&self, name: &str) -> Result<Arc<dyn Predictor>, DomainError> {
        {
            let loaded = self
                .loaded
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
            if let Some(predictor) = loaded.get(name) {
                return Ok(predictor.clone());
            }
        }

        let entry = self
            .entry(name)
            .ok_or_else(|| DomainError::not_found(format!("Model '{}' not found", name)))?;

        let predictor = load_artifact(entry.path()).await?;

        let mut loaded = self
            .loaded
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        loaded.insert(name.to_string(), predictor.clone());

        Ok(predictor)
    }

    fn accuracy(&self, name: &str) -> Option<f64> {
        self.entry(name).and_then(|e| e.accuracy())
    }

    fn default_model(&self) -> Option<String> {
        // Ties resolve to the earliest declared entry.
        let mut best: Option<&ModelEntry> = None;
        for entry in &self.entries {
            let beats = match best {
                Some(b) => {
                    entry.accuracy().unwrap_or(f64::MIN) > b.accuracy().unwrap_or(f64::MIN)
                }
                None => true,
            };
            if beats {
                best = Some(entry);
            }
        }
        best.map(|e| e.name().to_string())
    }
}
