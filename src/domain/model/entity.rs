//! Registry entry types

use std::path::PathBuf;

/// Static declaration of a model: display name, artifact filename relative
/// to the configured models directory, and an optional hand-entered
/// accuracy (reported, not computed).
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub name: &'static str,
    pub file: &'static str,
    pub accuracy: Option<f64>,
}

impl ModelSpec {
    pub fn new(name: &'static str, file: &'static str) -> Self {
        Self {
            name,
            file,
            accuracy: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// A registry entry whose artifact was confirmed to exist on disk.
#[derive(Debug, Clone)]
pub struct ModelEntry {
    name: String,
    path: PathBuf,
    accuracy: Option<f64>,
}

impl ModelEntry {
    pub fn new(name: impl Into<String>, path: PathBuf, accuracy: Option<f64>) -> Self {
        Self {
            name: name.into(),
            path,
            accuracy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }
}
