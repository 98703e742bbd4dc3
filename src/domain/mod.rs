//! Domain types and contracts

pub mod error;
pub mod feature;
pub mod history;
pub mod model;
pub mod prediction;

pub use error::DomainError;
pub use feature::{adapt_form, snapshot_form, FeatureField, FeatureRecord, FeatureSchema, FieldKind};
pub use history::HistoryStore;
pub use model::{ModelEntry, ModelRegistry, ModelSpec, Predictor};
pub use prediction::{Outcome, PredictionRecord};
