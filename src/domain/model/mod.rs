//! Model domain - registry entries, the predictor interface and the
//! registry contract

mod entity;
mod predictor;
mod registry;

pub use entity::{ModelEntry, ModelSpec};
pub use predictor::Predictor;
pub use registry::ModelRegistry;
