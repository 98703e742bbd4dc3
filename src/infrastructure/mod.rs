//! Infrastructure - concrete implementations of the domain contracts

pub mod artifact;
pub mod history;
pub mod inference;
pub mod logging;
pub mod registry;

pub use history::{BoundedHistory, SessionHistory};
pub use inference::InferenceService;
pub use registry::FileModelRegistry;
