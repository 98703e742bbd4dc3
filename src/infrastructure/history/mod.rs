//! In-process history store implementations

mod in_memory;

pub use in_memory::{BoundedHistory, SessionHistory};
