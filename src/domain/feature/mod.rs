//! Feature domain - declared input schemas and form-to-record adaptation

mod adapter;
mod entity;

pub use adapter::{adapt_form, snapshot_form};
pub use entity::{FeatureField, FeatureRecord, FeatureSchema, FieldKind};
