//! Prediction domain - the per-request result record

mod entity;

pub use entity::{Outcome, PredictionRecord};
