//! Predictor interface implemented by every model family
//!
//! Replaces run-time capability probing on an opaque deserialized object:
//! the artifact's family tag selects an implementation at load time, and
//! families without a probability estimate keep the default `None`.

use crate::domain::feature::FeatureRecord;
use crate::domain::DomainError;

pub trait Predictor: Send + Sync {
    /// Raw model output: a regression value, or a binary class code for
    /// classifiers.
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError>;

    /// Positive-class probability, for families that support it.
    fn predict_confidence(&self, _record: &FeatureRecord) -> Option<f64> {
        None
    }
}
