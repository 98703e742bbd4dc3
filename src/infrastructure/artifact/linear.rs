//! Linear model families: regressor, logistic classifier, linear SVM

use serde::Deserialize;

use super::{dot_checked, sigmoid};
use crate::domain::feature::FeatureRecord;
use crate::domain::{DomainError, Predictor};

/// Plain linear regressor: `y = w . x + b`
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl Predictor for LinearModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        Ok(dot_checked(&self.weights, record)? + self.intercept)
    }
}

/// Binary logistic classifier; exposes the positive-class probability.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    fn probability(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        Ok(sigmoid(dot_checked(&self.weights, record)? + self.intercept))
    }
}

impl Predictor for LogisticModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        let p = self.probability(record)?;
        Ok(if p >= 0.5 { 1.0 } else { 0.0 })
    }

    fn predict_confidence(&self, record: &FeatureRecord) -> Option<f64> {
        self.probability(record).ok()
    }
}

/// Linear SVM: sign of the decision function. No probability estimate, so
/// `predict_confidence` stays at the trait default.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearSvmModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl Predictor for LinearSvmModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        let decision = dot_checked(&self.weights, record)? + self.intercept;
        Ok(if decision > 0.0 { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[f64]) -> FeatureRecord {
        FeatureRecord::new(values.to_vec(), Vec::new())
    }

    #[test]
    fn test_linear_regression() {
        let model = LinearModel {
            weights: vec![2.0, -1.0],
            intercept: 0.5,
        };

        let y = model.predict(&record(&[3.0, 1.0])).unwrap();
        assert!((y - 5.5).abs() < 1e-12);
        assert!(model.predict_confidence(&record(&[3.0, 1.0])).is_none());
    }

    #[test]
    fn test_logistic_classifies_and_reports_confidence() {
        let model = LogisticModel {
            weights: vec![1.0, 1.0],
            intercept: -1.0,
        };

        // w.x + b = 2.0 -> positive class
        let rec = record(&[1.5, 1.5]);
        assert_eq!(model.predict(&rec).unwrap(), 1.0);

        let confidence = model.predict_confidence(&rec).unwrap();
        assert!(confidence > 0.5);

        // w.x + b = -1.0 -> negative class
        let rec = record(&[0.0, 0.0]);
        assert_eq!(model.predict(&rec).unwrap(), 0.0);
    }

    #[test]
    fn test_svm_has_no_confidence() {
        let model = LinearSvmModel {
            weights: vec![1.0],
            intercept: -0.5,
        };

        let rec = record(&[1.0]);
        assert_eq!(model.predict(&rec).unwrap(), 1.0);
        assert!(model.predict_confidence(&rec).is_none());
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let model = LinearModel {
            weights: vec![1.0, 2.0],
            intercept: 0.0,
        };

        assert!(model.predict(&record(&[1.0])).is_err());
    }
}
