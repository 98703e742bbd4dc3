//! Inference handler - adapts a form, calls the predictor and formats a
//! `PredictionRecord`

use std::collections::HashMap;

use tracing::warn;

use crate::domain::feature::{adapt_form, snapshot_form, FeatureSchema};
use crate::domain::prediction::{Outcome, PredictionRecord};
use crate::domain::{DomainError, Predictor};

/// Regression values are rounded to this many decimals for display.
const REGRESSION_DECIMALS: i32 = 4;

/// Confidence percentages are rounded to this many decimals.
const CONFIDENCE_DECIMALS: i32 = 2;

#[derive(Debug, Clone, Copy)]
enum Task {
    Regression,
    Classification {
        positive: &'static str,
        negative: &'static str,
    },
}

/// Turns raw form submissions into prediction records for one task kind.
#[derive(Debug, Clone, Copy)]
pub struct InferenceService {
    task: Task,
}

impl InferenceService {
    pub fn regression() -> Self {
        Self {
            task: Task::Regression,
        }
    }

    pub fn classification(positive: &'static str, negative: &'static str) -> Self {
        Self {
            task: Task::Classification { positive, negative },
        }
    }

    /// Full form flow: adapt, predict, format. A predictor failure is
    /// captured as an inline error outcome rather than propagated; the
    /// record always carries a verbatim snapshot of the submitted values.
    pub fn run(
        &self,
        model_name: &str,
        predictor: &dyn Predictor,
        schema: &FeatureSchema,
        form: &HashMap<String, String>,
    ) -> PredictionRecord {
        let record = adapt_form(schema, form);
        let snapshot = snapshot_form(schema, form);

        let (outcome, confidence) = match predictor.predict(&record) {
            Ok(raw) => match self.task {
                Task::Regression => (Outcome::Value(round_to(raw, REGRESSION_DECIMALS)), None),
                Task::Classification { positive, negative } => {
                    let label = if raw >= 0.5 { positive } else { negative };
                    let confidence = predictor
                        .predict_confidence(&record)
                        .map(|p| round_to(p * 100.0, CONFIDENCE_DECIMALS));
                    (Outcome::Label(label.to_string()), confidence)
                }
            },
            Err(e) => {
                warn!(model = model_name, error = %e, "Prediction failed");
                (Outcome::Failed(e.to_string()), None)
            }
        };

        PredictionRecord::new(model_name, outcome)
            .with_confidence(confidence)
            .with_inputs(snapshot)
    }

    /// JSON flow: adapt and predict, returning the raw unrounded value.
    pub fn raw(
        &self,
        predictor: &dyn Predictor,
        schema: &FeatureSchema,
        form: &HashMap<String, String>,
    ) -> Result<f64, DomainError> {
        predictor.predict(&adapt_form(schema, form))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feature::{FeatureField, FeatureRecord};

    struct FixedPredictor {
        value: f64,
        confidence: Option<f64>,
    }

    impl Predictor for FixedPredictor {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, DomainError> {
            Ok(self.value)
        }

        fn predict_confidence(&self, _record: &FeatureRecord) -> Option<f64> {
            self.confidence
        }
    }

    struct FailingPredictor;

    impl Predictor for FailingPredictor {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, DomainError> {
            Err(DomainError::prediction("model exploded"))
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec![FeatureField::float("x"), FeatureField::float("y")])
    }

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_regression_rounds_to_four_decimals() {
        let service = InferenceService::regression();
        let predictor = FixedPredictor {
            value: 4.7512349,
            confidence: None,
        };

        let record = service.run("gb", &predictor, &schema(), &form(&[("x", "1"), ("y", "2")]));

        assert_eq!(record.prediction, Outcome::Value(4.7512));
        assert!(record.confidence.is_none());
    }

    #[test]
    fn test_classification_maps_binary_code_to_label() {
        let service = InferenceService::classification("Placed", "Not Placed");

        let positive = FixedPredictor {
            value: 1.0,
            confidence: Some(0.876543),
        };
        let record = service.run("lr", &positive, &schema(), &form(&[]));
        assert_eq!(record.prediction, Outcome::Label("Placed".to_string()));
        assert_eq!(record.confidence, Some(87.65));

        let negative = FixedPredictor {
            value: 0.0,
            confidence: None,
        };
        let record = service.run("svm", &negative, &schema(), &form(&[]));
        assert_eq!(record.prediction, Outcome::Label("Not Placed".to_string()));
        assert!(record.confidence.is_none());
    }

    #[test]
    fn test_failure_is_captured_inline_not_propagated() {
        let service = InferenceService::regression();
        let record = service.run("gb", &FailingPredictor, &schema(), &form(&[("x", "1")]));

        assert!(record.prediction.is_failure());
        assert!(record.prediction.to_string().contains("model exploded"));
    }

    #[test]
    fn test_snapshot_keeps_raw_values_verbatim() {
        let service = InferenceService::regression();
        let predictor = FixedPredictor {
            value: 0.0,
            confidence: None,
        };

        let record = service.run(
            "gb",
            &predictor,
            &schema(),
            &form(&[("x", "not-a-number"), ("y", " 7 ")]),
        );

        assert_eq!(
            record.inputs,
            vec![
                ("x".to_string(), "not-a-number".to_string()),
                ("y".to_string(), " 7 ".to_string()),
            ]
        );
    }

    #[test]
    fn test_raw_returns_unrounded_value() {
        let service = InferenceService::regression();
        let predictor = FixedPredictor {
            value: 4.7512349,
            confidence: None,
        };

        let raw = service
            .raw(&predictor, &schema(), &form(&[("x", "1"), ("y", "2")]))
            .unwrap();
        assert_eq!(raw, 4.7512349);
    }
}
