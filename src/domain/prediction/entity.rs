//! Prediction record entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the model produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Regression value, already rounded for display
    Value(f64),

    /// Classification label ("Placed" / "Not Placed")
    Label(String),

    /// Prediction call failed; the message is shown in place of a result
    Failed(String),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Label(label) => write!(f, "{}", label),
            Self::Failed(message) => write!(f, "Prediction error: {}", message),
        }
    }
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One past prediction, as shown in the history table.
///
/// `inputs` is a verbatim ordered snapshot of the raw submitted form
/// values; no coercion is applied to the stored copy.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    pub timestamp: DateTime<Utc>,
    pub model_name: String,
    pub prediction: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub inputs: Vec<(String, String)>,
}

impl PredictionRecord {
    pub fn new(model_name: impl Into<String>, prediction: Outcome) -> Self {
        Self {
            timestamp: Utc::now(),
            model_name: model_name.into(),
            prediction,
            confidence: None,
            inputs: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: Option<f64>) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<(String, String)>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Timestamp formatted the way the history table displays it.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Value(5.1234).to_string(), "5.1234");
        assert_eq!(Outcome::Label("Placed".to_string()).to_string(), "Placed");
        assert_eq!(
            Outcome::Failed("boom".to_string()).to_string(),
            "Prediction error: boom"
        );
    }

    #[test]
    fn test_record_keeps_inputs_verbatim() {
        let inputs = vec![
            ("Present_Price".to_string(), " 5.5 ".to_string()),
            ("Owner".to_string(), "abc".to_string()),
        ];
        let record = PredictionRecord::new("gb", Outcome::Value(1.0)).with_inputs(inputs.clone());

        assert_eq!(record.inputs, inputs);
    }

    #[test]
    fn test_outcome_serializes_untagged() {
        let json = serde_json::to_string(&Outcome::Value(3.25)).unwrap();
        assert_eq!(json, "3.25");

        let json = serde_json::to_string(&Outcome::Label("Placed".to_string())).unwrap();
        assert_eq!(json, "\"Placed\"");
    }
}
