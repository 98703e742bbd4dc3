//! k-nearest-neighbours classifier over stored training points

use serde::Deserialize;

use super::check_width;
use crate::domain::feature::FeatureRecord;
use crate::domain::{DomainError, Predictor};

#[derive(Debug, Clone, Deserialize)]
pub struct KnnModel {
    pub k: usize,
    pub points: Vec<Vec<f64>>,
    pub labels: Vec<i64>,
}

impl KnnModel {
    /// Fraction of the k nearest neighbours with the positive label.
    fn positive_fraction(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        if self.points.is_empty() || self.points.len() != self.labels.len() {
            return Err(DomainError::artifact(
                "KNN artifact has mismatched points and labels",
            ));
        }

        let width = self.points[0].len();
        check_width(width, record)?;

        let mut neighbours: Vec<(f64, i64)> = self
            .points
            .iter()
            .zip(&self.labels)
            .map(|(point, label)| {
                let d2: f64 = point
                    .iter()
                    .zip(record.values())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                (d2, *label)
            })
            .collect();

        neighbours.sort_by(|a, b| a.0.total_cmp(&b.0));

        let k = self.k.max(1).min(neighbours.len());
        let positive = neighbours[..k].iter().filter(|(_, l)| *l == 1).count();

        Ok(positive as f64 / k as f64)
    }
}

impl Predictor for KnnModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        let fraction = self.positive_fraction(record)?;
        Ok(if fraction >= 0.5 { 1.0 } else { 0.0 })
    }

    fn predict_confidence(&self, record: &FeatureRecord) -> Option<f64> {
        self.positive_fraction(record).ok()
    }
}
