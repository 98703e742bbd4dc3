//! Decision-tree ensembles: single trees, random forests and gradient
//! boosting share one artifact shape

use serde::Deserialize;

use super::{check_width, sigmoid};
use crate::domain::feature::FeatureRecord;
use crate::domain::{DomainError, Predictor};

/// One node in a flattened tree. Leaves carry `value`; internal nodes
/// route on `feature <= threshold` to `left`, otherwise `right`.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub feature: usize,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub left: usize,
    #[serde(default)]
    pub right: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk from the root to a leaf. Node indices come from the artifact,
    /// so out-of-range links and cycles are treated as artifact errors.
    fn score(&self, values: &[f64]) -> Result<f64, DomainError> {
        let mut index = 0usize;

        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(index)
                .ok_or_else(|| DomainError::artifact("Tree node index out of range"))?;

            if let Some(value) = node.value {
                return Ok(value);
            }

            let feature = *values
                .get(node.feature)
                .ok_or_else(|| DomainError::artifact("Tree references a missing feature"))?;

            index = if feature <= node.threshold {
                node.left
            } else {
                node.right
            };
        }

        Err(DomainError::artifact("Tree walk did not reach a leaf"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeTask {
    Regression,
    Classification,
}

/// How per-tree scores combine: `sum` for boosted stages (plus
/// `base_score`), `mean` for bagged forests and single trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Sum,
    Mean,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsembleModel {
    pub task: TreeTask,
    pub aggregation: Aggregation,
    pub n_features: usize,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl TreeEnsembleModel {
    fn raw_score(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        check_width(self.n_features, record)?;

        if self.trees.is_empty() {
            return Err(DomainError::artifact("Ensemble has no trees"));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.score(record.values())?;
        }

        Ok(match self.aggregation {
            Aggregation::Sum => self.base_score + total,
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
        })
    }

    /// Positive-class probability. Summed (boosted) scores are logits;
    /// averaged (bagged) leaf votes already lie in [0, 1].
    fn probability(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        let raw = self.raw_score(record)?;
        Ok(match self.aggregation {
            Aggregation::Sum => sigmoid(raw),
            Aggregation::Mean => raw.clamp(0.0, 1.0),
        })
    }
}

impl Predictor for TreeEnsembleModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, DomainError> {
        match self.task {
            TreeTask::Regression => self.raw_score(record),
            TreeTask::Classification => {
                let p = self.probability(record)?;
                Ok(if p >= 0.5 { 1.0 } else { 0.0 })
            }
        }
    }

    fn predict_confidence(&self, record: &FeatureRecord) -> Option<f64> {
        match self.task {
            TreeTask::Regression => None,
            TreeTask::Classification => self.probability(record).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[f64]) -> FeatureRecord {
        FeatureRecord::new(values.to_vec(), Vec::new())
    }

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> Tree {
        Tree {
            nodes: vec![
                TreeNode {
                    value: None,
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode {
                    value: Some(low),
                    feature: 0,
                    threshold: 0.0,
                    left: 0,
                    right: 0,
                },
                TreeNode {
                    value: Some(high),
                    feature: 0,
                    threshold: 0.0,
                    left: 0,
                    right: 0,
                },
            ],
        }
    }

    #[test]
    fn test_boosted_regression_sums_stages() {
        let model = TreeEnsembleModel {
            task: TreeTask::Regression,
            aggregation: Aggregation::Sum,
            n_features: 2,
            base_score: 1.0,
            trees: vec![stump(0, 5.0, 0.5, 2.0), stump(1, 10.0, -0.25, 0.75)],
        };

        // feature 0 high branch (2.0), feature 1 low branch (-0.25)
        let y = model.predict(&record(&[6.0, 3.0])).unwrap();
        assert!((y - (1.0 + 2.0 - 0.25)).abs() < 1e-12);
        assert!(model.predict_confidence(&record(&[6.0, 3.0])).is_none());
    }

    #[test]
    fn test_bagged_classification_averages_votes() {
        let model = TreeEnsembleModel {
            task: TreeTask::Classification,
            aggregation: Aggregation::Mean,
            n_features: 1,
            base_score: 0.0,
            trees: vec![
                stump(0, 0.5, 0.0, 1.0),
                stump(0, 0.5, 0.0, 1.0),
                stump(0, 0.7, 1.0, 0.0),
            ],
        };

        // Two of three trees vote positive at x = 0.6
        let rec = record(&[0.6]);
        assert_eq!(model.predict(&rec).unwrap(), 1.0);

        let p = model.predict_confidence(&rec).unwrap();
        assert!((p - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_node_link_is_artifact_error() {
        let broken = Tree {
            nodes: vec![TreeNode {
                value: None,
                feature: 0,
                threshold: 0.5,
                left: 7,
                right: 8,
            }],
        };
        let model = TreeEnsembleModel {
            task: TreeTask::Regression,
            aggregation: Aggregation::Sum,
            n_features: 1,
            base_score: 0.0,
            trees: vec![broken],
        };

        let result = model.predict(&record(&[0.0]));
        assert!(matches!(result, Err(DomainError::Artifact { .. })));
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let model = TreeEnsembleModel {
            task: TreeTask::Regression,
            aggregation: Aggregation::Sum,
            n_features: 3,
            base_score: 0.0,
            trees: vec![stump(0, 0.5, 0.0, 1.0)],
        };

        assert!(model.predict(&record(&[1.0])).is_err());
    }
}
