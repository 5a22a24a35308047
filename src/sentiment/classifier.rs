//! Linear decision-function classifier
//!
//! Loads the coefficients of an already trained linear model (for example a
//! linear SVM or logistic regression exported to JSON) and applies its
//! decision rule.

use super::SentimentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// Trained linear model: `classes[1]` when `w·x + b > 0`, else `classes[0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub coefficients: Vec<f32>,
    pub intercept: f32,
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

impl LinearClassifier {
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let source = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_str(&source).map_err(|source| SentimentError::MalformedModel {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            dimension = model.dimension(),
            classes = ?model.classes,
            "Loaded sentiment classifier"
        );
        Ok(model)
    }

    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    pub fn decision(&self, features: &[f32]) -> Result<f32, SentimentError> {
        if features.len() != self.coefficients.len() {
            return Err(SentimentError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let dot: f32 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }

    pub fn predict(&self, features: &[f32]) -> Result<i64, SentimentError> {
        let score = self.decision(features)?;
        Ok(if score > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }
}
