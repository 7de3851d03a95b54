use serde::{Deserialize, Serialize};

use crate::categories::CategoryId;
use crate::error::ScoringError;
use crate::scorer::FeatureVector;

/// One-vs-rest linear classifier exported as JSON.
///
/// With several weight rows the predicted class is the one with the highest
/// `coef · x + intercept`; ties go to the earlier class. A single row is a
/// binary model: a positive score picks `classes[1]`, anything else
/// `classes[0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub classes: Vec<CategoryId>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn classes(&self) -> &[CategoryId] {
        &self.classes
    }

    /// Width of every weight row.
    pub fn n_features(&self) -> usize {
        self.coef.first().map(Vec::len).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.coef.is_empty() {
            return Err(ScoringError::InvalidArtifact(
                "classifier has no weight rows".to_string(),
            ));
        }

        let width = self.n_features();
        if let Some(row) = self.coef.iter().position(|row| row.len() != width) {
            return Err(ScoringError::InvalidArtifact(format!(
                "weight row {} has {} columns, expected {}",
                row,
                self.coef[row].len(),
                width
            )));
        }

        if self.intercept.len() != self.coef.len() {
            return Err(ScoringError::InvalidArtifact(format!(
                "{} intercepts for {} weight rows",
                self.intercept.len(),
                self.coef.len()
            )));
        }

        let expected_classes = if self.coef.len() == 1 { 2 } else { self.coef.len() };
        if self.classes.len() != expected_classes {
            return Err(ScoringError::InvalidArtifact(format!(
                "{} classes for {} weight rows, expected {}",
                self.classes.len(),
                self.coef.len(),
                expected_classes
            )));
        }

        Ok(())
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<CategoryId, ScoringError> {
        let width = self.n_features();
        if features.dimension() != width {
            return Err(ScoringError::DimensionMismatch {
                expected: width,
                actual: features.dimension(),
            });
        }

        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| features.dot(row) + bias)
            .collect();

        let index = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        };

        self.classes.get(index).copied().ok_or_else(|| {
            ScoringError::InvalidArtifact(format!(
                "no class at position {} ({} classes)",
                index,
                self.classes.len()
            ))
        })
    }
}

fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    best
}
