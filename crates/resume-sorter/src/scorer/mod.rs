//! Text scoring: turns normalized resume text into a category id.
//!
//! The pipeline only sees the [`CategoryScorer`] trait. The artifact-backed
//! implementation pairs a TF-IDF vectorizer with a linear classifier, both
//! exported to JSON from the training environment and loaded once at startup.

pub mod linear;
pub mod tfidf;

use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::categories::CategoryId;
use crate::error::ScoringError;

pub use linear::LinearClassifier;
pub use tfidf::TfidfVectorizer;

/// Sparse numeric representation of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Builds a vector from `(index, value)` pairs. Entries are sorted by
    /// index; any index outside `dimension` is rejected.
    pub fn new(dimension: usize, mut entries: Vec<(usize, f64)>) -> Result<Self, ScoringError> {
        if let Some(&(index, _)) = entries.iter().find(|(index, _)| *index >= dimension) {
            return Err(ScoringError::IndexOutOfRange { index, dimension });
        }
        entries.sort_by_key(|(index, _)| *index);
        Ok(Self { dimension, entries })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Dot product with a dense weight row of the same dimension.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(index, value)| weights.get(index).map(|w| w * value))
            .sum()
    }
}

/// The two capabilities the pipeline needs from a trained model.
pub trait CategoryScorer: Send + Sync {
    fn vectorize(&self, text: &str) -> Result<FeatureVector, ScoringError>;
    fn classify(&self, features: &FeatureVector) -> Result<CategoryId, ScoringError>;
}

/// Scorer backed by the exported vectorizer and classifier artifacts.
pub struct ArtifactScorer {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
}

impl ArtifactScorer {
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
    ) -> Result<Self, ScoringError> {
        vectorizer.validate()?;
        classifier.validate()?;

        if vectorizer.dimension() != classifier.n_features() {
            return Err(ScoringError::InvalidArtifact(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.dimension(),
                classifier.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Loads and cross-checks both artifacts.
    pub fn load(vectorizer_path: &Path, classifier_path: &Path) -> Result<Self, ScoringError> {
        let vectorizer: TfidfVectorizer = load_json(vectorizer_path)?;
        let classifier: LinearClassifier = load_json(classifier_path)?;

        let scorer = Self::new(vectorizer, classifier)?;

        info!(
            "Loaded scoring model: {} features, {} classes",
            scorer.vectorizer.dimension(),
            scorer.classifier.classes().len()
        );

        Ok(scorer)
    }
}

impl CategoryScorer for ArtifactScorer {
    fn vectorize(&self, text: &str) -> Result<FeatureVector, ScoringError> {
        self.vectorizer.transform(text)
    }

    fn classify(&self, features: &FeatureVector) -> Result<CategoryId, ScoringError> {
        self.classifier.predict(features)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScoringError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScoringError::ReadArtifact {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ScoringError::ParseArtifact {
        path: path.to_path_buf(),
        source: e,
    })
}
