use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::scorer::FeatureVector;

/// Word tokens of two or more word characters, as scikit-learn's default
/// `token_pattern`.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Fitted TF-IDF vectorizer exported as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to column index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default)]
    pub stop_words: HashSet<String>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
}

fn default_true() -> bool {
    true
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl TfidfVectorizer {
    /// Number of columns in the produced vectors.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.idf.is_empty() {
            return Err(ScoringError::InvalidArtifact(
                "vectorizer has an empty idf table".to_string(),
            ));
        }

        if let Some((term, index)) = self
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= self.idf.len())
        {
            return Err(ScoringError::InvalidArtifact(format!(
                "vocabulary term '{}' maps to column {} but idf has {} entries",
                term,
                index,
                self.idf.len()
            )));
        }

        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ScoringError::InvalidArtifact(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        Ok(())
    }

    /// Converts text into a normalized TF-IDF vector.
    pub fn transform(&self, text: &str) -> Result<FeatureVector, ScoringError> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries = Vec::with_capacity(counts.len());
        for (index, tf) in counts {
            let idf = self.idf.get(index).copied().ok_or(ScoringError::IndexOutOfRange {
                index,
                dimension: self.idf.len(),
            })?;
            let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
            entries.push((index, tf * idf));
        }

        if let Some(norm) = self.norm {
            normalize(&mut entries, norm);
        }

        FeatureVector::new(self.dimension(), entries)
    }

    /// Tokenizes, drops stop words and expands n-grams.
    fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = RE_TOKEN
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        if max_n == 1 {
            return tokens.into_iter().map(str::to_string).collect();
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }
}

fn normalize(entries: &mut [(usize, f64)], norm: Norm) {
    let total = match norm {
        Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
        Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
    };

    if total > 0.0 {
        for (_, value) in entries.iter_mut() {
            *value /= total;
        }
    }
}
