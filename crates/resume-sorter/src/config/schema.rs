use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "categorized_resumes";
pub const DEFAULT_RESULTS_CSV: &str = "categorized_resumes.csv";
pub const DEFAULT_VECTORIZER_PATH: &str = "Weights/tfidf.json";
pub const DEFAULT_CLASSIFIER_PATH: &str = "Weights/model.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
    #[serde(default = "default_results_csv")]
    pub results_csv: String,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_output_directory() -> String {
    DEFAULT_OUTPUT_DIRECTORY.to_string()
}

fn default_results_csv() -> String {
    DEFAULT_RESULTS_CSV.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            results_csv: default_results_csv(),
            scorer: ScorerConfig::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Locations of the exported model artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    #[serde(default = "default_vectorizer_path")]
    pub vectorizer_path: String,
    #[serde(default = "default_classifier_path")]
    pub classifier_path: String,
}

fn default_vectorizer_path() -> String {
    DEFAULT_VECTORIZER_PATH.to_string()
}

fn default_classifier_path() -> String {
    DEFAULT_CLASSIFIER_PATH.to_string()
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: default_vectorizer_path(),
            classifier_path: default_classifier_path(),
        }
    }
}

/// What a batch does when a supported file fails to extract, score or store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure and continue with the next file.
    #[default]
    Isolate,
    /// Abort the batch on the first failure.
    FailFast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_directory, "categorized_resumes");
        assert_eq!(config.results_csv, "categorized_resumes.csv");
        assert_eq!(config.scorer.vectorizer_path, "Weights/tfidf.json");
        assert_eq!(config.scorer.classifier_path, "Weights/model.json");
        assert_eq!(config.failure_policy, FailurePolicy::Isolate);
    }

    #[test]
    fn test_failure_policy_names() {
        let policy: FailurePolicy = serde_json::from_str(r#""fail_fast""#).unwrap();
        assert_eq!(policy, FailurePolicy::FailFast);

        let policy: FailurePolicy = serde_json::from_str(r#""isolate""#).unwrap();
        assert_eq!(policy, FailurePolicy::Isolate);

        assert!(serde_json::from_str::<FailurePolicy>(r#""retry""#).is_err());
    }
}
