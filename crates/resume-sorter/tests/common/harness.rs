//! Test harness for isolated test execution.
//!
//! The `TestHarness` struct provides an isolated environment with temporary
//! input, output and model directories, plus helpers to run a full batch.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use resume_sorter::config::{Config, FailurePolicy, ScorerConfig};
use resume_sorter::pipeline::{NoopProgress, Pipeline, PipelineError};
use resume_sorter::report::BatchReport;
use resume_sorter::upload::{collect_uploads, UploadedFile};

use super::builders::{CLASSIFIER_JSON, VECTORIZER_JSON};

pub struct TestHarness {
    temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model_dir: PathBuf,
}

impl TestHarness {
    /// Create a harness with the test model artifacts already written.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let input_dir = base.join("input");
        let output_dir = base.join("output");
        let model_dir = base.join("model");

        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");
        std::fs::create_dir_all(&model_dir).expect("Failed to create model dir");
        std::fs::write(model_dir.join("tfidf.json"), VECTORIZER_JSON)
            .expect("Failed to write vectorizer");
        std::fs::write(model_dir.join("model.json"), CLASSIFIER_JSON)
            .expect("Failed to write classifier");

        Self {
            temp_dir,
            input_dir,
            output_dir,
            model_dir,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a test input file to the input directory.
    pub fn write_input(&self, filename: &str, content: &[u8]) -> PathBuf {
        let path = self.input_dir.join(filename);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create input subdirectory");
        }
        std::fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// Config pointing at the harness directories.
    pub fn config(&self, failure_policy: FailurePolicy) -> Config {
        Config {
            output_directory: self.output_dir.display().to_string(),
            results_csv: self.temp_path().join("results.csv").display().to_string(),
            scorer: ScorerConfig {
                vectorizer_path: self.model_dir.join("tfidf.json").display().to_string(),
                classifier_path: self.model_dir.join("model.json").display().to_string(),
            },
            failure_policy,
        }
    }

    pub fn pipeline(&self, failure_policy: FailurePolicy) -> Pipeline {
        Pipeline::from_config(&self.config(failure_policy)).expect("Failed to load pipeline")
    }

    /// Collect everything in the input directory and run it as one batch.
    pub fn run_inputs(&self, failure_policy: FailurePolicy) -> Result<BatchReport, PipelineError> {
        let files = collect_uploads(&[self.input_dir.clone()]).expect("Failed to collect inputs");
        self.run_files(&files, failure_policy)
    }

    pub fn run_files(
        &self,
        files: &[UploadedFile],
        failure_policy: FailurePolicy,
    ) -> Result<BatchReport, PipelineError> {
        self.pipeline(failure_policy)
            .run_batch(files, &self.output_dir, &NoopProgress)
    }

    /// Path of a stored resume under the output directory.
    pub fn stored_path(&self, category: &str, filename: &str) -> PathBuf {
        self.output_dir.join(category).join(filename)
    }

    /// All files under the output directory, relative to it, sorted.
    pub fn list_output_files(&self) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(&self.output_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.output_dir)
                    .ok()
                    .map(|p| p.display().to_string())
            })
            .collect();
        files.sort();
        files
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
