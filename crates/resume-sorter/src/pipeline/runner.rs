use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::categories::CategoryTable;
use crate::config::{Config, FailurePolicy};
use crate::error::ScoringError;
use crate::normalizer;
use crate::processor::ProcessorRegistry;
use crate::report::{BatchReport, BatchWarning, ClassificationResult, FileFailure};
use crate::sanitize;
use crate::scorer::{ArtifactScorer, CategoryScorer};
use crate::storage::FileStorage;
use crate::upload::{collect_uploads, UploadedFile};

use super::config::PipelineConfig;
use super::error::PipelineError;
use super::progress::{ProgressEvent, ProgressReporter};

pub struct Pipeline {
    config: PipelineConfig,
    processor: ProcessorRegistry,
    scorer: Box<dyn CategoryScorer>,
    categories: CategoryTable,
}

impl Pipeline {
    /// Production constructor: loads the model artifacts named in `config`
    /// and uses the built-in category table.
    pub fn from_config(config: &Config) -> Result<Self, ScoringError> {
        let scorer = ArtifactScorer::load(
            Path::new(&config.scorer.vectorizer_path),
            Path::new(&config.scorer.classifier_path),
        )?;

        Ok(Self::new(
            PipelineConfig::from_config(config),
            Box::new(scorer),
            CategoryTable::default(),
        ))
    }

    pub fn new(
        config: PipelineConfig,
        scorer: Box<dyn CategoryScorer>,
        categories: CategoryTable,
    ) -> Self {
        Self {
            config,
            processor: ProcessorRegistry::new(),
            scorer,
            categories,
        }
    }

    /// Runs a batch into the configured output directory.
    pub fn run(
        &self,
        files: &[UploadedFile],
        progress: &dyn ProgressReporter,
    ) -> Result<BatchReport, PipelineError> {
        self.run_batch(files, &self.config.output_directory, progress)
    }

    /// Classifies `files` in order and files each one under
    /// `<output_directory>/<category>/`.
    ///
    /// Unsupported formats are reported and skipped. Other per-file failures
    /// are recorded or abort the batch depending on the failure policy. Files
    /// already written are left in place either way.
    pub fn run_batch(
        &self,
        files: &[UploadedFile],
        output_directory: &Path,
        progress: &dyn ProgressReporter,
    ) -> Result<BatchReport, PipelineError> {
        if files.is_empty() {
            return Err(PipelineError::MissingInput(
                "no files were uploaded".to_string(),
            ));
        }
        if output_directory.as_os_str().is_empty() {
            return Err(PipelineError::MissingInput(
                "no output directory was specified".to_string(),
            ));
        }

        let mut report = BatchReport::new(uuid::Uuid::new_v4().to_string());
        let _batch_span = info_span!("batch",
            batch_id = %report.batch_id,
            files = files.len(),
            output_dir = %sanitize::hash_path(output_directory),
        )
        .entered();

        let storage = FileStorage::new(output_directory);
        storage.ensure_root()?;

        for file in files {
            let _file_span = info_span!("file", filename = %file.name).entered();

            if file.format().is_none() {
                let message = format!("Unsupported file format: {}", file.name);
                progress.report(ProgressEvent::Skipped {
                    filename: file.name.clone(),
                    message: message.clone(),
                });
                report.warnings.push(BatchWarning {
                    filename: file.name.clone(),
                    message,
                });
                continue;
            }

            match self.process_file(file, &storage) {
                Ok((result, output_path)) => {
                    progress.report(ProgressEvent::Classified {
                        filename: result.filename.clone(),
                        category: result.category.clone(),
                        output_path: output_path.display().to_string(),
                    });
                    report.results.push(result);
                }
                Err(e) => {
                    if self.config.failure_policy == FailurePolicy::FailFast {
                        return Err(PipelineError::Aborted {
                            filename: file.name.clone(),
                            source: Box::new(e),
                        });
                    }

                    let error = e.to_string();
                    progress.report(ProgressEvent::Failed {
                        filename: file.name.clone(),
                        error: error.clone(),
                    });
                    report.failures.push(FileFailure {
                        filename: file.name.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            classified = report.results.len(),
            skipped = report.warnings.len(),
            failed = report.failures.len(),
            "Batch complete"
        );

        Ok(report)
    }

    /// Extract, normalize, score, look up and store a single supported file.
    fn process_file(
        &self,
        file: &UploadedFile,
        storage: &FileStorage,
    ) -> Result<(ClassificationResult, PathBuf), PipelineError> {
        let text = {
            let _step = info_span!("extract_text").entered();
            self.processor.extract(file)?
        };

        let cleaned = {
            let _step = info_span!("normalize").entered();
            normalizer::normalize(&text)
        };
        debug!(raw_len = text.len(), cleaned_len = cleaned.len(), "Text prepared");

        let category_id = {
            let _step = info_span!("score").entered();
            let features = self.scorer.vectorize(&cleaned)?;
            self.scorer.classify(&features)?
        };

        let category = self.categories.lookup(category_id);
        if category == crate::categories::UNKNOWN_CATEGORY {
            warn!(category_id, "Predicted id has no category name");
        }
        debug!(category_id, category = %category, "Categorized");

        let output_path = {
            let _step = info_span!("store").entered();
            storage.store(category, &file.name, &file.content)?
        };

        Ok((
            ClassificationResult {
                filename: file.name.clone(),
                category: category.to_string(),
            },
            output_path,
        ))
    }
}

/// Loads the model named in `config`, classifies every file found under
/// `inputs` into the configured output directory and writes the results CSV.
pub fn sort_inputs(
    config: &Config,
    inputs: &[PathBuf],
    progress: &dyn ProgressReporter,
) -> crate::error::Result<BatchReport> {
    let pipeline = Pipeline::from_config(config)?;
    let files = collect_uploads(inputs)?;
    info!("Classifying {} file(s)", files.len());

    let report = pipeline.run(&files, progress)?;
    report.write_csv(Path::new(&config.results_csv))?;

    Ok(report)
}
