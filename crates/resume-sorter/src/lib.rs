pub mod categories;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod sanitize;
pub mod scorer;
pub mod storage;
pub mod upload;

pub use categories::{CategoryId, CategoryTable};
pub use config::{load_config, resolve_config, Config, FailurePolicy};
pub use error::{ConfigError, ProcessError, Result, ScoringError, SorterError, StorageError};
pub use pipeline::{
    sort_inputs, Pipeline, PipelineConfig, PipelineError, ProgressEvent, ProgressReporter,
};
pub use processor::{DocumentFormat, ProcessorRegistry};
pub use report::{BatchReport, ClassificationResult};
pub use scorer::{ArtifactScorer, CategoryScorer, FeatureVector};
pub use storage::FileStorage;
pub use upload::{collect_uploads, UploadedFile};
