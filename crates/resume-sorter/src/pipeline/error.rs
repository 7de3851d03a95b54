use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Document processing failed: {0}")]
    Processing(#[from] crate::error::ProcessError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] crate::error::ScoringError),

    #[error("Storage failed: {0}")]
    Storage(#[from] crate::error::StorageError),

    #[error("Batch aborted at '{filename}': {source}")]
    Aborted {
        filename: String,
        #[source]
        source: Box<PipelineError>,
    },
}
