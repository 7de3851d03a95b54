use tracing::{info, warn};

/// Per-file events emitted while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The file's extension is not supported; it was not processed.
    Skipped { filename: String, message: String },
    Classified {
        filename: String,
        category: String,
        output_path: String,
    },
    Failed { filename: String, error: String },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Writes every event to the tracing log.
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Skipped { filename, message } => {
                warn!(filename = %filename, "{}", message);
            }
            ProgressEvent::Classified {
                filename,
                category,
                output_path,
            } => {
                info!(filename = %filename, category = %category, "Stored at {}", output_path);
            }
            ProgressEvent::Failed { filename, error } => {
                warn!(filename = %filename, "Failed: {}", error);
            }
        }
    }
}
