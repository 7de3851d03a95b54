use std::path::PathBuf;

use crate::config::{Config, FailurePolicy};

pub struct PipelineConfig {
    pub output_directory: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_directory: PathBuf::from(&config.output_directory),
            failure_policy: config.failure_policy,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
