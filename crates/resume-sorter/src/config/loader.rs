use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::ConfigError;

/// Serialization used by a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` files are YAML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content, ConfigFormat::from_path(path))
}

pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let config: Config = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };

    validate_config(&config)?;

    Ok(config)
}

/// `<platform config dir>/resume-sorter/config.yaml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("resume-sorter").join("config.yaml"))
}

/// Loads `explicit` when given, otherwise the default config file when it
/// exists, otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!("Using config file {}", path.display());
            load_config(&path)
        }
        _ => Ok(Config::default()),
    }
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let required = [
        ("output_directory", &config.output_directory),
        ("results_csv", &config.results_csv),
        ("scorer.vectorizer_path", &config.scorer.vectorizer_path),
        ("scorer.classifier_path", &config.scorer.classifier_path),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: format!("{} must not be empty", field),
            });
        }
    }

    Ok(())
}
