pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_from_str, resolve_config, validate_config,
    ConfigFormat,
};
pub use schema::{Config, FailurePolicy, ScorerConfig};
