//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not YAML, or its shape does not match [`CompareConfig`](crate::CompareConfig)
    #[error("malformed configuration {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A setting parsed but cannot be used (e.g. an empty label list)
    #[error("bad value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
