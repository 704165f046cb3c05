//! Comparison settings and their YAML loader

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tc_core::{output, DEFAULT_KNOWN_LABELS};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Device readout parsing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLogConfig {
    /// Labels recognised verbatim, besides the numeric-prefixed `N#...` ones
    #[serde(default = "default_known_labels")]
    pub known_labels: Vec<String>,
}

impl Default for DeviceLogConfig {
    fn default() -> Self {
        Self {
            known_labels: default_known_labels(),
        }
    }
}

/// Output artifact settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base file name, without extension
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Directory the artifact is written to
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            directory: default_directory(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub device_log: DeviceLogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_known_labels() -> Vec<String> {
    DEFAULT_KNOWN_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_file_name() -> String {
    output::DEFAULT_FILE_NAME.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl CompareConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_yaml_str(&content, path)
    }

    /// Parse configuration from YAML text. `source_path` is only used in errors.
    pub fn from_yaml_str(content: &str, source_path: &Path) -> ConfigResult<Self> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        // An empty or comment-only file
        if value.is_null() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_value(value).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        let labels = &self.device_log.known_labels;

        if labels.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "device_log.known_labels".to_string(),
                reason: "at least one label is required".to_string(),
            });
        }

        if let Some(index) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: format!("device_log.known_labels[{}]", index),
                reason: "label cannot be blank".to_string(),
            });
        }

        // Readout lines are trimmed before matching, so padded labels never match
        if let Some(label) = labels.iter().find(|l| l.trim() != l.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "device_log.known_labels".to_string(),
                reason: format!("label {:?} has surrounding whitespace", label),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(yaml: &str) -> ConfigResult<CompareConfig> {
        CompareConfig::from_yaml_str(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn test_defaults() {
        let config = CompareConfig::default();
        assert_eq!(
            config.device_log.known_labels,
            vec!["Env Tp C", "Env Humi C%", "DewPoint C", "Ele Box C"]
        );
        assert_eq!(config.output.file_name, output::DEFAULT_FILE_NAME);
        assert_eq!(config.output.directory, PathBuf::from("."));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("").unwrap(), CompareConfig::default());
        assert_eq!(parse("# nothing here\n").unwrap(), CompareConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = parse("output:\n  directory: reports\n").unwrap();
        assert_eq!(config.output.directory, PathBuf::from("reports"));
        assert_eq!(config.output.file_name, output::DEFAULT_FILE_NAME);
        assert_eq!(config.device_log, DeviceLogConfig::default());
    }

    #[test]
    fn test_custom_labels() {
        let config = parse(
            r#"
device_log:
  known_labels:
    - Supply Tp C
    - "Env Humi C%"
"#,
        )
        .unwrap();
        assert_eq!(
            config.device_log.known_labels,
            vec!["Supply Tp C", "Env Humi C%"]
        );
    }

    #[test]
    fn test_empty_labels_rejected() {
        let result = parse("device_log:\n  known_labels: []\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_blank_label_rejected() {
        let result = parse("device_log:\n  known_labels: [\"Env Tp C\", \"  \"]\n");
        match result {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "device_log.known_labels[1]");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_padded_label_rejected() {
        let result = parse("device_log:\n  known_labels: [\" Env Tp C\"]\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = parse("device_log: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseYaml { .. })));
    }

    #[test]
    fn test_wrong_type() {
        let result = parse("device_log:\n  known_labels: 5\n");
        assert!(matches!(result, Err(ConfigError::ParseYaml { .. })));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  file_name: unit-7").unwrap();

        let config = CompareConfig::load(file.path()).unwrap();
        assert_eq!(config.output.file_name, "unit-7");
    }

    #[test]
    fn test_load_missing_file() {
        let result = CompareConfig::load("/nonexistent/compare.yaml");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
