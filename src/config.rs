use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    options::OptionValue,
};

/// Main configuration for a filtering run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Worker pool settings
    pub processing: ProcessingConfig,

    /// Filters to apply, in order
    pub pipeline: Vec<FilterStep>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.processing.validate()?;
        for (i, step) in self.pipeline.iter().enumerate() {
            step.validate(i)?;
        }
        Ok(())
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of threads used for per-pixel work
    pub threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}

impl ProcessingConfig {
    fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "processing.threads".to_string(),
                value: self.threads.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// One filter in the pipeline, with overrides for its declared options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterStep {
    /// Registry key of the filter
    pub filter: String,

    /// Option overrides; anything absent takes its declared default
    #[serde(default)]
    pub options: HashMap<String, OptionValue>,
}

impl FilterStep {
    pub fn new<S: Into<String>>(filter: S) -> Self {
        Self {
            filter: filter.into(),
            options: HashMap::new(),
        }
    }

    /// Set an option override
    pub fn set<K: Into<String>, V: Into<OptionValue>>(mut self, key: K, value: V) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: format!("pipeline[{}].filter", index),
                value: self.filter.clone(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.pipeline.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.processing.threads = 3;
        original.pipeline.push(
            FilterStep::new("grid")
                .set("stripes", 4)
                .set("rowColor", "#00ff00")
                .set("strength", 42.5),
        );
        original.pipeline.push(FilterStep::new("brightness").set("invert", true));

        original.save_to_file(&file_path).unwrap();
        let loaded = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded.processing.threads, 3);
        assert_eq!(loaded.pipeline, original.pipeline);
    }

    #[test]
    fn test_parse_pipeline_toml() {
        let config: Config = toml::from_str(
            r##"
            [processing]
            threads = 2

            [[pipeline]]
            filter = "grid"
            [pipeline.options]
            stripes = 4
            colColor = "#123456"

            [[pipeline]]
            filter = "brightness"
            "##,
        )
        .unwrap();

        assert_eq!(config.pipeline.len(), 2);
        assert_eq!(config.pipeline[0].options.get("stripes"), Some(&OptionValue::Integer(4)));
        assert!(config.pipeline[1].options.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_invalid_threads() {
        let mut config = Config::default();
        config.processing.threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_filter_name() {
        let mut config = Config::default();
        config.pipeline.push(FilterStep::new(" "));
        assert!(config.validate().is_err());
    }
}
