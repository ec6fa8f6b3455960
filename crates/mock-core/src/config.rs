//! Session configuration.
//!
//! A mocker session is configured with a seed and two named dictionaries.
//! Both can be loaded from YAML (or JSON):
//!
//! ```yaml
//! seed: 42
//! tags:
//!   word12: "type(word) range(12, 12)"
//!   sentence20: "type(sentence) range(20, 20)"
//! formats:
//!   dash: "%Y-%m-%d"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Seed and named dictionaries for a mocker session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockerConfig {
    /// Seed driving the random source
    #[serde(default)]
    pub seed: u64,

    /// Tag name -> directive text
    #[serde(default)]
    pub tags: HashMap<String, String>,

    /// Format name -> format text
    #[serde(default)]
    pub formats: HashMap<String, String>,
}

impl MockerConfig {
    /// Create an empty configuration with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Add a tag dictionary entry.
    pub fn with_tag(mut self, name: impl Into<String>, directive: impl Into<String>) -> Self {
        self.tags.insert(name.into(), directive.into());
        self
    }

    /// Add a format dictionary entry.
    pub fn with_format(mut self, name: impl Into<String>, format: impl Into<String>) -> Self {
        self.formats.insert(name.into(), format.into());
        self
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
