//! Run configuration loaded from `config.yaml`

use serde::Deserialize;
use std::path::Path;

use crate::{Result, TaggerError};

/// Configuration file name, resolved against the current working directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Settings for a single tagging run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Model identifier sent to the completion API
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Prompt template; `{transcript}` is replaced with the input text
    pub prompt: String,
}

impl RunConfig {
    /// Load settings from `config.yaml` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaggerError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            TaggerError::Config(msg) => TaggerError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                msg
            )),
            other => other,
        })?;

        tracing::debug!(path = %path.display(), model = %config.model, "Loaded run configuration");
        Ok(config)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TaggerError::Config(e.to_string()))
    }
}
