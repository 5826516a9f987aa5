use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::question::GenerationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Requested question counts per type
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Extracted text shorter than this is skipped instead of generated from
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Maximum document size accepted for extraction, in bytes
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_min_text_chars() -> usize {
    50
}

fn default_max_document_bytes() -> u64 {
    20 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generation: GenerationConfig::default(),
            min_text_chars: default_min_text_chars(),
            max_document_bytes: default_max_document_bytes(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Unknown keys are ignored; absent keys take their documented
    /// defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, creating a default config file when
    /// none exists yet
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.max_document_bytes == 0 {
            return Err(anyhow!("max_document_bytes must be greater than zero"));
        }

        Ok(())
    }
}
