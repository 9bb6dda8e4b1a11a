use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::Path;

/// Engine configuration module
/// This module handles the engine configuration including loading,
/// validating and saving configuration settings.
/// Represents the engine configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    /// Whether captions start visible
    #[serde(default = "default_true")]
    pub captions_visible: bool,

    /// Style name used when an event references an unknown style
    #[serde(default = "default_style_name")]
    pub default_style: String,

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

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_style_name() -> String {
    "Default".to_string()
}

/// Default implementation for EngineConfig
impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            captions_visible: default_true(),
            default_style: default_style_name(),
            log_level: LogLevel::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.default_style.trim().is_empty() {
            return Err(anyhow!("Default style name must not be empty"));
        }
        Ok(())
    }
}
