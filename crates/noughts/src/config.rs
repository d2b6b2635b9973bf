//! Play configuration and model loading.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_decision::{DecisionEngine, ModelConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Model used when no model file is configured.
pub const DEFAULT_MODEL: &str = include_str!("../models/default.toml");

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause before the automated player moves, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Model file to load instead of the built-in model.
    #[serde(default)]
    model: Option<PathBuf>,
}

fn default_think_ms() -> u64 {
    1000
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            think_ms: default_think_ms(),
            model: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(think_ms = config.think_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces fields given on the command line.
    pub fn with_overrides(mut self, think_ms: Option<u64>, model: Option<PathBuf>) -> Self {
        if let Some(ms) = think_ms {
            self.think_ms = ms;
        }
        if model.is_some() {
            self.model = model;
        }
        self
    }

    /// Builds the decision engine from the configured or built-in model.
    #[instrument(skip(self), fields(model = ?self.model))]
    pub fn load_engine(&self) -> Result<DecisionEngine, ConfigError> {
        let model = match &self.model {
            Some(path) => load_model(path)?,
            None => default_model()?,
        };
        DecisionEngine::from_config(model)
            .map_err(|e| ConfigError::new(format!("Invalid model: {}", e)))
    }
}

/// Reads a model description from a TOML file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read model file: {}", e)))?;
    let model: ModelConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse model: {}", e)))?;

    info!(layers = model.layers.len(), "Model loaded");
    Ok(model)
}

/// Parses the built-in model.
pub fn default_model() -> Result<ModelConfig, ConfigError> {
    toml::from_str(DEFAULT_MODEL)
        .map_err(|e| ConfigError::new(format!("Failed to parse built-in model: {}", e)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
