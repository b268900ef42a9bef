//! Configuration file parsing for the game server.
//!
//! Loads settings from TOML files including bind address, log format and
//! the questions the tree is seeded with.

use guessing_domain::traits::{DEFAULT_NO_ANSWER, DEFAULT_ROOT_QUESTION, DEFAULT_YES_ANSWER};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Human-readable lines
    Pretty,
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 80)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Log output format (default: json)
    #[serde(default)]
    pub log_format: LogFormat,

    /// Starter tree written at startup
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Questions the tree starts with
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedConfig {
    /// Question at the root
    pub root_question: String,

    /// Answer on the root's "yes" branch
    pub yes_answer: String,

    /// Answer on the root's "no" branch
    pub no_answer: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            root_question: DEFAULT_ROOT_QUESTION.to_string(),
            yes_answer: DEFAULT_YES_ANSWER.to_string(),
            no_answer: DEFAULT_NO_ANSWER.to_string(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// Default port: 80
fn default_bind_port() -> u16 {
    80
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            log_format: LogFormat::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }
        let seed = [
            ("seed.root_question", &self.seed.root_question),
            ("seed.yes_answer", &self.seed.yes_answer),
            ("seed.no_answer", &self.seed.no_answer),
        ];
        for (field, value) in seed {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            log_format: LogFormat::Pretty,
            seed: SeedConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
