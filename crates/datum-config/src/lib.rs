//! Configuration for datum
//!
//! Two sources: an optional TOML file for redaction, logger and query
//! settings, and environment variables for the database connection.

pub mod env;

use std::path::{Path, PathBuf};

use datum_core::{DEFAULT_LOGGER_NAME, DEFAULT_TAG, Level, USER_COLUMNS};
use datum_security::{PII_FIELDS, REDACTION, SEPARATOR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use env::{DatabaseSettings, ENV_DATABASE_URL, ENV_HOST, ENV_NAME, ENV_PASSWORD, ENV_USERNAME};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub logger: LoggerConfig,

    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    #[serde(default = "default_token")]
    pub token: String,

    #[serde(default = "default_separator")]
    pub separator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_logger_name")]
    pub name: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_level")]
    pub level: Level,

    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_sql")]
    pub sql: String,

    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            token: default_token(),
            separator: default_separator(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_logger_name(),
            tag: default_tag(),
            level: default_level(),
            output: Output::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            sql: default_sql(),
            columns: default_columns(),
        }
    }
}

fn default_fields() -> Vec<String> {
    PII_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_token() -> String {
    REDACTION.to_string()
}

fn default_separator() -> String {
    SEPARATOR.to_string()
}

fn default_logger_name() -> String {
    DEFAULT_LOGGER_NAME.to_string()
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_level() -> Level {
    Level::Info
}

fn default_sql() -> String {
    "SELECT * FROM users;".to_string()
}

fn default_columns() -> Vec<String> {
    USER_COLUMNS.iter().map(|c| c.to_string()).collect()
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write the default config to `path`, creating parent directories
    pub fn write_default(path: &Path) -> Result<Self> {
        let config = Config::default();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&config)?;
        std::fs::write(path, content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "datum", "datum") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.datum/config.toml")
        }
    }
}
