pub mod config;
pub mod emit;
pub mod redact;

use anyhow::{Context, Result};
use datum_config::Config;
use std::path::Path;

/// Load the config from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
