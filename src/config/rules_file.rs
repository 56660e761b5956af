//! Standalone TOML rules file with the same layout as `extra.drupal-cleanup`.
//!
//! ```toml
//! exclude = ["README.md"]
//!
//! [default]
//! drupal-module = ["tests", "*.md"]
//!
//! [no-dev]
//! drupal-theme = ["node_modules"]
//! ```
use std::path::Path;

use serde_json::Value;

use super::CleanupConfig;
use crate::error::ConfigError;

/// Load a rules file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or does
/// not have the expected layout.
pub fn load(path: &Path) -> Result<CleanupConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Parse rules file `content` read from `path`.
///
/// # Errors
///
/// See [`load`].
pub fn parse(path: &Path, content: &str) -> Result<CleanupConfig, ConfigError> {
    let value: Value = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    CleanupConfig::from_value(&value, "")
}
