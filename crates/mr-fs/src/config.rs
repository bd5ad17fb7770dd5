//! Format-agnostic configuration loading

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, Result, io};

/// Format-agnostic configuration store.
///
/// Picks the format from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let config = match extension.as_str() {
            "toml" => toml::from_str(&io::read_text(path)?)
                .map_err(|e| parse_error("TOML", e.to_string()))?,
            "json" => serde_json::from_str(&io::read_text(path)?)
                .map_err(|e| parse_error("JSON", e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&io::read_text(path)?)
                .map_err(|e| parse_error("YAML", e.to_string()))?,
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
