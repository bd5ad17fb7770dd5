//! Resolution of the marker syntax from flags and config files

use std::path::Path;

use mr_blocks::MarkerSyntax;
use mr_fs::ConfigStore;

use crate::error::Result;

/// Pick the marker syntax: `--prefix` wins over `--config`, which wins over
/// the built-in default.
pub fn resolve(prefix: Option<&str>, config: Option<&Path>) -> Result<MarkerSyntax> {
    let mut syntax = match config {
        Some(path) => ConfigStore::new().load::<MarkerSyntax>(path)?,
        None => MarkerSyntax::default(),
    };
    if let Some(prefix) = prefix {
        syntax.prefix = prefix.to_string();
    }
    tracing::debug!(prefix = %syntax.prefix, "Using marker prefix");
    Ok(syntax)
}
