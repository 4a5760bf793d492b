//! Discoverable configuration for catalog output.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "catalog.config.json";

/// Configuration describing where and how catalog documents are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
  /// Directory the per-package documents are written under. Fully replaced
  /// on each export.
  pub output_dir: String,
  /// Whether documents are prettified; compact output is smaller but harder
  /// to diff.
  pub pretty: bool,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    Self {
      output_dir: "PackageData".into(),
      pretty: true,
    }
  }
}

impl CatalogConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall
  /// back to default values so callers can continue with sensible
  /// assumptions.
  pub fn discover(dir: &Path) -> Self {
    Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }
}
