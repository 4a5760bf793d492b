//! File-backed environment provider reading a JSON enumeration snapshot.
//!
//! The editor exports its raw enumeration (packages, asset paths, loaded
//! handles, path identifiers) as a single JSON document; a [`Snapshot`]
//! deserializes that document and serves it through [`AssetEnvironment`],
//! letting the pipeline and CLI run outside the editor process.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::environment::{AssetEnvironment, PackageSource, RawAsset};

/// Deserialized enumeration snapshot exported by the host environment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
  /// Installed packages, in the environment's enumeration order.
  #[serde(default)]
  pub packages: Vec<PackageSource>,
  /// Every known asset path, in the environment's enumeration order.
  #[serde(default)]
  pub asset_paths: Vec<String>,
  /// Raw handles loaded per path; paths without handles may be omitted.
  #[serde(default)]
  pub assets: BTreeMap<String, Vec<RawAsset>>,
  /// Unique identifier text per path; unknown paths may be omitted.
  #[serde(default)]
  pub path_identifiers: BTreeMap<String, String>,
}

impl Snapshot {
  /// Load a snapshot from a JSON file on disk.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }
}

impl AssetEnvironment for Snapshot {
  fn packages(&self) -> Vec<PackageSource> {
    self.packages.clone()
  }

  fn asset_paths(&self) -> Vec<String> {
    self.asset_paths.clone()
  }

  fn assets_at(&self, path: &str) -> Vec<RawAsset> {
    self.assets.get(path).cloned().unwrap_or_default()
  }

  fn path_identifier(&self, path: &str) -> Option<String> {
    self.path_identifiers.get(path).cloned()
  }
}

/// Errors that can occur while loading a snapshot file.
#[derive(Debug)]
pub enum SnapshotError {
  /// Failed to read the snapshot file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON snapshot document.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl std::fmt::Display for SnapshotError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for SnapshotError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}
