//! Typed references locating where and how a classified asset is stored.

use serde::{Deserialize, Serialize};

use crate::model::Identifier;

/// How an asset's backing storage was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageKind {
  /// Found through serialized native-object storage.
  Serialized,
  /// Found through a sidecar metadata file.
  Meta,
}

/// Cross-reference identifying one logical asset: the identifier of its
/// source file, the local slot within that file, and the storage kind it was
/// discovered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReference {
  /// Local slot of the asset within its source file.
  pub local_index: i64,
  /// Identifier of the source file the asset lives in.
  pub identifier: Identifier,
  /// Storage kind the asset was discovered through.
  pub kind: StorageKind,
}

impl AssetReference {
  /// Construct a reference; pure value construction, no validation.
  pub fn new(local_index: i64, identifier: Identifier, kind: StorageKind) -> Self {
    Self {
      local_index,
      identifier,
      kind,
    }
  }
}
