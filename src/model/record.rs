//! Per-package record aggregating identity, assemblies and classified assets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AssetReference, Descriptor, Identifier};

/// Separator between the package name and version inside a combined id.
const VERSION_SEPARATOR: char = '@';

/// One descriptor/reference pair held by an [`AssetMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRow {
  /// Structural description of the asset.
  pub descriptor: Descriptor,
  /// Reference locating the asset's storage.
  pub reference: AssetReference,
}

/// Mapping from descriptors to references with insertion order preserved and
/// keys unique under structural descriptor equality.
///
/// The catalog is small enough that a linear key scan per insert beats the
/// bookkeeping of an ordered hash map, and it keeps descriptors free of any
/// hashing requirement on their float fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetMap {
  rows: Vec<AssetRow>,
}

impl AssetMap {
  /// Insert a descriptor/reference pair; returns `false` and leaves the
  /// existing mapping untouched when an equal descriptor is already present.
  pub fn insert(&mut self, descriptor: Descriptor, reference: AssetReference) -> bool {
    if self.rows.iter().any(|row| row.descriptor == descriptor) {
      return false;
    }
    self.rows.push(AssetRow {
      descriptor,
      reference,
    });
    true
  }

  /// Reference stored for a structurally equal descriptor, if any.
  pub fn get(&self, descriptor: &Descriptor) -> Option<&AssetReference> {
    self
      .rows
      .iter()
      .find(|row| &row.descriptor == descriptor)
      .map(|row| &row.reference)
  }

  /// Rows in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &AssetRow> {
    self.rows.iter()
  }

  /// Number of stored assets.
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  /// Whether the map holds no assets.
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

/// Catalog record for one discovered package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
  /// Package name.
  pub name: String,
  /// Package version derived from the combined id.
  pub version: String,
  /// Whether the package is registered with the environment.
  pub registered: bool,
  /// Root asset path owning the package's files; the record's key within a
  /// run, not part of the written document.
  #[serde(skip)]
  pub root_path: String,
  /// Assembly short name to source-file identifier, first registration wins.
  pub assemblies: BTreeMap<String, Identifier>,
  /// Classified assets keyed by descriptor, insertion order preserved.
  pub assets: AssetMap,
}

impl PackageRecord {
  /// Create an empty record for a package rooted at `root_path`.
  pub fn new(name: String, version: String, root_path: String, registered: bool) -> Self {
    Self {
      name,
      version,
      registered,
      root_path,
      assemblies: BTreeMap::new(),
      assets: AssetMap::default(),
    }
  }

  /// Register an assembly under its short name. The first registration wins;
  /// returns `false` without overwriting when the name is already taken.
  pub fn insert_assembly(&mut self, name: String, identifier: Identifier) -> bool {
    use std::collections::btree_map::Entry;

    match self.assemblies.entry(name) {
      Entry::Vacant(entry) => {
        entry.insert(identifier);
        true
      }
      Entry::Occupied(_) => false,
    }
  }

  /// Insert a classified asset; returns `false` and keeps the original
  /// mapping when the descriptor key is already present.
  pub fn insert_asset(&mut self, descriptor: Descriptor, reference: AssetReference) -> bool {
    self.assets.insert(descriptor, reference)
  }
}

/// Derive a package version by stripping the name and one separator from the
/// combined package id (`name@version`).
pub fn derive_version(name: &str, combined_id: &str) -> Result<String, MalformedPackageId> {
  combined_id
    .strip_prefix(name)
    .and_then(|rest| rest.strip_prefix(VERSION_SEPARATOR))
    .map(str::to_string)
    .ok_or_else(|| MalformedPackageId {
      name: name.to_string(),
      combined_id: combined_id.to_string(),
    })
}

/// Error produced when a combined package id does not start with the package
/// name followed by the version separator.
#[derive(Debug, Clone)]
pub struct MalformedPackageId {
  name: String,
  combined_id: String,
}

impl fmt::Display for MalformedPackageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "malformed package id '{}': expected '{}{}<version>'",
      self.combined_id, self.name, VERSION_SEPARATOR
    )
  }
}

impl std::error::Error for MalformedPackageId {}
