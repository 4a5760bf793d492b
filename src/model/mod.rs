//! Data model for the package catalog: identifiers, references, descriptors
//! and the per-package record they aggregate into.

mod descriptor;
mod identifier;
mod record;
mod reference;

pub use descriptor::{Descriptor, GenericKind};
pub use identifier::{Identifier, MalformedIdentifier};
pub use record::{AssetMap, AssetRow, MalformedPackageId, PackageRecord, derive_version};
pub use reference::{AssetReference, StorageKind};

/// Serde adapter encoding byte payloads as standard-alphabet base64 strings.
pub(crate) mod base64_bytes {
  use base64::{Engine as _, engine::general_purpose};
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let text = String::deserialize(deserializer)?;
    general_purpose::STANDARD
      .decode(text.as_bytes())
      .map_err(D::Error::custom)
  }
}
