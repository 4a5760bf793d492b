//! Boundary types and the narrow interface to the host editor environment.
//!
//! The editor owns package enumeration, asset-path enumeration and raw asset
//! loading; this crate only observes. The open-ended runtime type checks the
//! editor performs are mapped once at this boundary into the [`RawKind`]
//! discriminant, so classification downstream is an ordered match over a
//! closed set rather than dynamic inspection.

use serde::{Deserialize, Serialize};

use crate::model::StorageKind;

/// Raw package row as enumerated by the host environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSource {
  /// Package name, e.g. `com.foo.bar`.
  pub name: String,
  /// Combined package identifier, `name@version`.
  pub combined_id: String,
  /// Root asset path owning the package's files.
  pub root_path: String,
  /// Whether the package is registered with the environment.
  pub registered: bool,
}

/// Resolvable storage location exposed by a raw asset handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
  /// Identifier of the owning source file, as hexadecimal text.
  pub identifier: String,
  /// Local slot of the asset within the source file.
  pub local_index: i64,
  /// Storage kind the asset was discovered through.
  pub kind: StorageKind,
}

/// Runtime class a compiled-script handle resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptClass {
  /// Fully-qualified type name.
  pub type_name: String,
  /// Short name of the defining assembly.
  pub assembly: String,
  /// Whether the type is assignable to the base engine-object capability.
  pub engine_object: bool,
}

/// Kind discriminant plus kind-specific fields for one raw asset handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum RawKind {
  /// A shader exposing its declared property names.
  Shader {
    /// Declared property names, in declaration order.
    properties: Vec<String>,
  },
  /// A text asset exposing its raw bytes.
  TextAsset {
    /// Raw byte content, base64 in the serialized form.
    #[serde(with = "crate::model::base64_bytes")]
    content: Vec<u8>,
  },
  /// A mesh exposing its vertex and sub-mesh counts.
  Mesh {
    /// Number of vertices.
    vertex_count: u32,
    /// Number of sub-meshes.
    sub_mesh_count: u32,
  },
  /// A cubemap exposing its face dimensions.
  Cubemap {
    /// Face width in pixels.
    width: u32,
    /// Face height in pixels.
    height: u32,
  },
  /// A two-dimensional texture exposing its dimensions.
  Texture2D {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
  },
  /// An audio clip exposing its playback parameters.
  AudioClip {
    /// Channel count.
    channels: u32,
    /// Sample frequency in hertz.
    frequency: u32,
    /// Clip duration in seconds.
    duration: f32,
  },
  /// A font asset.
  Font,
  /// A compute shader asset.
  ComputeShader,
  /// A material, optionally naming its assigned shader.
  Material {
    /// Name of the assigned shader, if any.
    #[serde(default)]
    shader: Option<String>,
  },
  /// A sprite, optionally naming its source texture.
  Sprite {
    /// Name of the source texture, if any.
    #[serde(default)]
    texture: Option<String>,
  },
  /// A compiled-script handle, possibly resolved to a runtime class.
  Script {
    /// The resolved class, absent when the script resolves to no type.
    #[serde(default)]
    class: Option<ScriptClass>,
  },
  /// A handle of a kind the catalog does not recognize.
  Other,
}

/// One raw asset handle loaded from a path by the host environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAsset {
  /// Object name reported by the handle.
  pub name: String,
  /// Kind discriminant and kind-specific fields.
  pub kind: RawKind,
  /// Resolvable storage location, absent when the handle exposes none.
  #[serde(default)]
  pub location: Option<RawLocation>,
}

/// The enumeration services the host environment supplies to a catalog run.
///
/// Implementations are expected to return packages and paths in a stable
/// order; the aggregation's output order and its first-match package
/// resolution both follow the order given here.
pub trait AssetEnvironment {
  /// All installed packages known to the environment.
  fn packages(&self) -> Vec<PackageSource>;

  /// Every asset file path known to the environment.
  fn asset_paths(&self) -> Vec<String>;

  /// Raw asset handles loaded from one path; may be empty.
  fn assets_at(&self, path: &str) -> Vec<RawAsset>;

  /// Unique identifier text for a path, when the environment knows one.
  fn path_identifier(&self, path: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn raw_asset_deserializes_from_tagged_json() {
    let raw: RawAsset = serde_json::from_str(
      r#"{
        "name": "Lit",
        "kind": { "kind": "Shader", "properties": ["_Color"] },
        "location": {
          "identifier": "11111111111111111111111111111111",
          "localIndex": 2,
          "kind": "serialized"
        }
      }"#,
    )
    .unwrap();

    assert_eq!(raw.name, "Lit");
    assert!(matches!(raw.kind, RawKind::Shader { .. }));
    let location = raw.location.unwrap();
    assert_eq!(location.local_index, 2);
    assert_eq!(location.kind, StorageKind::Serialized);
  }

  #[test]
  fn location_and_optional_fields_default_to_absent() {
    let raw: RawAsset =
      serde_json::from_str(r#"{ "name": "mystery", "kind": { "kind": "Other" } }"#).unwrap();
    assert!(raw.location.is_none());

    let raw: RawAsset =
      serde_json::from_str(r#"{ "name": "Default", "kind": { "kind": "Material" } }"#).unwrap();
    assert!(matches!(raw.kind, RawKind::Material { shader: None }));
  }

  #[test]
  fn script_class_round_trips() {
    let raw: RawAsset = serde_json::from_str(
      r#"{
        "name": "Mover",
        "kind": {
          "kind": "Script",
          "class": {
            "typeName": "Foo.Mover",
            "assembly": "Foo.Runtime",
            "engineObject": true
          }
        }
      }"#,
    )
    .unwrap();

    match raw.kind {
      RawKind::Script { class: Some(class) } => {
        assert_eq!(class.type_name, "Foo.Mover");
        assert!(class.engine_object);
      }
      other => panic!("unexpected kind: {other:?}"),
    }
  }
}
