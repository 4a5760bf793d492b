//! The closed set of typed asset descriptors recognized by the catalog.

use serde::{Deserialize, Serialize};

/// Kind tag for assets where only identity matters, not content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericKind {
  /// A font asset.
  Font,
  /// A compute shader asset.
  ComputeShader,
}

/// Structural description of one classified asset: its kind plus the fields
/// needed to distinguish it from other assets of the same kind.
///
/// Two descriptors of the same variant with identical field values are the
/// same catalog key; the per-package asset map enforces uniqueness under this
/// structural equality. The serialized form carries a `type` discriminator so
/// every variant stays distinguishable in the written document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Descriptor {
  /// A shader and its ordered property names.
  Shader {
    /// Asset name.
    name: String,
    /// Declared property names, in declaration order.
    properties: Vec<String>,
  },
  /// A text asset and its raw byte content.
  TextAsset {
    /// Asset name.
    name: String,
    /// Raw byte content, serialized as base64.
    #[serde(with = "crate::model::base64_bytes")]
    content: Vec<u8>,
  },
  /// A mesh, described by its vertex and sub-mesh counts.
  Mesh {
    /// Asset name.
    name: String,
    /// Number of vertices.
    vertex_count: u32,
    /// Number of sub-meshes.
    sub_mesh_count: u32,
  },
  /// A cubemap texture.
  Cubemap {
    /// Asset name.
    name: String,
    /// Face width in pixels.
    width: u32,
    /// Face height in pixels.
    height: u32,
  },
  /// A two-dimensional texture.
  Texture2D {
    /// Asset name.
    name: String,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
  },
  /// An audio clip.
  AudioClip {
    /// Asset name.
    name: String,
    /// Channel count.
    channels: u32,
    /// Sample frequency in hertz.
    frequency: u32,
    /// Clip duration in seconds.
    duration: f32,
  },
  /// A material, optionally naming its assigned shader.
  Material {
    /// Asset name.
    name: String,
    /// Name of the assigned shader, absent when none is assigned.
    shader: Option<String>,
  },
  /// A sprite, optionally naming its source texture.
  Sprite {
    /// Asset name.
    name: String,
    /// Name of the source texture, absent when none exists.
    texture: Option<String>,
  },
  /// An asset recorded by kind and name alone.
  GenericNamedObject {
    /// Which generic kind the asset is.
    kind: GenericKind,
    /// Asset name.
    name: String,
  },
  /// A compiled script class, referenced rather than described.
  ScriptReference {
    /// Fully-qualified type name of the script class.
    type_name: String,
    /// Short name of the assembly defining the class.
    assembly: String,
  },
}

impl Descriptor {
  /// The asset name carried by the descriptor; for script references this is
  /// the fully-qualified type name.
  pub fn name(&self) -> &str {
    match self {
      Self::Shader { name, .. }
      | Self::TextAsset { name, .. }
      | Self::Mesh { name, .. }
      | Self::Cubemap { name, .. }
      | Self::Texture2D { name, .. }
      | Self::AudioClip { name, .. }
      | Self::Material { name, .. }
      | Self::Sprite { name, .. }
      | Self::GenericNamedObject { name, .. } => name,
      Self::ScriptReference { type_name, .. } => type_name,
    }
  }
}
