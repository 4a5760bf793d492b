//! Classification of raw asset handles into typed descriptors.

use crate::environment::{RawAsset, RawKind};
use crate::model::{
  AssetReference, Descriptor, GenericKind, Identifier, MalformedIdentifier, StorageKind,
};

/// File extension marking a path as a compiled assembly.
pub const ASSEMBLY_EXTENSION: &str = ".dll";

/// Texture name synthesized by font import; excluded from the catalog.
const FONT_TEXTURE_NAME: &str = "Font Texture";

/// Material name synthesized by font import; excluded from the catalog.
const FONT_MATERIAL_NAME: &str = "Font Material";

/// Outcome of classifying one raw asset handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
  /// A compiled-script class recorded against the owning path's identifier.
  Script {
    /// Script-reference descriptor.
    descriptor: Descriptor,
    /// Reference derived from the owning path.
    reference: AssetReference,
  },
  /// A recognized data asset with a resolvable storage location.
  Asset {
    /// Structural descriptor for the asset.
    descriptor: Descriptor,
    /// Reference derived from the handle's location.
    reference: AssetReference,
  },
  /// The handle produces no catalog entry; never an error.
  Rejected(Rejection),
}

/// Why a handle produced no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
  /// The handle exposes no resolvable storage location.
  NoLocation,
  /// A script handle resolved to no runtime class.
  UnresolvedScript,
  /// A script class that is not assignable to the engine-object capability.
  NotEngineObject,
  /// A script at a path the environment has no identifier for.
  NoPathIdentifier,
  /// A synthetic font-import by-product with a reserved name.
  ReservedName,
  /// A handle of a kind outside the closed descriptor set.
  UnrecognizedKind,
}

/// Assembly short name for `path`, when the path names a compiled assembly.
///
/// A `Some` return means classification of the path stops here: assemblies
/// are registered from the path alone and the handles at the path are never
/// inspected.
pub fn assembly_name(path: &str) -> Option<&str> {
  let stem = path.strip_suffix(ASSEMBLY_EXTENSION)?;
  stem.rsplit(['/', '\\']).next()
}

/// Classify one raw handle into a descriptor and reference, a rejection, or
/// a malformed-identifier error for this single handle.
///
/// `path_identifier` is the identifier of the owning path, used only for
/// compiled-script handles. Kinds are tested in a fixed priority order
/// (shader, text asset, mesh, cubemap, texture, audio clip, font, compute
/// shader, material, sprite); the discriminant makes dual matches
/// unrepresentable, and the match arms keep the reference order.
pub fn classify(
  raw: &RawAsset,
  path_identifier: Option<&Identifier>,
) -> Result<Classification, MalformedIdentifier> {
  if let RawKind::Script { class } = &raw.kind {
    let Some(class) = class else {
      return Ok(Classification::Rejected(Rejection::UnresolvedScript));
    };
    if !class.engine_object {
      return Ok(Classification::Rejected(Rejection::NotEngineObject));
    }
    let Some(identifier) = path_identifier else {
      return Ok(Classification::Rejected(Rejection::NoPathIdentifier));
    };
    return Ok(Classification::Script {
      descriptor: Descriptor::ScriptReference {
        type_name: class.type_name.clone(),
        assembly: class.assembly.clone(),
      },
      reference: AssetReference::new(0, *identifier, StorageKind::Meta),
    });
  }

  let Some(location) = &raw.location else {
    return Ok(Classification::Rejected(Rejection::NoLocation));
  };
  let identifier = Identifier::parse(&location.identifier)?;
  let reference = AssetReference::new(location.local_index, identifier, location.kind);

  let descriptor = match &raw.kind {
    RawKind::Shader { properties } => Descriptor::Shader {
      name: raw.name.clone(),
      properties: properties.clone(),
    },
    RawKind::TextAsset { content } => Descriptor::TextAsset {
      name: raw.name.clone(),
      content: content.clone(),
    },
    RawKind::Mesh {
      vertex_count,
      sub_mesh_count,
    } => Descriptor::Mesh {
      name: raw.name.clone(),
      vertex_count: *vertex_count,
      sub_mesh_count: *sub_mesh_count,
    },
    RawKind::Cubemap { width, height } => Descriptor::Cubemap {
      name: raw.name.clone(),
      width: *width,
      height: *height,
    },
    RawKind::Texture2D { width, height } => {
      if raw.name == FONT_TEXTURE_NAME {
        return Ok(Classification::Rejected(Rejection::ReservedName));
      }
      Descriptor::Texture2D {
        name: raw.name.clone(),
        width: *width,
        height: *height,
      }
    }
    RawKind::AudioClip {
      channels,
      frequency,
      duration,
    } => Descriptor::AudioClip {
      name: raw.name.clone(),
      channels: *channels,
      frequency: *frequency,
      duration: *duration,
    },
    RawKind::Font => Descriptor::GenericNamedObject {
      kind: GenericKind::Font,
      name: raw.name.clone(),
    },
    RawKind::ComputeShader => Descriptor::GenericNamedObject {
      kind: GenericKind::ComputeShader,
      name: raw.name.clone(),
    },
    RawKind::Material { shader } => {
      if raw.name == FONT_MATERIAL_NAME {
        return Ok(Classification::Rejected(Rejection::ReservedName));
      }
      Descriptor::Material {
        name: raw.name.clone(),
        shader: shader.clone(),
      }
    }
    RawKind::Sprite { texture } => Descriptor::Sprite {
      name: raw.name.clone(),
      texture: texture.clone(),
    },
    RawKind::Script { .. } | RawKind::Other => {
      return Ok(Classification::Rejected(Rejection::UnrecognizedKind));
    }
  };

  Ok(Classification::Asset {
    descriptor,
    reference,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::environment::{RawLocation, ScriptClass};

  fn location(identifier: &str) -> RawLocation {
    RawLocation {
      identifier: identifier.into(),
      local_index: 2,
      kind: StorageKind::Serialized,
    }
  }

  fn raw(name: &str, kind: RawKind) -> RawAsset {
    RawAsset {
      name: name.into(),
      kind,
      location: Some(location("11111111111111111111111111111111")),
    }
  }

  fn path_id() -> Identifier {
    Identifier::parse("22222222222222222222222222222222").unwrap()
  }

  #[test]
  fn recognizes_assembly_paths_by_extension() {
    assert_eq!(
      assembly_name("Packages/com.foo.bar/Lib/Foo.Runtime.dll"),
      Some("Foo.Runtime")
    );
    assert_eq!(assembly_name("Lib\\Bar.Editor.dll"), Some("Bar.Editor"));
    assert_eq!(assembly_name("Packages/com.foo.bar/Lit.shader"), None);
    // Extension comparison is ordinal, like the rest of path handling.
    assert_eq!(assembly_name("Lib/Foo.DLL"), None);
  }

  #[test]
  fn classifies_a_shader_handle() {
    let raw = raw(
      "Lit",
      RawKind::Shader {
        properties: vec!["_Color".into(), "_MainTex".into()],
      },
    );

    match classify(&raw, None).unwrap() {
      Classification::Asset {
        descriptor,
        reference,
      } => {
        assert_eq!(
          descriptor,
          Descriptor::Shader {
            name: "Lit".into(),
            properties: vec!["_Color".into(), "_MainTex".into()],
          }
        );
        assert_eq!(reference.local_index, 2);
        assert_eq!(reference.kind, StorageKind::Serialized);
      }
      other => panic!("unexpected classification: {other:?}"),
    }
  }

  #[test]
  fn classifies_each_data_kind() {
    let cases = vec![
      (raw("t", RawKind::TextAsset { content: b"x".to_vec() }), "TextAsset"),
      (
        raw(
          "m",
          RawKind::Mesh {
            vertex_count: 8,
            sub_mesh_count: 1,
          },
        ),
        "Mesh",
      ),
      (raw("c", RawKind::Cubemap { width: 64, height: 64 }), "Cubemap"),
      (raw("t2", RawKind::Texture2D { width: 32, height: 32 }), "Texture2D"),
      (
        raw(
          "a",
          RawKind::AudioClip {
            channels: 2,
            frequency: 44100,
            duration: 1.5,
          },
        ),
        "AudioClip",
      ),
      (raw("f", RawKind::Font), "GenericNamedObject"),
      (raw("cs", RawKind::ComputeShader), "GenericNamedObject"),
      (raw("mat", RawKind::Material { shader: Some("Lit".into()) }), "Material"),
      (raw("s", RawKind::Sprite { texture: None }), "Sprite"),
    ];

    for (handle, tag) in cases {
      match classify(&handle, None).unwrap() {
        Classification::Asset { descriptor, .. } => {
          let json = serde_json::to_value(&descriptor).unwrap();
          assert_eq!(json["type"], tag, "handle {}", handle.name);
        }
        other => panic!("unexpected classification for {}: {other:?}", handle.name),
      }
    }
  }

  #[test]
  fn excludes_reserved_font_import_names() {
    let texture = raw("Font Texture", RawKind::Texture2D { width: 128, height: 128 });
    assert_eq!(
      classify(&texture, None).unwrap(),
      Classification::Rejected(Rejection::ReservedName)
    );

    let material = raw("Font Material", RawKind::Material { shader: None });
    assert_eq!(
      classify(&material, None).unwrap(),
      Classification::Rejected(Rejection::ReservedName)
    );

    // Only the exact reserved names are excluded.
    let ordinary = raw("Font Texture 2", RawKind::Texture2D { width: 128, height: 128 });
    assert!(matches!(
      classify(&ordinary, None).unwrap(),
      Classification::Asset { .. }
    ));
  }

  #[test]
  fn rejects_handles_without_a_location() {
    let handle = RawAsset {
      name: "floating".into(),
      kind: RawKind::Mesh {
        vertex_count: 1,
        sub_mesh_count: 1,
      },
      location: None,
    };
    assert_eq!(
      classify(&handle, None).unwrap(),
      Classification::Rejected(Rejection::NoLocation)
    );
  }

  #[test]
  fn rejects_unrecognized_kinds() {
    let handle = raw("mystery", RawKind::Other);
    assert_eq!(
      classify(&handle, None).unwrap(),
      Classification::Rejected(Rejection::UnrecognizedKind)
    );
  }

  #[test]
  fn malformed_location_identifier_is_an_error() {
    let handle = RawAsset {
      name: "broken".into(),
      kind: RawKind::Font,
      location: Some(location("not-hex")),
    };
    assert!(classify(&handle, None).is_err());
  }

  #[test]
  fn script_with_engine_class_becomes_a_script_reference() {
    let handle = RawAsset {
      name: "Mover".into(),
      kind: RawKind::Script {
        class: Some(ScriptClass {
          type_name: "Foo.Mover".into(),
          assembly: "Foo.Runtime".into(),
          engine_object: true,
        }),
      },
      location: None,
    };

    let id = path_id();
    match classify(&handle, Some(&id)).unwrap() {
      Classification::Script {
        descriptor,
        reference,
      } => {
        assert_eq!(
          descriptor,
          Descriptor::ScriptReference {
            type_name: "Foo.Mover".into(),
            assembly: "Foo.Runtime".into(),
          }
        );
        assert_eq!(reference.identifier, id);
        assert_eq!(reference.local_index, 0);
        assert_eq!(reference.kind, StorageKind::Meta);
      }
      other => panic!("unexpected classification: {other:?}"),
    }
  }

  #[test]
  fn scripts_without_a_class_or_capability_are_silently_rejected() {
    let unresolved = RawAsset {
      name: "Broken".into(),
      kind: RawKind::Script { class: None },
      location: None,
    };
    let id = path_id();
    assert_eq!(
      classify(&unresolved, Some(&id)).unwrap(),
      Classification::Rejected(Rejection::UnresolvedScript)
    );

    let plain = RawAsset {
      name: "Helper".into(),
      kind: RawKind::Script {
        class: Some(ScriptClass {
          type_name: "Foo.Helper".into(),
          assembly: "Foo.Runtime".into(),
          engine_object: false,
        }),
      },
      location: None,
    };
    assert_eq!(
      classify(&plain, Some(&id)).unwrap(),
      Classification::Rejected(Rejection::NotEngineObject)
    );
  }

  #[test]
  fn scripts_need_a_path_identifier() {
    let handle = RawAsset {
      name: "Mover".into(),
      kind: RawKind::Script {
        class: Some(ScriptClass {
          type_name: "Foo.Mover".into(),
          assembly: "Foo.Runtime".into(),
          engine_object: true,
        }),
      },
      location: None,
    };
    assert_eq!(
      classify(&handle, None).unwrap(),
      Classification::Rejected(Rejection::NoPathIdentifier)
    );
  }
}
