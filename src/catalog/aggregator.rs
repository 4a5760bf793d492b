//! Driving a full catalog run: package setup, path resolution,
//! classification and duplicate-aware insertion.

use tracing::warn;

use crate::catalog::classifier::{Classification, assembly_name, classify};
use crate::catalog::resolver::resolve_package;
use crate::environment::{AssetEnvironment, RawKind};
use crate::model::{AssetReference, Identifier, MalformedPackageId, PackageRecord, derive_version};

/// Completed aggregation: one record per discovered package plus the
/// duplicate-asset diagnostics collected along the way.
#[derive(Debug, Clone, Default)]
pub struct CatalogRun {
  /// Package records in the environment's enumeration order.
  pub records: Vec<PackageRecord>,
  /// One row per rejected duplicate insertion; the original mapping of each
  /// affected descriptor is preserved in its record.
  pub duplicates: Vec<DuplicateAsset>,
}

/// Diagnostic row describing one rejected duplicate insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateAsset {
  /// Name of the package whose asset map already held the descriptor.
  pub package: String,
  /// Path the duplicate handle was loaded from.
  pub path: String,
  /// The discarded reference.
  pub reference: AssetReference,
}

/// Run the full aggregation over every package and asset path the
/// environment enumerates.
///
/// Package setup failures abort the run; per-path and per-asset problems are
/// absorbed locally (warn diagnostic, skip) so one bad asset never loses the
/// rest of the catalog.
pub fn aggregate(env: &impl AssetEnvironment) -> Result<CatalogRun, MalformedPackageId> {
  let mut records = Vec::new();
  for source in env.packages() {
    let version = derive_version(&source.name, &source.combined_id)?;
    records.push(PackageRecord::new(
      source.name,
      version,
      source.root_path,
      source.registered,
    ));
  }

  let mut duplicates = Vec::new();
  for path in env.asset_paths() {
    let Some(record) = resolve_package(&path, &mut records) else {
      continue;
    };

    if let Some(assembly) = assembly_name(&path) {
      match parse_path_identifier(env, &path) {
        Some(identifier) => {
          // First registration wins; later ones are dropped silently.
          record.insert_assembly(assembly.to_string(), identifier);
        }
        None => warn!(%path, "skipping assembly without a usable path identifier"),
      }
      continue;
    }

    let handles = env.assets_at(&path);
    let needs_path_identifier = handles
      .iter()
      .any(|handle| matches!(handle.kind, RawKind::Script { .. }));
    let path_identifier = needs_path_identifier
      .then(|| parse_path_identifier(env, &path))
      .flatten();

    for handle in handles {
      match classify(&handle, path_identifier.as_ref()) {
        Ok(Classification::Asset {
          descriptor,
          reference,
        })
        | Ok(Classification::Script {
          descriptor,
          reference,
        }) => {
          if !record.insert_asset(descriptor, reference) {
            warn!(
              package = %record.name,
              %path,
              "duplicate asset descriptor; keeping the first reference"
            );
            duplicates.push(DuplicateAsset {
              package: record.name.clone(),
              path: path.clone(),
              reference,
            });
          }
        }
        Ok(Classification::Rejected(_)) => {}
        Err(err) => warn!(%path, asset = %handle.name, "skipping asset: {err}"),
      }
    }
  }

  Ok(CatalogRun {
    records,
    duplicates,
  })
}

/// Look up and parse the unique identifier of a path, warning on malformed
/// text. A `None` from the environment is left to the caller to report,
/// since whether that matters depends on what the path is used for.
fn parse_path_identifier(env: &impl AssetEnvironment, path: &str) -> Option<Identifier> {
  let text = env.path_identifier(path)?;
  match Identifier::parse(&text) {
    Ok(identifier) => Some(identifier),
    Err(err) => {
      warn!(%path, "ignoring path identifier: {err}");
      None
    }
  }
}
