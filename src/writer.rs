//! Serializing completed package records to the output document directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::PackageRecord;

/// Summary of a successful catalog write.
#[derive(Debug, Clone)]
pub struct WriteReport {
  /// Directory the documents were written under.
  pub directory: PathBuf,
  /// Paths of the written documents, in record order.
  pub written: Vec<PathBuf>,
}

/// Write one `{name}.json` document per record under `output_dir`.
///
/// The directory is recursively deleted first when it pre-exists, so the
/// output always reflects exactly this run. Failures after the directory is
/// recreated carry the list of documents already written, so a partial
/// failure names what succeeded.
pub fn write_catalog(
  records: &[PackageRecord],
  output_dir: &Path,
  pretty: bool,
) -> Result<WriteReport, WriteError> {
  if output_dir.exists() {
    fs::remove_dir_all(output_dir).map_err(|source| WriteError::Clear {
      path: output_dir.to_path_buf(),
      source,
    })?;
  }
  fs::create_dir_all(output_dir).map_err(|source| WriteError::Create {
    path: output_dir.to_path_buf(),
    source,
  })?;

  let mut written: Vec<PathBuf> = Vec::new();
  for record in records {
    let document = if pretty {
      serde_json::to_string_pretty(record)
    } else {
      serde_json::to_string(record)
    }
    .map_err(|source| WriteError::Encode {
      package: record.name.clone(),
      written: written.clone(),
      source,
    })?;

    let path = output_dir.join(format!("{}.json", record.name));
    fs::write(&path, document).map_err(|source| WriteError::Write {
      path: path.clone(),
      written: written.clone(),
      source,
    })?;
    written.push(path);
  }

  Ok(WriteReport {
    directory: output_dir.to_path_buf(),
    written,
  })
}

/// Errors that can occur while writing the catalog documents.
#[derive(Debug)]
pub enum WriteError {
  /// Failed to delete a pre-existing output directory.
  Clear {
    /// The output directory.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to create the output directory.
  Create {
    /// The output directory.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to encode one record as JSON.
  Encode {
    /// Name of the record that failed to encode.
    package: String,
    /// Documents successfully written before the failure.
    written: Vec<PathBuf>,
    /// Source serialization error.
    source: serde_json::Error,
  },
  /// Failed to write one document to disk.
  Write {
    /// Path of the document that failed.
    path: PathBuf,
    /// Documents successfully written before the failure.
    written: Vec<PathBuf>,
    /// Source I/O error.
    source: std::io::Error,
  },
}

impl WriteError {
  /// Documents that were fully written before the failure, when the failure
  /// happened after the output directory was recreated.
  pub fn written(&self) -> &[PathBuf] {
    match self {
      Self::Clear { .. } | Self::Create { .. } => &[],
      Self::Encode { written, .. } | Self::Write { written, .. } => written,
    }
  }
}

impl std::fmt::Display for WriteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Clear { path, source } => {
        write!(f, "failed to clear {}: {}", path.display(), source)
      }
      Self::Create { path, source } => {
        write!(f, "failed to create {}: {}", path.display(), source)
      }
      Self::Encode {
        package,
        written,
        source,
      } => write!(
        f,
        "failed to encode document for '{}' ({} written before failure): {}",
        package,
        written.len(),
        source
      ),
      Self::Write {
        path,
        written,
        source,
      } => write!(
        f,
        "failed to write {} ({} written before failure): {}",
        path.display(),
        written.len(),
        source
      ),
    }
  }
}

impl std::error::Error for WriteError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Clear { source, .. } | Self::Create { source, .. } | Self::Write { source, .. } => {
        Some(source)
      }
      Self::Encode { source, .. } => Some(source),
    }
  }
}
