//! Associating asset paths with the package records that own them.

use crate::model::PackageRecord;

/// Resolve the record owning `path` by scanning root paths in registration
/// order and returning the first whose root is a byte-wise prefix of `path`.
///
/// Comparison is ordinal and case-sensitive with no normalization. There is
/// deliberately no longest-match tie-break: when two registered packages have
/// overlapping root prefixes, the one registered first wins. Paths outside
/// every root resolve to `None` and are skipped by the aggregation.
pub fn resolve_package<'a>(
  path: &str,
  records: &'a mut [PackageRecord],
) -> Option<&'a mut PackageRecord> {
  records
    .iter_mut()
    .find(|record| path.starts_with(&record.root_path))
}
