//! The classification-and-aggregation pipeline.
//!
//! Split into focused submodules so path resolution, handle classification
//! and the aggregation driver can be tested independently.

mod aggregator;
mod classifier;
mod resolver;

pub use aggregator::{CatalogRun, DuplicateAsset, aggregate};
pub use classifier::{
  ASSEMBLY_EXTENSION, Classification, Rejection, assembly_name, classify,
};
pub use resolver::resolve_package;
