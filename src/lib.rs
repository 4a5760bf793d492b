#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod environment;
pub mod model;
pub mod snapshot;
pub mod writer;

pub use catalog::{CatalogRun, aggregate};
pub use config::CatalogConfig;
pub use environment::AssetEnvironment;
pub use snapshot::Snapshot;
pub use writer::{WriteReport, write_catalog};
