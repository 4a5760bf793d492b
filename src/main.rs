//! Command-line surface for the package asset catalog.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use package_asset_catalog::model::derive_version;
use package_asset_catalog::{CatalogConfig, Snapshot, aggregate, write_catalog};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the packages known to a snapshot
  Packages {
    /// Path to the enumeration snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,
  },
  /// List every asset path known to a snapshot
  Paths {
    /// Path to the enumeration snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,
  },
  /// Aggregate the catalog and write one JSON document per package
  Export {
    /// Path to the enumeration snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,
  },
}

fn main() -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .init();

  let cli = Cli::parse();
  match cli.command {
    Commands::Packages { snapshot } => {
      let snapshot = Snapshot::load_from_path(&snapshot)?;
      let packages = snapshot.packages;
      println!("Found {} packages", packages.len());
      for package in packages {
        let version = derive_version(&package.name, &package.combined_id)
          .with_context(|| format!("package '{}'", package.name))?;
        println!(
          "Name: {} Version: {} Root: {}",
          package.name, version, package.root_path
        );
      }
    }
    Commands::Paths { snapshot } => {
      let snapshot = Snapshot::load_from_path(&snapshot)?;
      println!("Found {} asset paths", snapshot.asset_paths.len());
      for path in snapshot.asset_paths {
        println!("Asset Path: {path}");
      }
    }
    Commands::Export { snapshot } => {
      let config = CatalogConfig::discover(Path::new("."));
      let snapshot = Snapshot::load_from_path(&snapshot)?;
      let run = aggregate(&snapshot)?;
      let report = write_catalog(&run.records, Path::new(&config.output_dir), config.pretty)
        .context("failed to write catalog documents")?;
      println!("Wrote data for {} packages", report.written.len());
    }
  }

  Ok(())
}
