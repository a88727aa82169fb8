//! Subcommand handlers.
//!
//! Each module handles one subcommand; `main.rs` parses arguments and
//! dispatches here.

pub mod itinerary;
pub mod nearest;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use routemate_lib::{resolve_dataset_path, Catalog, CatalogSchema, CatalogSlot, CatalogStatus};

/// Resolve the airport dataset and load it into a ready slot.
///
/// `dataset` overrides `ROUTEMATE_AIRPORTS_PATH` and the platform default.
pub fn load_airports(dataset: Option<&Path>) -> Result<CatalogSlot> {
    let path =
        resolve_dataset_path(dataset).context("failed to resolve the airport dataset location")?;
    debug!(path = %path.display(), "loading airport dataset");

    let slot = CatalogSlot::new();
    if let CatalogStatus::Failed { reason } =
        slot.load_with(|| Catalog::from_path(CatalogSchema::airports(), &path))
    {
        bail!(
            "failed to load airport dataset from {}: {}",
            path.display(),
            reason
        );
    }

    Ok(slot)
}
