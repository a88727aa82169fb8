//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use routemate_lib::{Catalog, CatalogSchema, CatalogSlot};

/// Path to the checked-in airport sample dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/airports_sample.csv")
}

/// Load the sample dataset into a catalog.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(CatalogSchema::airports(), &fixture_path()).expect("fixture loads")
}

/// A ready slot holding the sample dataset.
#[allow(dead_code)]
pub fn fixture_slot() -> CatalogSlot {
    CatalogSlot::ready(fixture_catalog())
}

/// Build a ready slot from inline CSV text.
#[allow(dead_code)]
pub fn slot_from_csv(csv: &str) -> CatalogSlot {
    let catalog =
        Catalog::from_reader(CatalogSchema::airports(), csv.as_bytes()).expect("inline csv loads");
    CatalogSlot::ready(catalog)
}
