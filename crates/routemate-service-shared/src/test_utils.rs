//! Test utilities for microservice handler testing.
//!
//! This module provides fixtures and helpers for testing HTTP handlers
//! with the checked-in sample airport dataset.

use std::path::PathBuf;
use std::sync::OnceLock;

use routemate_lib::{Catalog, CatalogSchema};

use crate::state::AppState;

/// Path to the sample airport dataset.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/airports_sample.csv"
);

/// Lazily-initialized ready state using the sample dataset.
static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get the absolute path to the sample dataset.
pub fn fixture_csv_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Load the sample dataset into a fresh catalog.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded. This indicates a test
/// configuration issue.
pub fn fixture_catalog() -> Catalog {
    let path = fixture_csv_path();
    Catalog::from_path(CatalogSchema::airports(), &path)
        .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
}

/// Get a shared, ready AppState loaded from the sample dataset.
///
/// The state is cached after the first load.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| AppState::with_airports(fixture_catalog()))
        .clone()
}

/// Known airports in the sample dataset for use in tests.
pub mod fixture_airports {
    /// John F Kennedy International Airport.
    pub const JFK: &str = "KJFK";

    /// LaGuardia Airport, nearest to Times Square.
    pub const LGA: &str = "KLGA";

    /// London Heathrow Airport, nearest to central London.
    pub const LHR: &str = "EGLL";

    /// Westchester County Airport, the only medium airport with an ident.
    pub const HPN: &str = "KHPN";

    /// Times Square, Manhattan.
    pub const TIMES_SQUARE: (f64, f64) = (40.7580, -73.9855);

    /// Charing Cross, central London.
    pub const CENTRAL_LONDON: (f64, f64) = (51.5074, -0.1278);
}
