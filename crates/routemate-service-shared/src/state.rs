//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the airport catalog. The catalog lives in a write-once
//! [`CatalogSlot`], so handlers can run while ingestion is still in progress
//! and will see a not-ready signal until it finishes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use routemate_lib::{Catalog, CatalogSchema, CatalogSlot, CatalogStatus, FacilityKind};
use routemate_lib::Error as LibError;

use crate::metrics::record_catalog_size;

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use routemate_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let status = state.airports().status();
///     // ... answer based on readiness
/// }
///
/// let state = AppState::new();
/// state.spawn_airport_load("/data/airports.csv".into());
/// let app = Router::new()
///     .route("/api/v1/nearest-airport", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    airports: CatalogSlot,
    loaded_at: OnceLock<DateTime<Utc>>,
}

impl AppState {
    /// Create state with an empty, not-ready airport catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an already-built airport catalog.
    ///
    /// This is useful for testing or when the catalog was loaded up front.
    pub fn with_airports(catalog: Catalog) -> Self {
        let state = Self::new();
        state.finish(Ok(catalog));
        state
    }

    /// The airport catalog slot.
    pub fn airports(&self) -> &CatalogSlot {
        &self.inner.airports
    }

    /// When the airport catalog became ready, if it has.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.inner.loaded_at.get().copied()
    }

    /// Load the airport catalog from `path` on the current thread.
    ///
    /// The slot is completed exactly once; calling this again after
    /// completion is a no-op that reports the existing status.
    pub fn load_airports(&self, path: &Path) -> CatalogStatus {
        if self.airports().catalog().is_some() || self.airports().failure().is_some() {
            return self.airports().status();
        }

        tracing::info!(path = %path.display(), "loading airport catalog");
        self.airports().begin_loading();
        self.finish(Catalog::from_path(CatalogSchema::airports(), path));
        self.airports().status()
    }

    /// Load the airport catalog on the blocking thread pool.
    ///
    /// Must be called from within a Tokio runtime. Queries made before the
    /// returned task finishes receive a not-ready error.
    pub fn spawn_airport_load(&self, path: PathBuf) -> JoinHandle<CatalogStatus> {
        self.airports().begin_loading();
        let state = self.clone();
        tokio::task::spawn_blocking(move || state.load_airports(&path))
    }

    /// Mark the airport catalog as permanently failed without loading.
    ///
    /// Used when the dataset location itself cannot be resolved.
    pub fn fail_airports(&self, error: LibError) {
        self.finish(Err(error));
    }

    fn finish(&self, result: routemate_lib::Result<Catalog>) {
        if !self.airports().complete(result) {
            return;
        }

        if let Some(catalog) = self.airports().catalog() {
            let _ = self.inner.loaded_at.set(Utc::now());
            record_catalog_size(FacilityKind::Airport.as_str(), catalog.len());
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("airports", &self.airports().status().label())
            .field("loaded_at", &self.loaded_at())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_airports() -> Catalog {
        let csv = "id,ident,type,name,latitude_deg,longitude_deg,iso_country\n\
                   1,KAAA,large_airport,Alpha,10,10,US\n\
                   2,KBBB,medium_airport,Beta,20,20,US\n";
        Catalog::from_reader(CatalogSchema::airports(), csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_new_state_is_not_ready() {
        let state = AppState::new();
        assert_eq!(state.airports().status(), CatalogStatus::Uninitialized);
        assert!(state.loaded_at().is_none());
    }

    #[test]
    fn test_with_airports_is_ready() {
        let state = AppState::with_airports(two_airports());
        assert_eq!(
            state.airports().status(),
            CatalogStatus::Ready { facilities: 2 }
        );
        assert!(state.loaded_at().is_some());
    }

    #[test]
    fn test_clone_shares_catalog() {
        let state1 = AppState::new();
        let state2 = state1.clone();
        state1.finish(Ok(two_airports()));

        assert!(state2.airports().status().is_ready());
    }

    #[test]
    fn test_load_missing_dataset_fails() {
        let state = AppState::new();
        let status = state.load_airports(Path::new("/nonexistent/path/to/airports.csv"));

        match status {
            CatalogStatus::Failed { reason } => assert!(reason.contains("nonexistent")),
            other => panic!("unexpected status: {:?}", other),
        }
        assert!(state.loaded_at().is_none());
    }

    #[test]
    fn test_fail_airports_is_terminal() {
        let state = AppState::new();
        state.fail_airports(LibError::ProjectDirsUnavailable);
        state.finish(Ok(two_airports()));

        assert_eq!(state.airports().status().label(), "failed");
    }

    #[tokio::test]
    async fn test_spawned_load_completes() {
        let state = AppState::new();
        let handle = state.spawn_airport_load(PathBuf::from("/nonexistent/airports.csv"));
        let status = handle.await.unwrap();

        assert_eq!(status.label(), "failed");
        assert_eq!(state.airports().status(), status);
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::new();
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("uninitialized"));
    }
}
