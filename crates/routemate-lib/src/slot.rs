//! Write-once holder for a catalog and its readiness.
//!
//! A [`CatalogSlot`] starts empty, is marked as loading when ingestion
//! begins, and is completed exactly once with either a catalog or a load
//! failure. Both outcomes are terminal for the process. Readers never take a
//! lock: completion is an initialization barrier, so a reader that observes
//! `Ready` also observes the fully built catalog.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::nearest::LookupError;

/// Observable readiness of a [`CatalogSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogStatus {
    /// Nothing has started loading yet.
    Uninitialized,
    /// Ingestion is in progress.
    Loading,
    /// Ingestion finished; queries are served.
    Ready { facilities: usize },
    /// Ingestion failed; queries will never be served by this process.
    Failed { reason: String },
}

impl CatalogStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready { .. })
    }

    /// Short label for logs and health output.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogStatus::Uninitialized => "uninitialized",
            CatalogStatus::Loading => "loading",
            CatalogStatus::Ready { .. } => "ready",
            CatalogStatus::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Ready(Catalog),
    Failed(String),
}

/// Shared, write-once catalog holder.
#[derive(Debug, Default)]
pub struct CatalogSlot {
    loading: AtomicBool,
    outcome: OnceLock<Outcome>,
}

impl CatalogSlot {
    /// Create an empty, not-ready slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that is already ready with `catalog`.
    pub fn ready(catalog: Catalog) -> Self {
        let slot = Self::new();
        slot.complete(Ok(catalog));
        slot
    }

    /// Mark ingestion as started. Has no visible effect once completed.
    pub fn begin_loading(&self) {
        self.loading.store(true, Ordering::Release);
    }

    /// Record the result of ingestion.
    ///
    /// Returns `false` and leaves the slot untouched if it was already
    /// completed.
    pub fn complete(&self, result: Result<Catalog>) -> bool {
        let outcome = match result {
            Ok(catalog) => Outcome::Ready(catalog),
            Err(err) => Outcome::Failed(err.to_string()),
        };

        match self.outcome.set(outcome) {
            Ok(()) => {
                match self.outcome.get() {
                    Some(Outcome::Ready(catalog)) => info!(
                        kind = %catalog.kind(),
                        facilities = catalog.len(),
                        "facility catalog ready"
                    ),
                    Some(Outcome::Failed(reason)) => error!(
                        reason = %reason,
                        "facility catalog failed to load; queries will be rejected until restart"
                    ),
                    None => {}
                }
                true
            }
            Err(_) => false,
        }
    }

    /// Begin loading, run `load`, and record its result.
    pub fn load_with<F>(&self, load: F) -> CatalogStatus
    where
        F: FnOnce() -> Result<Catalog>,
    {
        if self.outcome.get().is_none() {
            self.begin_loading();
            self.complete(load());
        }
        self.status()
    }

    pub fn status(&self) -> CatalogStatus {
        match self.outcome.get() {
            Some(Outcome::Ready(catalog)) => CatalogStatus::Ready {
                facilities: catalog.len(),
            },
            Some(Outcome::Failed(reason)) => CatalogStatus::Failed {
                reason: reason.clone(),
            },
            None if self.loading.load(Ordering::Acquire) => CatalogStatus::Loading,
            None => CatalogStatus::Uninitialized,
        }
    }

    /// The loaded catalog, if ingestion succeeded.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self.outcome.get() {
            Some(Outcome::Ready(catalog)) => Some(catalog),
            _ => None,
        }
    }

    /// Reason ingestion failed, if it did.
    pub fn failure(&self) -> Option<&str> {
        match self.outcome.get() {
            Some(Outcome::Failed(reason)) => Some(reason),
            _ => None,
        }
    }

    /// The catalog, or the query error a caller should see instead.
    pub fn require_ready(&self) -> std::result::Result<&Catalog, LookupError> {
        match self.outcome.get() {
            Some(Outcome::Ready(catalog)) => Ok(catalog),
            Some(Outcome::Failed(reason)) => Err(LookupError::CatalogLoadFailed {
                reason: reason.clone(),
            }),
            None => Err(LookupError::CatalogNotReady),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::facility::CatalogSchema;

    fn empty_catalog() -> Catalog {
        Catalog::from_rows(CatalogSchema::airports(), Vec::new()).unwrap()
    }

    #[test]
    fn walks_through_loading_to_ready() {
        let slot = CatalogSlot::new();
        assert_eq!(slot.status(), CatalogStatus::Uninitialized);

        slot.begin_loading();
        assert_eq!(slot.status(), CatalogStatus::Loading);
        assert_eq!(slot.require_ready().unwrap_err(), LookupError::CatalogNotReady);

        assert!(slot.complete(Ok(empty_catalog())));
        assert_eq!(slot.status(), CatalogStatus::Ready { facilities: 0 });
        assert!(slot.catalog().is_some());
    }

    #[test]
    fn failure_is_terminal() {
        let slot = CatalogSlot::new();
        let status = slot.load_with(|| {
            Err(Error::DatasetNotFound {
                path: "/missing/airports.csv".into(),
            })
        });

        assert_eq!(status.label(), "failed");
        assert!(slot.failure().unwrap().contains("/missing/airports.csv"));

        // A later success cannot overwrite the failure.
        assert!(!slot.complete(Ok(empty_catalog())));
        assert!(matches!(
            slot.require_ready(),
            Err(LookupError::CatalogLoadFailed { .. })
        ));
    }

    #[test]
    fn load_with_runs_only_once() {
        let slot = CatalogSlot::ready(empty_catalog());
        let status = slot.load_with(|| panic!("loader must not run on a completed slot"));
        assert!(status.is_ready());
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let json = serde_json::to_string(&CatalogStatus::Ready { facilities: 3 }).unwrap();
        assert_eq!(json, r#"{"state":"ready","facilities":3}"#);
    }
}
