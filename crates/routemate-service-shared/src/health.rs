//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses. Readiness follows the airport catalog slot: it only
//! reports ready once the catalog has loaded.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use routemate_lib::CatalogStatus;

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Catalog state label (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_state: Option<String>,

    /// Number of facilities loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities_loaded: Option<usize>,

    /// RFC 3339 timestamp of when the catalog became ready.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            catalog_state: None,
            facilities_loaded: None,
            loaded_at: None,
        }
    }

    /// Create a ready status with catalog information.
    pub fn ready(service: &str, version: &str, facilities: usize, loaded_at: Option<String>) -> Self {
        Self {
            status: "ok".to_string(),
            catalog_state: Some("ready".to_string()),
            facilities_loaded: Some(facilities),
            loaded_at,
            ..Self::alive(service, version)
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, state: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            catalog_state: Some(state.to_string()),
            ..Self::alive(service, version)
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the process is serving requests, whatever the catalog
/// state.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"routemate-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// ```text
/// GET /health/ready
/// {"status":"ok",...,"catalog_state":"ready","facilities_loaded":4512,"loaded_at":"..."}
/// ```
///
/// Returns 503 while the catalog is uninitialized or loading, and after a
/// failed load.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let catalog_status = state.airports().status();
    let status = match &catalog_status {
        CatalogStatus::Ready { facilities } => {
            let loaded_at = state.loaded_at().map(|t| t.to_rfc3339());
            HealthStatus::ready(service, version, *facilities, loaded_at)
        }
        CatalogStatus::Uninitialized => {
            HealthStatus::not_ready(service, version, catalog_status.label(), "catalog load not started")
        }
        CatalogStatus::Loading => {
            HealthStatus::not_ready(service, version, catalog_status.label(), "catalog loading")
        }
        CatalogStatus::Failed { reason } => {
            HealthStatus::not_ready(service, version, catalog_status.label(), reason)
        }
    };

    let code = if status.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status)).into_response()
}
