//! Prometheus metrics infrastructure for routemate services.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for facility lookups and catalog size
//!
//! # Example
//!
//! ```no_run
//! use routemate_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route(&config.path, get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("METRICS_ENABLED").ok().as_deref(),
            std::env::var("METRICS_PATH").ok(),
        )
    }

    fn from_values(enabled: Option<&str>, path: Option<String>) -> Self {
        let enabled = enabled
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        let path = path
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Initialize the Prometheus metrics recorder.
///
/// This must be called once at application startup before any metrics are
/// recorded. Metrics recorded without a recorder are discarded.
///
/// # Errors
///
/// Returns an error if:
/// - Metrics are disabled in configuration
/// - The recorder has already been installed
/// - The Prometheus builder fails to install
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the `/metrics` endpoint.
///
/// Returns Prometheus exposition format text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record a lookup that returned a facility.
///
/// Increments `routemate_lookups_total{kind, outcome="served"}`.
pub fn record_lookup_served(kind: &str) {
    metrics::counter!(
        "routemate_lookups_total",
        "kind" => kind.to_string(),
        "outcome" => "served"
    )
    .increment(1);
}

/// Record a lookup that returned no facility.
///
/// `reason` is a stable label such as `invalid_input` or `catalog_not_ready`.
pub fn record_lookup_failed(kind: &str, reason: &str) {
    metrics::counter!(
        "routemate_lookups_total",
        "kind" => kind.to_string(),
        "outcome" => reason.to_string()
    )
    .increment(1);
}

/// Record the distance to the facility a lookup returned.
pub fn record_lookup_distance(kind: &str, distance_km: f64) {
    metrics::histogram!(
        "routemate_lookup_distance_km",
        "kind" => kind.to_string()
    )
    .record(distance_km);
}

/// Publish the number of facilities in a loaded catalog.
pub fn record_catalog_size(kind: &str, facilities: usize) {
    metrics::gauge!(
        "routemate_catalog_facilities",
        "kind" => kind.to_string()
    )
    .set(facilities as f64);
}
