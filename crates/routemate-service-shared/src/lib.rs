//! Shared infrastructure for routemate HTTP microservices.
//!
//! This crate provides common functionality used by the service binaries:
//!
//! - [`AppState`]: The facility catalog slot and its load bookkeeping
//! - [`health`]: Health check handlers for liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - Query types that turn raw query strings into validated coordinates
//!
//! # Architecture
//!
//! Handlers stay thin; all lookup logic lives in `routemate-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse query string                                       │
//! │  - Validate coordinates                                     │
//! │  - Call routemate-lib lookups                               │
//! │  - Format response or problem                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module builds application state from the sample
//! dataset. Enable the `test-utils` feature to access it from dependent
//! crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_catalog_size, record_lookup_distance,
    record_lookup_failed, record_lookup_served, MetricsConfig, MetricsError,
};
pub use middleware::{
    extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER, UNMATCHED_ROUTE,
};
pub use problem::{
    from_lookup_error, ProblemDetails, PROBLEM_CATALOG_LOAD_FAILED, PROBLEM_CATALOG_NOT_READY,
    PROBLEM_FACILITY_NOT_FOUND, PROBLEM_INVALID_REQUEST, RETRY_AFTER_SECS,
};
pub use request::{AirItineraryQuery, NearestFacilityQuery, Validate};
pub use response::ServiceResponse;
pub use state::AppState;
