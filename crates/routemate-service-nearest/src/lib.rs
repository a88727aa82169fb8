//! routemate nearest-airport HTTP microservice.
//!
//! # Endpoints
//!
//! - `GET /api/v1/nearest-airport?lat=..&lon=..` - Nearest airport to a point
//! - `GET /api/v1/itinerary/air?from_lat=..&from_lon=..&to_lat=..&to_lon=..` -
//!   Ground/air/ground itinerary through the nearest airports
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe (503 until the catalog loads)
//! - `GET /metrics` - Prometheus exposition (path configurable)
//!
//! The router is built here so integration tests can drive it without a
//! socket; `main.rs` only wires configuration and the listener.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use routemate_lib::{
    find_nearest, plan_air_itinerary, resolve_dataset_path, AirItinerary, LookupError,
    NearestFacility,
};
use routemate_service_shared::{
    extract_or_generate_request_id, from_lookup_error, health_live, health_ready,
    metrics_handler, record_lookup_distance, record_lookup_failed, record_lookup_served,
    AirItineraryQuery, AppState, MetricsConfig, MetricsLayer, NearestFacilityQuery,
    ProblemDetails, RequestId, ServiceResponse, Validate,
};

/// Metric label for airport lookups; matches `FacilityKind::Airport`.
const AIRPORT: &str = "airport";

/// Nearest airport response body.
#[derive(Debug, Serialize)]
pub struct NearestAirportResponse {
    pub airport: NearestFacility,
}

/// Air itinerary response body.
#[derive(Debug, Serialize)]
pub struct AirItineraryResponse {
    #[serde(flatten)]
    pub itinerary: AirItinerary,
    /// Instruction line for the flight leg.
    pub summary: String,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiResponse::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

/// Service configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen port (`SERVICE_PORT`, default 8080).
    pub port: u16,
    pub metrics: MetricsConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(8080);

        Self {
            port,
            metrics: MetricsConfig::from_env(),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Airport dataset location (`ROUTEMATE_AIRPORTS_PATH` or the platform
    /// data directory).
    pub fn dataset_path(&self) -> routemate_lib::Result<PathBuf> {
        resolve_dataset_path(None)
    }
}

/// Build the service router around `state`.
pub fn router(state: AppState, metrics: &MetricsConfig) -> Router {
    let mut app = Router::new()
        .route("/api/v1/nearest-airport", get(nearest_airport_handler))
        .route("/api/v1/itinerary/air", get(air_itinerary_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        app = app.route(&metrics.path, get(metrics_handler));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle GET /api/v1/nearest-airport requests.
async fn nearest_airport_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NearestFacilityQuery>, QueryRejection>,
) -> ApiResponse<NearestAirportResponse> {
    let request_id = extract_or_generate_request_id(&headers);

    let point = match query {
        Ok(Query(query)) => query.validate(request_id.as_str()),
        Err(rejection) => Err(Box::new(ProblemDetails::bad_request(
            rejection.body_text(),
            request_id.as_str(),
        ))),
    };
    let point = match point {
        Ok(point) => point,
        Err(problem) => {
            record_lookup_failed(AIRPORT, "invalid_input");
            return ApiResponse::Error(*problem);
        }
    };

    match find_nearest(state.airports(), point.lat, point.lon) {
        Ok(airport) => {
            served(&airport);
            info!(
                request_id = %request_id,
                lat = point.lat,
                lon = point.lon,
                airport = %airport.facility.id,
                distance_km = airport.distance_km,
                "nearest airport resolved"
            );
            ApiResponse::Success(ServiceResponse::new(NearestAirportResponse { airport }))
        }
        Err(error) => lookup_failed(&error, &request_id),
    }
}

/// Handle GET /api/v1/itinerary/air requests.
async fn air_itinerary_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<AirItineraryQuery>, QueryRejection>,
) -> ApiResponse<AirItineraryResponse> {
    let request_id = extract_or_generate_request_id(&headers);

    let points = match query {
        Ok(Query(query)) => query.validate(request_id.as_str()),
        Err(rejection) => Err(Box::new(ProblemDetails::bad_request(
            rejection.body_text(),
            request_id.as_str(),
        ))),
    };
    let (start, end) = match points {
        Ok(points) => points,
        Err(problem) => {
            record_lookup_failed(AIRPORT, "invalid_input");
            return ApiResponse::Error(*problem);
        }
    };

    match plan_air_itinerary(state.airports(), start, end) {
        Ok(itinerary) => {
            served(&itinerary.departure);
            served(&itinerary.arrival);
            let summary = itinerary.flight_summary();
            info!(
                request_id = %request_id,
                departure = %itinerary.departure.facility.id,
                arrival = %itinerary.arrival.facility.id,
                flight_km = itinerary.flight().distance_km,
                "air itinerary planned"
            );
            ApiResponse::Success(ServiceResponse::new(AirItineraryResponse { itinerary, summary }))
        }
        Err(error) => lookup_failed(&error, &request_id),
    }
}

fn served(airport: &NearestFacility) {
    record_lookup_served(AIRPORT);
    record_lookup_distance(AIRPORT, airport.distance_km);
}

fn lookup_failed<T>(error: &LookupError, request_id: &RequestId) -> ApiResponse<T> {
    record_lookup_failed(AIRPORT, error.reason_label());
    if error.is_retryable() {
        info!(request_id = %request_id, "lookup rejected: {}", error);
    } else {
        warn!(request_id = %request_id, reason = error.reason_label(), "lookup failed: {}", error);
    }
    ApiResponse::Error(from_lookup_error(error, request_id.as_str()))
}
