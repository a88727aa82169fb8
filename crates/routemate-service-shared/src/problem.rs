//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use routemate_lib::LookupError;

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for a catalog that is still loading.
pub const PROBLEM_CATALOG_NOT_READY: &str = "/problems/catalog-not-ready";

/// Problem type URI for a catalog that failed to load.
pub const PROBLEM_CATALOG_LOAD_FAILED: &str = "/problems/catalog-load-failed";

/// Problem type URI for a ready catalog with no eligible facilities.
pub const PROBLEM_FACILITY_NOT_FOUND: &str = "/problems/facility-not-found";

/// Seconds a client should wait before retrying a not-ready query.
pub const RETRY_AFTER_SECS: u64 = 5;

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use routemate_service_shared::{ProblemDetails, PROBLEM_INVALID_REQUEST};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_INVALID_REQUEST,
///     "Invalid Request",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("invalid lat: 'abc' is not a number")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Sent as the `Retry-After` header, not in the body.
    #[serde(skip)]
    pub retry_after: Option<u64>,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            retry_after: None,
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Ask the client to retry after `seconds`.
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    /// 400 Bad Request for malformed query parameters.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 503 Service Unavailable while the catalog is loading.
    pub fn catalog_not_ready(request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_CATALOG_NOT_READY,
            "Catalog Not Ready",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_detail("Facility data is not loaded yet; retry shortly")
        .with_request_id(request_id)
        .with_retry_after(RETRY_AFTER_SECS)
    }

    /// 500 Internal Server Error for a catalog that will never load.
    pub fn catalog_load_failed(reason: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_CATALOG_LOAD_FAILED,
            "Catalog Load Failed",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(format!("Facility data failed to load: {}", reason))
        .with_request_id(request_id)
    }

    /// 404 Not Found for a ready catalog that holds no facilities.
    pub fn facility_not_found(request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_FACILITY_NOT_FOUND,
            "Facility Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail("The catalog contains no eligible facilities")
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        if let Some(seconds) = self.retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(seconds));
        }

        *response.status_mut() = status;
        response
    }
}

/// Convert a lookup failure to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lookup_error(error: &LookupError, request_id: &str) -> ProblemDetails {
    match error {
        LookupError::InvalidInput { .. } => ProblemDetails::bad_request(error.to_string(), request_id),
        LookupError::CatalogNotReady => ProblemDetails::catalog_not_ready(request_id),
        LookupError::CatalogLoadFailed { reason } => {
            ProblemDetails::catalog_load_failed(reason, request_id)
        }
        LookupError::NotFound => ProblemDetails::facility_not_found(request_id),
    }
}
