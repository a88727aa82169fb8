//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses with content type metadata.
///
/// This provides symmetry with `ProblemDetails` by including content type
/// information in the response body.
///
/// # Example
///
/// ```
/// use routemate_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Distance {
///     distance_km: f64,
/// }
///
/// let response = ServiceResponse::new(Distance { distance_km: 9.75 });
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Airport {
        name: String,
        distance_km: f64,
    }

    #[test]
    fn test_response_fields_are_flattened() {
        let response = ServiceResponse::new(Airport {
            name: "LaGuardia Airport".into(),
            distance_km: 9.75,
        });
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"distance_km\":9.75"));
        assert!(json.contains("\"content_type\":\"application/json\""));
        assert!(!json.contains("\"data\":{"));
    }

    #[test]
    fn test_response_round_trips_through_json() {
        let json = r#"{"name":"Heathrow","distance_km":23.49,"content_type":"application/json"}"#;
        let response: ServiceResponse<Airport> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.name, "Heathrow");

        let from: ServiceResponse<Airport> = response.data.clone().into();
        assert_eq!(from.content_type, "application/json");
    }
}
