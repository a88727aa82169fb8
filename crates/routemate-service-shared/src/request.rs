//! Query-string types and validation for HTTP endpoints.
//!
//! Coordinates arrive as raw text so that a missing or malformed value is
//! reported with the parameter name instead of a generic extractor error.

use serde::{Deserialize, Serialize};

use routemate_lib::{parse_coordinate, GeoPoint, LookupError};

use crate::problem::{from_lookup_error, ProblemDetails};

/// Validation trait for request types.
///
/// Implementations parse every field and either return the typed value the
/// handler needs or a `ProblemDetails` describing the first bad field.
pub trait Validate {
    /// The validated form of the request.
    type Output;

    /// Validate the request.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>>;
}

/// Query for the facility nearest to a point.
///
/// `GET /api/v1/nearest-airport?lat=40.75&lon=-73.98` (`lng` is accepted for
/// `lon`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearestFacilityQuery {
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: Option<String>,

    /// Longitude in decimal degrees.
    #[serde(default, alias = "lng")]
    pub lon: Option<String>,
}

impl Validate for NearestFacilityQuery {
    type Output = GeoPoint;

    fn validate(&self, request_id: &str) -> Result<GeoPoint, Box<ProblemDetails>> {
        coordinate_pair(("lat", &self.lat), ("lon", &self.lon))
            .map_err(|e| Box::new(from_lookup_error(&e, request_id)))
    }
}

/// Query for an air itinerary between two points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirItineraryQuery {
    #[serde(default)]
    pub from_lat: Option<String>,
    #[serde(default)]
    pub from_lon: Option<String>,
    #[serde(default)]
    pub to_lat: Option<String>,
    #[serde(default)]
    pub to_lon: Option<String>,
}

impl Validate for AirItineraryQuery {
    type Output = (GeoPoint, GeoPoint);

    fn validate(&self, request_id: &str) -> Result<(GeoPoint, GeoPoint), Box<ProblemDetails>> {
        let to_problem = |e: LookupError| Box::new(from_lookup_error(&e, request_id));

        let start = coordinate_pair(("from_lat", &self.from_lat), ("from_lon", &self.from_lon))
            .map_err(to_problem)?;
        let end = coordinate_pair(("to_lat", &self.to_lat), ("to_lon", &self.to_lon))
            .map_err(to_problem)?;

        Ok((start, end))
    }
}

fn coordinate_pair(
    (lat_name, lat): (&str, &Option<String>),
    (lon_name, lon): (&str, &Option<String>),
) -> Result<GeoPoint, LookupError> {
    let lat = parse_coordinate(lat_name, lat.as_deref().unwrap_or(""))?;
    let lon = parse_coordinate(lon_name, lon.as_deref().unwrap_or(""))?;
    Ok(GeoPoint::new(lat, lon))
}
