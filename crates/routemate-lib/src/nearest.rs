//! Nearest-facility lookup.
//!
//! [`find_nearest`] validates the query point, checks catalog readiness, and
//! scans the catalog with the haversine distance. Every outcome other than a
//! match is a distinct [`LookupError`] variant so callers can tell a bad
//! query from a catalog that is still loading, one that failed to load, and
//! one that loaded but holds nothing.

use serde::Serialize;
use thiserror::Error;

use crate::facility::FacilityRecord;
use crate::geo::{round_km, GeoPoint};
use crate::slot::CatalogSlot;

/// Reasons a nearest-facility query produced no facility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Query coordinates were missing, malformed, or not finite.
    #[error("invalid {parameter}: {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// The catalog has not finished loading.
    #[error("facility data is not loaded yet")]
    CatalogNotReady,

    /// The catalog failed to load and never will in this process.
    #[error("facility data failed to load: {reason}")]
    CatalogLoadFailed { reason: String },

    /// The catalog loaded but holds no eligible facilities.
    #[error("no facility found")]
    NotFound,
}

impl LookupError {
    /// Whether retrying the same query later can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupError::CatalogNotReady)
    }

    /// Stable snake_case label for metrics and logs.
    pub fn reason_label(&self) -> &'static str {
        match self {
            LookupError::InvalidInput { .. } => "invalid_input",
            LookupError::CatalogNotReady => "catalog_not_ready",
            LookupError::CatalogLoadFailed { .. } => "catalog_load_failed",
            LookupError::NotFound => "not_found",
        }
    }

    fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        LookupError::InvalidInput {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}

/// The winning facility plus its distance from the query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestFacility {
    #[serde(flatten)]
    pub facility: FacilityRecord,
    /// Distance in kilometres, rounded to two decimals.
    pub distance_km: f64,
    /// Unrounded distance used for comparison.
    #[serde(skip)]
    pub exact_distance_km: f64,
}

impl NearestFacility {
    fn new(facility: &FacilityRecord, exact_distance_km: f64) -> Self {
        Self {
            facility: facility.clone(),
            distance_km: round_km(exact_distance_km),
            exact_distance_km,
        }
    }

    /// Distance formatted the way it is shown to people, e.g. `12.30`.
    pub fn distance_display(&self) -> String {
        format!("{:.2}", self.distance_km)
    }
}

/// Find the facility closest to (`lat`, `lon`).
///
/// Input is validated before readiness is consulted: a malformed query is a
/// client error regardless of server state.
pub fn find_nearest(
    slot: &CatalogSlot,
    lat: f64,
    lon: f64,
) -> Result<NearestFacility, LookupError> {
    let point = GeoPoint::new(
        ensure_finite("lat", lat)?,
        ensure_finite("lon", lon)?,
    );

    let catalog = slot.require_ready()?;

    catalog
        .nearest(point)
        .map(|(facility, distance)| NearestFacility::new(facility, distance))
        .ok_or(LookupError::NotFound)
}

/// Parse one query coordinate from text.
pub fn parse_coordinate(parameter: &str, raw: &str) -> Result<f64, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::invalid(parameter, "value is required"));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| LookupError::invalid(parameter, format!("'{}' is not a number", trimmed)))?;

    ensure_finite(parameter, value)
}

fn ensure_finite(parameter: &str, value: f64) -> Result<f64, LookupError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LookupError::invalid(parameter, "value must be a finite number"))
    }
}
