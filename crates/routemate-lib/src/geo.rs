//! Great-circle geometry on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres. Distances must be reproducible, so this
/// value is fixed.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two coordinates using the haversine formula.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)` and
/// `d = 2·R·atan2(√a, √(1−a))` with `R` = [`EARTH_RADIUS_KM`].
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.min(1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Round a distance to two decimal places for display.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
