//! routemate library entry points.
//!
//! This crate loads facility datasets into an in-memory catalog, tracks the
//! catalog's readiness, and answers "which facility is closest to this point?"
//! with a great-circle scan. Higher-level consumers (CLI, HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod facility;
pub mod geo;
pub mod itinerary;
pub mod nearest;
pub mod slot;

pub use catalog::{Catalog, LoadReport, RawRow};
pub use dataset::{default_dataset_path, resolve_dataset_path, DATASET_ENV_VAR};
pub use error::{Error, Result};
pub use facility::{CatalogSchema, FacilityCategory, FacilityKind, FacilityRecord};
pub use geo::{haversine_km, round_km, GeoPoint, EARTH_RADIUS_KM};
pub use itinerary::{plan_air_itinerary, AirItinerary, Leg, LegMode};
pub use nearest::{find_nearest, parse_coordinate, LookupError, NearestFacility};
pub use slot::{CatalogSlot, CatalogStatus};
