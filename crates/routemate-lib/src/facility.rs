//! Facility records and the dataset schema that produces them.
//!
//! A [`CatalogSchema`] is the fixed column contract with a dataset provider
//! plus the set of categories worth keeping. Only airports have a dataset
//! today; sea ports are modelled so a port catalog can be added with the same
//! loader and finder once a dataset exists.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Kind of facility a catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    Airport,
    SeaPort,
}

impl FacilityKind {
    /// Stable lowercase label used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityKind::Airport => "airport",
            FacilityKind::SeaPort => "sea_port",
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facility class as published in the source dataset's `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityCategory {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    Heliport,
    SeaplaneBase,
    BalloonPort,
    Closed,
}

impl FacilityCategory {
    /// Parse a raw dataset value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "large_airport" => Some(Self::LargeAirport),
            "medium_airport" => Some(Self::MediumAirport),
            "small_airport" => Some(Self::SmallAirport),
            "heliport" => Some(Self::Heliport),
            "seaplane_base" => Some(Self::SeaplaneBase),
            "balloonport" => Some(Self::BalloonPort),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    /// The dataset spelling of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LargeAirport => "large_airport",
            Self::MediumAirport => "medium_airport",
            Self::SmallAirport => "small_airport",
            Self::Heliport => "heliport",
            Self::SeaplaneBase => "seaplane_base",
            Self::BalloonPort => "balloonport",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated facility held by a catalog.
///
/// Every record has an accepted category and finite coordinates; records are
/// never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Source-assigned identifier.
    pub id: String,
    /// Display name; may be empty.
    pub name: String,
    /// Short human-facing code (ICAO-style ident, falling back to IATA).
    pub short_code: Option<String>,
    pub category: FacilityCategory,
    /// ISO country code, descriptive only.
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl FacilityRecord {
    /// Position of the facility, usable directly as a routing endpoint.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Human-readable label such as `John F Kennedy International Airport (KJFK)`.
    pub fn label(&self, fallback_name: &str) -> String {
        let name = if self.name.trim().is_empty() {
            fallback_name
        } else {
            self.name.as_str()
        };
        format!("{} ({})", name, self.short_code.as_deref().unwrap_or("N/A"))
    }
}

/// Column contract and inclusion policy for one facility dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSchema {
    pub kind: FacilityKind,
    pub id_column: &'static str,
    pub name_column: &'static str,
    pub category_column: &'static str,
    pub latitude_column: &'static str,
    pub longitude_column: &'static str,
    pub country_column: &'static str,
    /// Candidate short-code columns, in order of preference.
    pub short_code_columns: &'static [&'static str],
    /// Categories retained at load time; everything else is skipped.
    pub accepted_categories: &'static [FacilityCategory],
}

const AIRPORT_CATEGORIES: &[FacilityCategory] = &[
    FacilityCategory::LargeAirport,
    FacilityCategory::MediumAirport,
];

impl CatalogSchema {
    /// Schema for the OurAirports `airports.csv` layout.
    ///
    /// Only large and medium airports are kept; heliports, seaplane bases,
    /// small and closed airports are not relevant to intercity travel.
    pub const fn airports() -> Self {
        Self {
            kind: FacilityKind::Airport,
            id_column: "id",
            name_column: "name",
            category_column: "type",
            latitude_column: "latitude_deg",
            longitude_column: "longitude_deg",
            country_column: "iso_country",
            short_code_columns: &["ident", "iata_code"],
            accepted_categories: AIRPORT_CATEGORIES,
        }
    }

    /// Look up the schema for a facility kind.
    pub fn for_kind(kind: FacilityKind) -> Result<Self> {
        match kind {
            FacilityKind::Airport => Ok(Self::airports()),
            FacilityKind::SeaPort => Err(Error::UnsupportedFacilityKind { kind }),
        }
    }

    /// Whether a raw category value passes the inclusion policy.
    pub fn accepts(&self, raw_category: &str) -> Option<FacilityCategory> {
        FacilityCategory::parse(raw_category).filter(|c| self.accepted_categories.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_schema_accepts_only_large_and_medium() {
        let schema = CatalogSchema::airports();
        assert_eq!(
            schema.accepts("large_airport"),
            Some(FacilityCategory::LargeAirport)
        );
        assert_eq!(
            schema.accepts("medium_airport"),
            Some(FacilityCategory::MediumAirport)
        );
        for rejected in ["small_airport", "heliport", "seaplane_base", "closed", ""] {
            assert_eq!(schema.accepts(rejected), None, "{rejected} should be skipped");
        }
    }

    #[test]
    fn sea_ports_have_no_schema_yet() {
        let err = CatalogSchema::for_kind(FacilityKind::SeaPort).unwrap_err();
        assert!(err.to_string().contains("sea_port"));
    }

    #[test]
    fn label_falls_back_for_missing_parts() {
        let record = FacilityRecord {
            id: "1".into(),
            name: String::new(),
            short_code: None,
            category: FacilityCategory::MediumAirport,
            country_code: "US".into(),
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(record.label("Source Airport"), "Source Airport (N/A)");
    }

    #[test]
    fn category_serializes_in_dataset_spelling() {
        let json = serde_json::to_string(&FacilityCategory::LargeAirport).unwrap();
        assert_eq!(json, "\"large_airport\"");
    }
}
