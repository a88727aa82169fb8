//! Output formatting for lookup results.
//!
//! Renderers return strings so the command handlers decide where output goes
//! and tests can inspect it directly.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use routemate_lib::{AirItinerary, GeoPoint, NearestFacility};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON matching the HTTP response bodies.
    Json,
}

#[derive(Serialize)]
struct NearestJson<'a> {
    airport: &'a NearestFacility,
}

#[derive(Serialize)]
struct ItineraryJson<'a> {
    #[serde(flatten)]
    itinerary: &'a AirItinerary,
    summary: String,
}

/// Render a nearest-airport result.
pub fn render_nearest(nearest: &NearestFacility, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&NearestJson { airport: nearest })?),
        OutputFormat::Text => Ok(nearest_text(nearest)),
    }
}

/// Render an air itinerary.
pub fn render_itinerary(itinerary: &AirItinerary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ItineraryJson {
            itinerary,
            summary: itinerary.flight_summary(),
        })?),
        OutputFormat::Text => Ok(itinerary_text(itinerary)),
    }
}

fn nearest_text(nearest: &NearestFacility) -> String {
    let facility = &nearest.facility;
    let mut lines = vec![format!("Nearest airport: {}", facility.label("<unnamed>"))];
    lines.push(format!("  Category: {}", facility.category.as_str()));
    if !facility.country_code.is_empty() {
        lines.push(format!("  Country:  {}", facility.country_code));
    }
    lines.push(format!("  Location: {}", point(facility.position())));
    lines.push(format!("  Distance: {} km", nearest.distance_display()));
    lines.join("\n")
}

fn itinerary_text(itinerary: &AirItinerary) -> String {
    let mut lines = vec!["Air itinerary:".to_string()];
    for (i, leg) in itinerary.legs.iter().enumerate() {
        let mode = match leg.mode {
            routemate_lib::LegMode::Ground => "ground",
            routemate_lib::LegMode::Air => "air",
        };
        lines.push(format!(
            "  {}. {:<6} {} -> {} ({:.2} km)",
            i + 1,
            mode,
            point(leg.from),
            point(leg.to),
            leg.distance_km
        ));
    }
    lines.push(String::new());
    lines.push(itinerary.flight_summary());
    lines.join("\n")
}

fn point(p: GeoPoint) -> String {
    format!("{:.4}, {:.4}", p.lat, p.lon)
}
