//! Itinerary command handler.

use std::path::Path;

use anyhow::Result;

use routemate_lib::{parse_coordinate, plan_air_itinerary, GeoPoint, LookupError};

use crate::commands::load_airports;
use crate::output::{render_itinerary, OutputFormat};

/// Arguments for the itinerary command.
#[derive(Debug, Clone)]
pub struct ItineraryCommandArgs {
    /// Start point as `lat,lon`.
    pub from: String,
    /// Destination point as `lat,lon`.
    pub to: String,
    pub format: OutputFormat,
}

/// Handle the itinerary subcommand.
pub fn handle_itinerary(dataset: Option<&Path>, args: &ItineraryCommandArgs) -> Result<()> {
    let start = parse_point("from", &args.from)?;
    let end = parse_point("to", &args.to)?;

    let airports = load_airports(dataset)?;
    let itinerary = plan_air_itinerary(&airports, start, end)?;

    println!("{}", render_itinerary(&itinerary, args.format)?);
    Ok(())
}

/// Parse a `lat,lon` pair such as `40.7580,-73.9855`.
pub fn parse_point(parameter: &str, raw: &str) -> Result<GeoPoint, LookupError> {
    let Some((lat, lon)) = raw.split_once(',') else {
        return Err(LookupError::InvalidInput {
            parameter: parameter.to_string(),
            reason: format!("'{}' is not a lat,lon pair", raw.trim()),
        });
    };

    let lat = parse_coordinate(&format!("{parameter} latitude"), lat)?;
    let lon = parse_coordinate(&format!("{parameter} longitude"), lon)?;
    Ok(GeoPoint::new(lat, lon))
}
