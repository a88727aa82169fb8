//! Nearest command handler.

use std::path::Path;

use anyhow::Result;

use routemate_lib::{find_nearest, parse_coordinate};

use crate::commands::load_airports;
use crate::output::{render_nearest, OutputFormat};

/// Arguments for the nearest command.
#[derive(Debug, Clone)]
pub struct NearestCommandArgs {
    /// Latitude as typed on the command line.
    pub lat: String,
    /// Longitude as typed on the command line.
    pub lon: String,
    pub format: OutputFormat,
}

/// Handle the nearest subcommand.
///
/// Coordinates are validated before the dataset is touched.
pub fn handle_nearest(dataset: Option<&Path>, args: &NearestCommandArgs) -> Result<()> {
    let lat = parse_coordinate("lat", &args.lat)?;
    let lon = parse_coordinate("lon", &args.lon)?;

    let airports = load_airports(dataset)?;
    let nearest = find_nearest(&airports, lat, lon)?;

    println!("{}", render_nearest(&nearest, args.format)?);
    Ok(())
}
