//! Air itinerary composition.
//!
//! An air trip is three legs: ground travel from the start point to the
//! nearest airport, a flight between the two airports, and ground travel from
//! the arrival airport to the destination. This module only decides the leg
//! endpoints and labels; ground-route geometry belongs to the routing
//! provider.

use serde::Serialize;

use crate::geo::{round_km, GeoPoint};
use crate::nearest::{find_nearest, LookupError, NearestFacility};
use crate::slot::CatalogSlot;

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegMode {
    Ground,
    Air,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub mode: LegMode,
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Great-circle length of the leg, rounded to two decimals.
    pub distance_km: f64,
}

impl Leg {
    fn new(mode: LegMode, from: GeoPoint, to: GeoPoint) -> Self {
        Self {
            mode,
            from,
            to,
            distance_km: round_km(from.distance_km(to)),
        }
    }
}

/// Departure/arrival airports and the three legs connecting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirItinerary {
    pub departure: NearestFacility,
    pub arrival: NearestFacility,
    pub legs: [Leg; 3],
}

impl AirItinerary {
    /// The flight leg.
    pub fn flight(&self) -> &Leg {
        &self.legs[1]
    }

    /// Instruction line for the flight segment.
    pub fn flight_summary(&self) -> String {
        format!(
            "Fly from {} to {}",
            self.departure.facility.label("Source Airport"),
            self.arrival.facility.label("Destination Airport"),
        )
    }
}

/// Plan an air trip from `start` to `end` using the nearest airports.
pub fn plan_air_itinerary(
    airports: &CatalogSlot,
    start: GeoPoint,
    end: GeoPoint,
) -> Result<AirItinerary, LookupError> {
    let departure = find_nearest(airports, start.lat, start.lon)?;
    let arrival = find_nearest(airports, end.lat, end.lon)?;

    let departure_point = departure.facility.position();
    let arrival_point = arrival.facility.position();

    let legs = [
        Leg::new(LegMode::Ground, start, departure_point),
        Leg::new(LegMode::Air, departure_point, arrival_point),
        Leg::new(LegMode::Ground, arrival_point, end),
    ];

    Ok(AirItinerary {
        departure,
        arrival,
        legs,
    })
}
