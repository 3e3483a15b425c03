//! Destinations: the ordered waypoints of a trip.

use serde::{Deserialize, Serialize};

use super::geometry::Coordinate;

/// A single stop in a trip's itinerary.
///
/// Destinations reference their trip by id rather than by ownership. The
/// integer `order` establishes the waypoint sequence: values need not be
/// contiguous, only their relative ordering is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Backend identifier.
    pub id: i64,
    /// Owning trip.
    pub trip_id: i64,
    /// Display name.
    pub name: String,
    /// Postal address, when geocoded from one.
    #[serde(default)]
    pub address: Option<String>,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Position within the trip; relative ordering only.
    pub order: i64,
    /// Traveller notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Destination {
    /// Coordinate pair for geometry and map consumers.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Payload for creating or updating a destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationDraft {
    /// Owning trip.
    pub trip_id: i64,
    /// Display name.
    pub name: String,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Requested position; the backend assigns one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Traveller notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of geocoding an address string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Canonical name reported by the geocoder.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeocodedLocation {
    /// Coordinate pair for map consumers.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
