//! Route segments: computed paths between consecutive waypoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::geometry::Coordinate;

/// The computed path between an origin and a destination waypoint.
///
/// `distance` and `duration` are derived values: the backend recomputes them
/// whenever the endpoints change and they are never hand-edited. The wire
/// polyline is either a GeoJSON string or a literal coordinate array, so it
/// is carried as raw JSON and decoded on demand by
/// [`crate::domain::polyline::decode_polyline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Backend identifier.
    pub id: i64,
    /// Owning trip.
    pub trip_id: i64,
    /// Waypoint the segment starts from.
    pub from_destination_id: i64,
    /// Waypoint the segment ends at.
    pub to_destination_id: i64,
    /// Length in kilometres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
    /// GeoJSON string or `[[lat, lng], ...]` array.
    #[serde(default)]
    pub polyline: Value,
}

/// Payload for creating or updating a saved segment.
///
/// Distance, duration, and the polyline are computed server-side, so the
/// draft only names the endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentDraft {
    /// Owning trip.
    pub trip_id: i64,
    /// Waypoint the segment starts from.
    pub from_destination_id: i64,
    /// Waypoint the segment ends at.
    pub to_destination_id: i64,
}

/// Client-side straight-line route estimate.
///
/// This is a preview, not routing: distance is the great-circle distance,
/// duration assumes a constant 60 km/h, and the polyline is exactly the
/// two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePreview {
    /// Straight-line length in kilometres.
    pub distance: f64,
    /// Estimated travel time in seconds (`distance × 60`).
    pub duration: f64,
    /// Two-point line from origin to destination.
    pub polyline: Vec<Coordinate>,
}
