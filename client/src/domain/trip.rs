//! Trip aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::destination::Destination;
use super::route::RouteSegment;

/// A planned road trip.
///
/// The list endpoint returns bare trips; the single-trip endpoint nests the
/// destination and segment collections. `destinations` is therefore an
/// `Option` so callers can tell "not included" apart from "included but
/// empty" when deciding whether to refresh the destinations slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the trip.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the trip.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Nested waypoints, present on the single-trip fetch only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Destination>>,
    /// Nested computed segments, present on the single-trip fetch only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_segments: Option<Vec<RouteSegment>>,
}

/// Payload for creating or updating a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the trip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day of the trip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TripDraft {
    /// Draft with a name and no dates.
    ///
    /// # Examples
    /// ```
    /// use roadtrip_client::domain::TripDraft;
    ///
    /// let draft = TripDraft::named("Summer coast run");
    /// assert_eq!(draft.name, "Summer coast run");
    /// assert!(draft.start_date.is_none());
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
