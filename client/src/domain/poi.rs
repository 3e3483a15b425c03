//! Points of interest, accommodation, and event search results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::geometry::Coordinate;

/// Fallback bucket for POIs whose taxonomy string is empty.
pub const DEFAULT_KIND: &str = "other";

/// A point of interest attached to a route segment.
///
/// `kind` is a comma-separated taxonomy string from the backend (the wire
/// field is `type`); its first component is the "primary kind" used for
/// grouping and icon lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Backend identifier.
    pub id: i64,
    /// Segment this POI was found along.
    pub route_segment_id: i64,
    /// Display name.
    pub name: String,
    /// Comma-separated taxonomy, e.g. `"tourism.museum, historic"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Short blurb for popups.
    #[serde(default)]
    pub description: Option<String>,
}

impl PointOfInterest {
    /// First component of the taxonomy string, trimmed.
    ///
    /// Empty taxonomies fall back to [`DEFAULT_KIND`].
    ///
    /// # Examples
    /// ```
    /// use roadtrip_client::domain::PointOfInterest;
    ///
    /// let poi = PointOfInterest {
    ///     id: 1,
    ///     route_segment_id: 7,
    ///     name: "Louvre".into(),
    ///     kind: "tourism.museum, historic".into(),
    ///     latitude: 48.86,
    ///     longitude: 2.33,
    ///     description: None,
    /// };
    /// assert_eq!(poi.primary_kind(), "tourism.museum");
    /// ```
    #[must_use]
    pub fn primary_kind(&self) -> &str {
        primary_kind(&self.kind)
    }

    /// Coordinate pair for geometry and map consumers.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// First comma-separated component of a taxonomy string, trimmed, with
/// [`DEFAULT_KIND`] as the empty fallback.
#[must_use]
pub fn primary_kind(kind: &str) -> &str {
    let first = kind.split(',').next().unwrap_or_default().trim();
    if first.is_empty() { DEFAULT_KIND } else { first }
}

/// An overnight option surfaced by the accommodation search.
///
/// Search results are read-only and are not persisted beyond the current
/// result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Nightly price, when the provider reports one.
    #[serde(default)]
    pub price_per_night: Option<f64>,
    /// Guest rating, when the provider reports one.
    #[serde(default)]
    pub rating: Option<f64>,
}

/// An event surfaced by the trip event search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// First day of the event.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the event.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Short blurb.
    #[serde(default)]
    pub description: Option<String>,
}

/// Query options for the segment POI search.
///
/// `categories` is a comma-separated list as the backend expects it.
/// `replace` travels with the query for parity with the original client but
/// is primarily interpreted client-side: when set, the store drops the
/// segment's existing POIs before committing the new ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiSearchOptions {
    /// Comma-separated category filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Search radius in metres around the segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Replace the segment's existing POIs instead of appending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl PoiSearchOptions {
    /// Whether the store should replace the segment's existing POIs.
    #[must_use]
    pub fn replaces(&self) -> bool {
        self.replace.unwrap_or(false)
    }
}

/// Query options for the accommodation search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationSearchOptions {
    /// Upper bound on the nightly price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Lower bound on the guest rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

/// Query options for the event search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSearchOptions {
    /// Earliest day of interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Latest day of interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}
