//! Routes slice: saved segments and their aggregate views.

use serde::{Deserialize, Serialize};

use crate::domain::format::{format_distance_km, format_duration_verbose};
use crate::domain::route::RouteSegment;

/// Saved segments for the trip being edited.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesState {
    segments: Vec<RouteSegment>,
    selected: Option<RouteSegment>,
}

impl RoutesState {
    /// Replace the whole collection (usually from a trip fetch).
    pub fn set_segments(&mut self, segments: Vec<RouteSegment>) {
        self.segments = segments;
    }

    /// Append a newly created segment.
    pub fn add_segment(&mut self, segment: RouteSegment) {
        self.segments.push(segment);
    }

    /// Replace the entry with a matching id.
    pub fn update_segment(&mut self, updated: RouteSegment) {
        if let Some(existing) = self
            .segments
            .iter_mut()
            .find(|segment| segment.id == updated.id)
        {
            *existing = updated;
        }
    }

    /// Drop a segment by id.
    pub fn remove_segment(&mut self, segment_id: i64) {
        self.segments.retain(|segment| segment.id != segment_id);
    }

    /// Set or clear the selected segment.
    pub fn select_segment(&mut self, segment: Option<RouteSegment>) {
        self.selected = segment;
    }

    /// Every saved segment.
    #[must_use]
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// The selected segment, if any.
    #[must_use]
    pub fn selected_segment(&self) -> Option<&RouteSegment> {
        self.selected.as_ref()
    }

    /// Look a segment up by id.
    #[must_use]
    pub fn segment_by_id(&self, id: i64) -> Option<&RouteSegment> {
        self.segments.iter().find(|segment| segment.id == id)
    }

    /// Sum of per-segment distances, in kilometres.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|segment| segment.distance).sum()
    }

    /// Sum of per-segment durations, in seconds.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|segment| segment.duration).sum()
    }

    /// Aggregate duration in the verbose policy, e.g. `"2 hours 30 minutes"`.
    #[must_use]
    pub fn formatted_total_duration(&self) -> String {
        format_duration_verbose(self.total_duration())
    }

    /// Aggregate distance, e.g. `"342.7 km"`.
    #[must_use]
    pub fn formatted_total_distance(&self) -> String {
        format_distance_km(self.total_distance())
    }
}
