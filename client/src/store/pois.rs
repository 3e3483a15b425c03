//! POIs slice: points of interest plus the transient search results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::poi::{Accommodation, Event, PointOfInterest};

/// Points of interest and the latest accommodation/event search results.
///
/// Accommodation and events are read-only result sets: each search replaces
/// the previous one wholesale, there is no history.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoisState {
    pois: Vec<PointOfInterest>,
    selected: Option<PointOfInterest>,
    accommodations: Vec<Accommodation>,
    events: Vec<Event>,
}

impl PoisState {
    /// Replace the whole POI collection.
    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) {
        self.pois = pois;
    }

    /// Extend the POI collection.
    pub fn append_pois(&mut self, pois: Vec<PointOfInterest>) {
        self.pois.extend(pois);
    }

    /// Drop a segment's POIs and append fresh ones in their place.
    pub fn replace_pois_for_segment(&mut self, segment_id: i64, pois: Vec<PointOfInterest>) {
        self.pois.retain(|poi| poi.route_segment_id != segment_id);
        self.pois.extend(pois);
    }

    /// Set or clear the selected POI.
    pub fn select_poi(&mut self, poi: Option<PointOfInterest>) {
        self.selected = poi;
    }

    /// Replace the accommodation result set.
    pub fn set_accommodations(&mut self, accommodations: Vec<Accommodation>) {
        self.accommodations = accommodations;
    }

    /// Replace the event result set.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Every known POI.
    #[must_use]
    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// The selected POI, if any.
    #[must_use]
    pub fn selected_poi(&self) -> Option<&PointOfInterest> {
        self.selected.as_ref()
    }

    /// The latest accommodation results.
    #[must_use]
    pub fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    /// The latest event results.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// POIs attached to one segment.
    #[must_use]
    pub fn pois_for_segment(&self, segment_id: i64) -> Vec<&PointOfInterest> {
        self.pois
            .iter()
            .filter(|poi| poi.route_segment_id == segment_id)
            .collect()
    }

    /// POIs grouped by their primary kind.
    ///
    /// Empty taxonomies land in the `"other"` bucket.
    #[must_use]
    pub fn pois_by_kind(&self) -> BTreeMap<String, Vec<&PointOfInterest>> {
        let mut grouped: BTreeMap<String, Vec<&PointOfInterest>> = BTreeMap::new();
        for poi in &self.pois {
            grouped
                .entry(poi.primary_kind().to_owned())
                .or_default()
                .push(poi);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: i64, segment_id: i64, kind: &str) -> PointOfInterest {
        PointOfInterest {
            id,
            route_segment_id: segment_id,
            name: format!("poi-{id}"),
            kind: kind.to_owned(),
            latitude: 47.0,
            longitude: 2.0,
            description: None,
        }
    }

    #[test]
    fn grouping_uses_the_primary_kind() {
        let mut state = PoisState::default();
        state.set_pois(vec![
            poi(1, 1, "tourism.museum, historic"),
            poi(2, 1, "tourism.museum"),
            poi(3, 2, ""),
        ]);
        let grouped = state.pois_by_kind();
        assert_eq!(grouped["tourism.museum"].len(), 2);
        assert_eq!(grouped["other"].len(), 1);
    }

    #[test]
    fn segment_filter_matches_on_route_segment_id() {
        let mut state = PoisState::default();
        state.set_pois(vec![poi(1, 7, "natural"), poi(2, 9, "natural")]);
        let matching = state.pois_for_segment(7);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, 1);
    }

    #[test]
    fn replace_for_segment_keeps_other_segments() {
        let mut state = PoisState::default();
        state.set_pois(vec![poi(1, 7, "natural"), poi(2, 9, "natural")]);
        state.replace_pois_for_segment(7, vec![poi(3, 7, "catering.cafe")]);
        let ids: Vec<i64> = state.pois().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
