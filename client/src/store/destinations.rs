//! Destinations slice: waypoints, the selection, and the map-click draft.

use serde::{Deserialize, Serialize};

use crate::domain::destination::Destination;

/// Waypoints for the trip being edited.
///
/// `temporary` holds a not-yet-saved destination picked on the map; it is
/// promoted to a real destination through the create action and then
/// cleared by the caller.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationsState {
    destinations: Vec<Destination>,
    selected: Option<Destination>,
    temporary: Option<Destination>,
}

impl DestinationsState {
    /// Replace the whole collection.
    pub fn set_destinations(&mut self, destinations: Vec<Destination>) {
        self.destinations = destinations;
    }

    /// Append a newly created destination.
    pub fn add_destination(&mut self, destination: Destination) {
        self.destinations.push(destination);
    }

    /// Replace the entry with a matching id.
    pub fn update_destination(&mut self, updated: Destination) {
        if let Some(existing) = self
            .destinations
            .iter_mut()
            .find(|destination| destination.id == updated.id)
        {
            *existing = updated;
        }
    }

    /// Drop a destination by id.
    pub fn remove_destination(&mut self, destination_id: i64) {
        self.destinations
            .retain(|destination| destination.id != destination_id);
    }

    /// Set or clear the selected destination.
    pub fn select_destination(&mut self, destination: Option<Destination>) {
        self.selected = destination;
    }

    /// Hold a candidate destination (e.g. from a map click).
    pub fn set_temporary_destination(&mut self, destination: Destination) {
        self.temporary = Some(destination);
    }

    /// Discard the candidate destination.
    pub fn clear_temporary_destination(&mut self) {
        self.temporary = None;
    }

    /// Every destination, in insertion order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// The selected destination, if any.
    #[must_use]
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected.as_ref()
    }

    /// The candidate destination, if any.
    #[must_use]
    pub fn temporary_destination(&self) -> Option<&Destination> {
        self.temporary.as_ref()
    }

    /// Look a destination up by id.
    #[must_use]
    pub fn destination_by_id(&self, id: i64) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.id == id)
    }

    /// The waypoint sequence: destinations sorted by their `order` field.
    ///
    /// The sort is stable, so ties keep their insertion order.
    #[must_use]
    pub fn sorted_destinations(&self) -> Vec<Destination> {
        let mut sorted = self.destinations.clone();
        sorted.sort_by_key(|destination| destination.order);
        sorted
    }
}
