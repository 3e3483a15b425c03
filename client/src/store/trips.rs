//! Trips slice: the trip collection and the current selection.

use serde::{Deserialize, Serialize};

use crate::domain::trip::Trip;

/// Trip collection plus the currently open trip.
///
/// Mutators are synchronous, infallible state replacements; all I/O lives in
/// the store's actions. `current_trip` mirrors the list entry with the same
/// id: `update_trip` and `remove_trip` keep the mirror consistent
/// explicitly, because a freshly fetched detail trip can be current without
/// appearing in the list at all.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripsState {
    trips: Vec<Trip>,
    current_trip: Option<Trip>,
}

impl TripsState {
    /// Replace the whole collection.
    pub fn set_trips(&mut self, trips: Vec<Trip>) {
        self.trips = trips;
    }

    /// Append a newly created trip.
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Replace the list entry with a matching id, and refresh the current
    /// trip when it is the same one.
    pub fn update_trip(&mut self, updated: Trip) {
        if let Some(existing) = self.trips.iter_mut().find(|trip| trip.id == updated.id) {
            *existing = updated.clone();
        }
        if self
            .current_trip
            .as_ref()
            .is_some_and(|current| current.id == updated.id)
        {
            self.current_trip = Some(updated);
        }
    }

    /// Drop a trip by id, clearing the current trip when it was the one
    /// deleted.
    pub fn remove_trip(&mut self, trip_id: i64) {
        self.trips.retain(|trip| trip.id != trip_id);
        if self
            .current_trip
            .as_ref()
            .is_some_and(|current| current.id == trip_id)
        {
            self.current_trip = None;
        }
    }

    /// Set or clear the current trip.
    pub fn set_current_trip(&mut self, trip: Option<Trip>) {
        self.current_trip = trip;
    }

    /// Every known trip.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The currently open trip, if any.
    #[must_use]
    pub fn current_trip(&self) -> Option<&Trip> {
        self.current_trip.as_ref()
    }

    /// Look a trip up by id.
    #[must_use]
    pub fn trip_by_id(&self, id: i64) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }
}
