//! Client-side state store.
//!
//! The store owns four resource slices (trips, destinations, routes, POIs)
//! plus the root loading/error flags, and orchestrates every backend call:
//!
//! 1. set the root loading flag,
//! 2. invoke exactly one port call,
//! 3. on success commit the payload through the slice's mutator and return
//!    it; on failure record the user-facing message in the root slice and
//!    re-raise the original error,
//! 4. release the loading flag on every exit path.
//!
//! Every commit is mirrored to the configured [`SnapshotStore`]; mirror
//! failures are logged and never disturb the in-memory state. Mutators are
//! synchronous and infallible; slices never perform I/O themselves.

pub mod destinations;
pub mod pois;
mod root;
pub mod routes;
pub mod snapshot;
pub mod trips;

pub use self::destinations::DestinationsState;
pub use self::pois::PoisState;
pub use self::routes::RoutesState;
pub use self::snapshot::{SnapshotError, SnapshotStore, StoreSnapshot};
pub use self::trips::TripsState;

use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use self::root::RootSlice;
use crate::config::ClientConfig;
use crate::domain::destination::{Destination, DestinationDraft, GeocodedLocation};
use crate::domain::geometry::{self, Coordinate};
use crate::domain::poi::{
    Accommodation, AccommodationSearchOptions, Event, EventSearchOptions, PointOfInterest,
    PoiSearchOptions,
};
use crate::domain::ports::{ApiError, DestinationApi, PoiApi, RouteApi, TripApi};
use crate::domain::route::{RoutePreview, RouteSegment, SegmentDraft};
use crate::domain::trip::{Trip, TripDraft};
use crate::outbound::http::{
    ApiClient, HttpDestinationClient, HttpPoiClient, HttpRouteClient, HttpTripClient,
};
use crate::outbound::storage::FileSnapshotStore;

/// Store wired to the reqwest adapters and the file snapshot store.
pub type HttpStore =
    Store<HttpTripClient, HttpDestinationClient, HttpRouteClient, HttpPoiClient, FileSnapshotStore>;

/// State container mediating between views and the REST backend.
pub struct Store<T, D, R, P, S> {
    trips_api: Arc<T>,
    destinations_api: Arc<D>,
    routes_api: Arc<R>,
    pois_api: Arc<P>,
    snapshots: Arc<S>,
    root: RootSlice,
    trips: RwLock<TripsState>,
    destinations: RwLock<DestinationsState>,
    routes: RwLock<RoutesState>,
    pois: RwLock<PoisState>,
}

impl Store<HttpTripClient, HttpDestinationClient, HttpRouteClient, HttpPoiClient, FileSnapshotStore>
{
    /// Wire a store to the REST backend and a snapshot file in
    /// `snapshot_dir`, restoring any prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the HTTP client cannot be
    /// constructed.
    pub fn over_http(
        config: &ClientConfig,
        snapshot_dir: impl Into<PathBuf>,
    ) -> Result<HttpStore, reqwest::Error> {
        let api = ApiClient::shared(config)?;
        Ok(Self::new(
            Arc::new(HttpTripClient::new(Arc::clone(&api))),
            Arc::new(HttpDestinationClient::new(Arc::clone(&api))),
            Arc::new(HttpRouteClient::new(Arc::clone(&api))),
            Arc::new(HttpPoiClient::new(api)),
            Arc::new(FileSnapshotStore::new(snapshot_dir)),
        ))
    }
}

impl<T, D, R, P, S> Store<T, D, R, P, S>
where
    T: TripApi,
    D: DestinationApi,
    R: RouteApi,
    P: PoiApi,
    S: SnapshotStore,
{
    /// Assemble a store over explicit port implementations and restore any
    /// prior snapshot before the first network call.
    pub fn new(
        trips_api: Arc<T>,
        destinations_api: Arc<D>,
        routes_api: Arc<R>,
        pois_api: Arc<P>,
        snapshots: Arc<S>,
    ) -> Self {
        let store = Self {
            trips_api,
            destinations_api,
            routes_api,
            pois_api,
            snapshots,
            root: RootSlice::default(),
            trips: RwLock::new(TripsState::default()),
            destinations: RwLock::new(DestinationsState::default()),
            routes: RwLock::new(RoutesState::default()),
            pois: RwLock::new(PoisState::default()),
        };
        store.restore();
        store
    }

    /// Rehydrate the four domain slices from the last snapshot, if any.
    /// Absence or corruption falls back to empty state.
    pub fn restore(&self) {
        let Some(snapshot) = self.snapshots.load() else {
            return;
        };
        debug!("restoring store state from snapshot");
        *self.trips.write() = snapshot.trips;
        *self.destinations.write() = snapshot.destinations;
        *self.routes.write() = snapshot.routes;
        *self.pois.write() = snapshot.pois;
    }

    // ---- root slice -----------------------------------------------------

    /// Whether an action is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.root.is_loading()
    }

    /// The last recorded user-facing error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.root.error()
    }

    /// Dismiss the recorded error message.
    pub fn clear_error(&self) {
        self.root.clear_error();
    }

    // ---- snapshots ------------------------------------------------------

    /// Current value of the four domain slices.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            trips: self.trips.read().clone(),
            destinations: self.destinations.read().clone(),
            routes: self.routes.read().clone(),
            pois: self.pois.read().clone(),
        }
    }

    /// Mirror the current slices to durable storage, best effort.
    fn persist(&self) {
        if let Err(error) = self.snapshots.save(&self.snapshot()) {
            warn!(error = %error, "state snapshot not persisted");
        }
    }

    fn commit_trips(&self, mutate: impl FnOnce(&mut TripsState)) {
        mutate(&mut self.trips.write());
        self.persist();
    }

    fn commit_destinations(&self, mutate: impl FnOnce(&mut DestinationsState)) {
        mutate(&mut self.destinations.write());
        self.persist();
    }

    fn commit_routes(&self, mutate: impl FnOnce(&mut RoutesState)) {
        mutate(&mut self.routes.write());
        self.persist();
    }

    fn commit_pois(&self, mutate: impl FnOnce(&mut PoisState)) {
        mutate(&mut self.pois.write());
        self.persist();
    }

    /// Bracket one port call with the root loading/error discipline.
    async fn with_loading<O, F>(&self, operation: F) -> Result<O, ApiError>
    where
        F: Future<Output = Result<O, ApiError>>,
    {
        self.root.begin();
        let result = operation.await;
        if let Err(error) = &result {
            self.root.record_error(error.user_message());
        }
        self.root.finish();
        result
    }

    // ---- trip actions ---------------------------------------------------

    /// Load every trip.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn fetch_trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.with_loading(async {
            let trips = self.trips_api.list().await?;
            self.commit_trips(|state| state.set_trips(trips.clone()));
            Ok(trips)
        })
        .await
    }

    /// Load one trip with its nested collections and make it current.
    ///
    /// When the payload nests a destination list it is pushed into the
    /// destinations slice as well (one-directional: trips feed
    /// destinations, never the reverse).
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn fetch_trip(&self, trip_id: i64) -> Result<Trip, ApiError> {
        self.with_loading(async {
            let trip = self.trips_api.get(trip_id).await?;
            self.commit_trips(|state| state.set_current_trip(Some(trip.clone())));
            if let Some(nested) = trip.destinations.clone() {
                self.commit_destinations(|state| state.set_destinations(nested));
            }
            Ok(trip)
        })
        .await
    }

    /// Create a trip and append it to the collection.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn create_trip(&self, draft: TripDraft) -> Result<Trip, ApiError> {
        self.with_loading(async {
            let trip = self.trips_api.create(draft).await?;
            self.commit_trips(|state| state.add_trip(trip.clone()));
            Ok(trip)
        })
        .await
    }

    /// Update a trip, refreshing the current trip when it matches.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn update_trip(&self, trip_id: i64, draft: TripDraft) -> Result<Trip, ApiError> {
        self.with_loading(async {
            let trip = self.trips_api.update(trip_id, draft).await?;
            self.commit_trips(|state| state.update_trip(trip.clone()));
            Ok(trip)
        })
        .await
    }

    /// Delete a trip, clearing the current trip when it matches.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn delete_trip(&self, trip_id: i64) -> Result<(), ApiError> {
        self.with_loading(async {
            self.trips_api.delete(trip_id).await?;
            self.commit_trips(|state| state.remove_trip(trip_id));
            Ok(())
        })
        .await
    }

    /// Ask the backend to recompute a trip's segments; the result updates
    /// both the list entry and the current trip.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn calculate_routes(&self, trip_id: i64) -> Result<Trip, ApiError> {
        self.with_loading(async {
            let trip = self.trips_api.calculate_routes(trip_id).await?;
            self.commit_trips(|state| {
                state.update_trip(trip.clone());
                state.set_current_trip(Some(trip.clone()));
            });
            Ok(trip)
        })
        .await
    }

    /// Make a trip current from local data, without a network call.
    pub fn set_current_trip(&self, trip: Option<Trip>) {
        self.commit_trips(|state| state.set_current_trip(trip));
    }

    // ---- destination actions --------------------------------------------

    /// Load a trip's destinations.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn fetch_destinations(&self, trip_id: i64) -> Result<Vec<Destination>, ApiError> {
        self.with_loading(async {
            let destinations = self.destinations_api.list_for_trip(trip_id).await?;
            self.commit_destinations(|state| state.set_destinations(destinations.clone()));
            Ok(destinations)
        })
        .await
    }

    /// Create a destination and append it to the collection.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn add_destination(&self, draft: DestinationDraft) -> Result<Destination, ApiError> {
        self.with_loading(async {
            let destination = self.destinations_api.create(draft).await?;
            self.commit_destinations(|state| state.add_destination(destination.clone()));
            Ok(destination)
        })
        .await
    }

    /// Update a destination in place.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn update_destination(
        &self,
        destination_id: i64,
        draft: DestinationDraft,
    ) -> Result<Destination, ApiError> {
        self.with_loading(async {
            let destination = self.destinations_api.update(destination_id, draft).await?;
            self.commit_destinations(|state| state.update_destination(destination.clone()));
            Ok(destination)
        })
        .await
    }

    /// Delete a destination.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn delete_destination(&self, destination_id: i64) -> Result<(), ApiError> {
        self.with_loading(async {
            self.destinations_api.delete(destination_id).await?;
            self.commit_destinations(|state| state.remove_destination(destination_id));
            Ok(())
        })
        .await
    }

    /// Submit a new waypoint sequence and commit the backend's reordered
    /// collection. Positions in `ordered_ids` become the new `order`
    /// values, regardless of the previous ones.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn reorder_destinations(
        &self,
        trip_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<Destination>, ApiError> {
        self.with_loading(async {
            let destinations = self.destinations_api.reorder(trip_id, ordered_ids).await?;
            self.commit_destinations(|state| state.set_destinations(destinations.clone()));
            Ok(destinations)
        })
        .await
    }

    /// Resolve an address to coordinates. Nothing is committed; the caller
    /// decides what to do with the location.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn geocode_address(&self, address: String) -> Result<GeocodedLocation, ApiError> {
        self.with_loading(self.destinations_api.geocode(address)).await
    }

    /// Select a destination for detail views.
    pub fn select_destination(&self, destination: Option<Destination>) {
        self.commit_destinations(|state| state.select_destination(destination));
    }

    /// Hold a candidate destination picked on the map.
    pub fn set_temporary_destination(&self, destination: Destination) {
        self.commit_destinations(|state| state.set_temporary_destination(destination));
    }

    /// Discard the candidate destination.
    pub fn clear_temporary_destination(&self) {
        self.commit_destinations(DestinationsState::clear_temporary_destination);
    }

    // ---- route actions --------------------------------------------------

    /// Persist a new segment and append it to the collection.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn create_segment(&self, draft: SegmentDraft) -> Result<RouteSegment, ApiError> {
        self.with_loading(async {
            let segment = self.routes_api.create_segment(draft).await?;
            self.commit_routes(|state| state.add_segment(segment.clone()));
            Ok(segment)
        })
        .await
    }

    /// Update a saved segment in place.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn update_segment(
        &self,
        segment_id: i64,
        draft: SegmentDraft,
    ) -> Result<RouteSegment, ApiError> {
        self.with_loading(async {
            let segment = self.routes_api.update_segment(segment_id, draft).await?;
            self.commit_routes(|state| state.update_segment(segment.clone()));
            Ok(segment)
        })
        .await
    }

    /// Client-side straight-line estimate between two points. Pure, but
    /// still bracketed by the loading flag so the UI treats it like any
    /// other action.
    pub fn preview_route(&self, origin: Coordinate, destination: Coordinate) -> RoutePreview {
        self.root.begin();
        let preview = geometry::preview_route(origin, destination);
        self.root.finish();
        preview
    }

    /// Replace the saved segments (usually from a trip fetch).
    pub fn set_segments(&self, segments: Vec<RouteSegment>) {
        self.commit_routes(|state| state.set_segments(segments));
    }

    /// Select a segment for detail views.
    pub fn select_segment(&self, segment: Option<RouteSegment>) {
        self.commit_routes(|state| state.select_segment(segment));
    }

    /// Drop a segment by id.
    pub fn remove_segment(&self, segment_id: i64) {
        self.commit_routes(|state| state.remove_segment(segment_id));
    }

    // ---- POI actions ----------------------------------------------------

    /// Load every POI attached to a trip.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn fetch_pois(&self, trip_id: i64) -> Result<Vec<PointOfInterest>, ApiError> {
        self.with_loading(async {
            let pois = self.pois_api.list_for_trip(trip_id).await?;
            self.commit_pois(|state| state.set_pois(pois.clone()));
            Ok(pois)
        })
        .await
    }

    /// Search for POIs along one segment.
    ///
    /// With `replace` set in the options the segment's existing POIs are
    /// dropped before the new ones are committed; otherwise the results
    /// are appended.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn find_pois_for_segment(
        &self,
        segment_id: i64,
        options: PoiSearchOptions,
    ) -> Result<Vec<PointOfInterest>, ApiError> {
        let replace = options.replaces();
        self.with_loading(async {
            let pois = self.pois_api.find_for_segment(segment_id, options).await?;
            self.commit_pois(|state| {
                if replace {
                    state.replace_pois_for_segment(segment_id, pois.clone());
                } else {
                    state.append_pois(pois.clone());
                }
            });
            Ok(pois)
        })
        .await
    }

    /// Search for overnight options along one segment; the result set
    /// replaces the previous one.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn find_accommodation(
        &self,
        segment_id: i64,
        options: AccommodationSearchOptions,
    ) -> Result<Vec<Accommodation>, ApiError> {
        self.with_loading(async {
            let accommodations = self
                .pois_api
                .find_accommodation(segment_id, options)
                .await?;
            self.commit_pois(|state| state.set_accommodations(accommodations.clone()));
            Ok(accommodations)
        })
        .await
    }

    /// Search for events along a trip; the result set replaces the
    /// previous one.
    ///
    /// # Errors
    ///
    /// Re-raises the adapter's [`ApiError`] after recording its user
    /// message in the root slice.
    pub async fn find_events(
        &self,
        trip_id: i64,
        options: EventSearchOptions,
    ) -> Result<Vec<Event>, ApiError> {
        self.with_loading(async {
            let events = self.pois_api.find_events(trip_id, options).await?;
            self.commit_pois(|state| state.set_events(events.clone()));
            Ok(events)
        })
        .await
    }

    /// Select a POI for detail views.
    pub fn select_poi(&self, poi: Option<PointOfInterest>) {
        self.commit_pois(|state| state.select_poi(poi));
    }

    // ---- derived views --------------------------------------------------
    //
    // Views clone out of the slice locks so callers never hold a guard.

    /// Every known trip.
    #[must_use]
    pub fn trips(&self) -> Vec<Trip> {
        self.trips.read().trips().to_vec()
    }

    /// The currently open trip, if any.
    #[must_use]
    pub fn current_trip(&self) -> Option<Trip> {
        self.trips.read().current_trip().cloned()
    }

    /// Look a trip up by id.
    #[must_use]
    pub fn trip_by_id(&self, id: i64) -> Option<Trip> {
        self.trips.read().trip_by_id(id).cloned()
    }

    /// Every destination, in insertion order.
    #[must_use]
    pub fn destinations(&self) -> Vec<Destination> {
        self.destinations.read().destinations().to_vec()
    }

    /// The waypoint sequence, sorted by the `order` field.
    #[must_use]
    pub fn sorted_destinations(&self) -> Vec<Destination> {
        self.destinations.read().sorted_destinations()
    }

    /// The selected destination, if any.
    #[must_use]
    pub fn selected_destination(&self) -> Option<Destination> {
        self.destinations.read().selected_destination().cloned()
    }

    /// The candidate destination from the map, if any.
    #[must_use]
    pub fn temporary_destination(&self) -> Option<Destination> {
        self.destinations.read().temporary_destination().cloned()
    }

    /// Every saved segment.
    #[must_use]
    pub fn segments(&self) -> Vec<RouteSegment> {
        self.routes.read().segments().to_vec()
    }

    /// The selected segment, if any.
    #[must_use]
    pub fn selected_segment(&self) -> Option<RouteSegment> {
        self.routes.read().selected_segment().cloned()
    }

    /// Sum of per-segment distances, in kilometres.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.routes.read().total_distance()
    }

    /// Sum of per-segment durations, in seconds.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.routes.read().total_duration()
    }

    /// Aggregate duration, verbose policy.
    #[must_use]
    pub fn formatted_total_duration(&self) -> String {
        self.routes.read().formatted_total_duration()
    }

    /// Aggregate distance, one decimal.
    #[must_use]
    pub fn formatted_total_distance(&self) -> String {
        self.routes.read().formatted_total_distance()
    }

    /// Every known POI.
    #[must_use]
    pub fn pois(&self) -> Vec<PointOfInterest> {
        self.pois.read().pois().to_vec()
    }

    /// The selected POI, if any.
    #[must_use]
    pub fn selected_poi(&self) -> Option<PointOfInterest> {
        self.pois.read().selected_poi().cloned()
    }

    /// The latest accommodation results.
    #[must_use]
    pub fn accommodations(&self) -> Vec<Accommodation> {
        self.pois.read().accommodations().to_vec()
    }

    /// The latest event results.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.pois.read().events().to_vec()
    }

    /// POIs attached to one segment.
    #[must_use]
    pub fn pois_for_segment(&self, segment_id: i64) -> Vec<PointOfInterest> {
        self.pois
            .read()
            .pois_for_segment(segment_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// POIs grouped by primary kind, `"other"` for empty taxonomies.
    #[must_use]
    pub fn pois_by_kind(&self) -> BTreeMap<String, Vec<PointOfInterest>> {
        self.pois
            .read()
            .pois_by_kind()
            .into_iter()
            .map(|(kind, pois)| (kind, pois.into_iter().cloned().collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests;
