use std::sync::Arc;

use rstest::rstest;

use super::{SnapshotError, SnapshotStore, Store, StoreSnapshot};
use crate::domain::geometry::Coordinate;
use crate::domain::poi::{EventSearchOptions, PointOfInterest, PoiSearchOptions};
use crate::domain::ports::{
    ApiError, MockDestinationApi, MockPoiApi, MockRouteApi, MockTripApi,
};
use crate::domain::route::RouteSegment;
use crate::domain::trip::{Trip, TripDraft};
use crate::domain::Destination;
use crate::outbound::storage::MemorySnapshotStore;

type MockStore = Store<MockTripApi, MockDestinationApi, MockRouteApi, MockPoiApi, MemorySnapshotStore>;

fn sample_trip(id: i64) -> Trip {
    Trip {
        id,
        name: format!("Trip {id}"),
        description: None,
        start_date: None,
        end_date: None,
        destinations: None,
        route_segments: None,
    }
}

fn sample_destination(id: i64, order: i64) -> Destination {
    Destination {
        id,
        trip_id: 1,
        name: format!("Stop {id}"),
        address: None,
        latitude: 48.0,
        longitude: 2.0,
        order,
        notes: None,
    }
}

fn sample_poi(id: i64, segment_id: i64, kind: &str) -> PointOfInterest {
    PointOfInterest {
        id,
        route_segment_id: segment_id,
        name: format!("POI {id}"),
        kind: kind.into(),
        latitude: 48.0,
        longitude: 2.0,
        description: None,
    }
}

fn sample_segment(id: i64) -> RouteSegment {
    RouteSegment {
        id,
        trip_id: 1,
        from_destination_id: 1,
        to_destination_id: 2,
        distance: 120.0,
        duration: 7200.0,
        polyline: serde_json::Value::Null,
    }
}

fn build_store(
    trips: MockTripApi,
    destinations: MockDestinationApi,
    routes: MockRouteApi,
    pois: MockPoiApi,
) -> (MockStore, Arc<MemorySnapshotStore>) {
    let snapshots = Arc::new(MemorySnapshotStore::new());
    let store = Store::new(
        Arc::new(trips),
        Arc::new(destinations),
        Arc::new(routes),
        Arc::new(pois),
        Arc::clone(&snapshots),
    );
    (store, snapshots)
}

fn empty_store() -> (MockStore, Arc<MemorySnapshotStore>) {
    build_store(
        MockTripApi::new(),
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    )
}

#[tokio::test]
async fn fetch_trips_commits_collection_and_clears_loading() {
    let mut trips = MockTripApi::new();
    trips
        .expect_list()
        .returning(|| Ok(vec![sample_trip(1), sample_trip(2)]));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    let fetched = store.fetch_trips().await.expect("fetch succeeds");

    assert_eq!(fetched.len(), 2);
    assert_eq!(store.trips(), fetched);
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn failed_action_records_user_message_and_releases_loading() {
    let mut trips = MockTripApi::new();
    trips
        .expect_list()
        .returning(|| Err(ApiError::transport("connection refused")));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    let result = store.fetch_trips().await;

    assert!(result.is_err());
    assert!(!store.is_loading());
    assert_eq!(
        store.error().as_deref(),
        Some("No response from server. Please check your connection.")
    );
    assert!(store.trips().is_empty());

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn fetch_trip_makes_it_current_and_pushes_nested_destinations() {
    let mut trip = sample_trip(1);
    trip.destinations = Some(vec![sample_destination(10, 0), sample_destination(11, 1)]);
    let mut trips = MockTripApi::new();
    let payload = trip.clone();
    trips
        .expect_get()
        .returning(move |_| Ok(payload.clone()));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    store.fetch_trip(1).await.expect("fetch succeeds");

    assert_eq!(store.current_trip(), Some(trip));
    assert_eq!(
        store
            .destinations()
            .iter()
            .map(|destination| destination.id)
            .collect::<Vec<_>>(),
        vec![10, 11]
    );
}

#[tokio::test]
async fn fetch_trip_without_nested_destinations_leaves_slice_alone() {
    let mut trips = MockTripApi::new();
    trips.expect_get().returning(|_| Ok(sample_trip(1)));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );
    store.select_destination(Some(sample_destination(99, 0)));

    store.fetch_trip(1).await.expect("fetch succeeds");

    assert!(store.destinations().is_empty());
    assert_eq!(store.selected_destination().map(|d| d.id), Some(99));
}

#[tokio::test]
async fn create_trip_appends_to_collection() {
    let mut trips = MockTripApi::new();
    trips
        .expect_create()
        .returning(|draft: TripDraft| {
            let mut trip = sample_trip(5);
            trip.name = draft.name;
            Ok(trip)
        });
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    let created = store
        .create_trip(TripDraft::named("Alpine crossing"))
        .await
        .expect("create succeeds");

    assert_eq!(created.name, "Alpine crossing");
    assert_eq!(store.trips(), vec![created]);
}

#[tokio::test]
async fn delete_trip_clears_matching_current_trip() {
    let mut trips = MockTripApi::new();
    trips.expect_delete().returning(|_| Ok(()));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );
    store.set_current_trip(Some(sample_trip(3)));

    store.delete_trip(3).await.expect("delete succeeds");

    assert_eq!(store.current_trip(), None);
}

#[tokio::test]
async fn calculate_routes_refreshes_list_entry_and_current_trip() {
    let mut recalculated = sample_trip(1);
    recalculated.route_segments = Some(vec![sample_segment(30)]);
    let mut trips = MockTripApi::new();
    trips.expect_list().returning(|| Ok(vec![sample_trip(1)]));
    let payload = recalculated.clone();
    trips
        .expect_calculate_routes()
        .returning(move |_| Ok(payload.clone()));
    let (store, _) = build_store(
        trips,
        MockDestinationApi::new(),
        MockRouteApi::new(),
        MockPoiApi::new(),
    );
    store.fetch_trips().await.expect("seed collection");

    store.calculate_routes(1).await.expect("recalculate");

    assert_eq!(store.trip_by_id(1), Some(recalculated.clone()));
    assert_eq!(store.current_trip(), Some(recalculated));
}

#[tokio::test]
async fn reorder_destinations_commits_the_returned_sequence() {
    let mut destinations = MockDestinationApi::new();
    destinations
        .expect_reorder()
        .returning(|_, ordered_ids: Vec<i64>| {
            Ok(ordered_ids
                .into_iter()
                .enumerate()
                .map(|(position, id)| sample_destination(id, position as i64))
                .collect())
        });
    let (store, _) = build_store(
        MockTripApi::new(),
        destinations,
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    store
        .reorder_destinations(1, vec![9, 4, 7])
        .await
        .expect("reorder succeeds");

    assert_eq!(
        store
            .sorted_destinations()
            .iter()
            .map(|destination| destination.id)
            .collect::<Vec<_>>(),
        vec![9, 4, 7]
    );
}

#[tokio::test]
async fn geocode_commits_nothing() {
    let mut destinations = MockDestinationApi::new();
    destinations.expect_geocode().returning(|_| {
        Ok(crate::domain::destination::GeocodedLocation {
            latitude: 51.5,
            longitude: -0.1,
            display_name: Some("London".into()),
        })
    });
    let (store, snapshots) = build_store(
        MockTripApi::new(),
        destinations,
        MockRouteApi::new(),
        MockPoiApi::new(),
    );

    let location = store
        .geocode_address("London".into())
        .await
        .expect("geocode succeeds");

    assert_eq!(location.display_name.as_deref(), Some("London"));
    assert!(store.destinations().is_empty());
    assert!(snapshots.load().is_none());
}

#[rstest]
#[case::replace(Some(true), vec![3, 4])]
#[case::append(None, vec![1, 3, 4])]
#[tokio::test]
async fn segment_poi_search_honours_replace_option(
    #[case] replace: Option<bool>,
    #[case] expected_ids: Vec<i64>,
) {
    let mut pois = MockPoiApi::new();
    pois.expect_list_for_trip()
        .returning(|_| Ok(vec![sample_poi(1, 7, "fuel")]));
    pois.expect_find_for_segment()
        .returning(|segment_id, _| {
            Ok(vec![
                sample_poi(3, segment_id, "tourism.museum"),
                sample_poi(4, segment_id, "historic"),
            ])
        });
    let (store, _) = build_store(
        MockTripApi::new(),
        MockDestinationApi::new(),
        MockRouteApi::new(),
        pois,
    );
    store.fetch_pois(1).await.expect("seed existing POI");

    store
        .find_pois_for_segment(
            7,
            PoiSearchOptions {
                replace,
                ..PoiSearchOptions::default()
            },
        )
        .await
        .expect("search succeeds");

    assert_eq!(
        store.pois().iter().map(|poi| poi.id).collect::<Vec<_>>(),
        expected_ids
    );
}

#[tokio::test]
async fn event_search_replaces_previous_results() {
    let mut pois = MockPoiApi::new();
    pois.expect_find_events()
        .returning(|_, _| Ok(Vec::new()));
    let (store, _) = build_store(
        MockTripApi::new(),
        MockDestinationApi::new(),
        MockRouteApi::new(),
        pois,
    );

    store
        .find_events(1, EventSearchOptions::default())
        .await
        .expect("search succeeds");

    assert!(store.events().is_empty());
    assert!(!store.is_loading());
}

#[test]
fn preview_route_is_synchronous_and_leaves_loading_clear() {
    let (store, _) = empty_store();

    let preview = store.preview_route(
        Coordinate::new(48.8566, 2.3522),
        Coordinate::new(48.8566, 2.3522),
    );

    assert_eq!(preview.distance, 0.0);
    assert_eq!(preview.duration, 0.0);
    assert!(!store.is_loading());
}

#[test]
fn mutations_are_mirrored_to_the_snapshot_store() {
    let (store, snapshots) = empty_store();

    store.set_current_trip(Some(sample_trip(8)));

    let snapshot = snapshots.load().expect("snapshot written");
    assert_eq!(snapshot.trips.current_trip().map(|trip| trip.id), Some(8));
}

#[test]
fn new_store_restores_from_existing_snapshot() {
    let mut snapshot = StoreSnapshot::default();
    snapshot.trips.set_trips(vec![sample_trip(1)]);
    snapshot
        .routes
        .set_segments(vec![sample_segment(20)]);
    let snapshots = Arc::new(MemorySnapshotStore::seeded(snapshot));

    let store: MockStore = Store::new(
        Arc::new(MockTripApi::new()),
        Arc::new(MockDestinationApi::new()),
        Arc::new(MockRouteApi::new()),
        Arc::new(MockPoiApi::new()),
        snapshots,
    );

    assert_eq!(store.trips().len(), 1);
    assert_eq!(store.segments().len(), 1);
    assert_eq!(store.total_distance(), 120.0);
}

struct FailingSnapshotStore;

impl SnapshotStore for FailingSnapshotStore {
    fn save(&self, _snapshot: &StoreSnapshot) -> Result<(), SnapshotError> {
        Err(SnapshotError::io("disk full"))
    }

    fn load(&self) -> Option<StoreSnapshot> {
        None
    }
}

#[test]
fn snapshot_failure_does_not_disturb_in_memory_state() {
    let store = Store::new(
        Arc::new(MockTripApi::new()),
        Arc::new(MockDestinationApi::new()),
        Arc::new(MockRouteApi::new()),
        Arc::new(MockPoiApi::new()),
        Arc::new(FailingSnapshotStore),
    );

    store.set_current_trip(Some(sample_trip(2)));

    assert_eq!(store.current_trip().map(|trip| trip.id), Some(2));
    assert_eq!(store.error(), None);
}

#[test]
fn aggregate_views_follow_segment_mutations() {
    let (store, _) = empty_store();
    store.set_segments(vec![sample_segment(1), sample_segment(2)]);

    assert_eq!(store.total_distance(), 240.0);
    assert_eq!(store.total_duration(), 14400.0);
    assert_eq!(store.formatted_total_duration(), "4 hours");
    assert_eq!(store.formatted_total_distance(), "240.0 km");

    store.remove_segment(2);
    assert_eq!(store.total_distance(), 120.0);
}
