//! Point-of-interest, accommodation, and event search client.

use std::sync::Arc;

use async_trait::async_trait;

use super::ApiClient;
use crate::domain::poi::{
    Accommodation, AccommodationSearchOptions, Event, EventSearchOptions, PointOfInterest,
    PoiSearchOptions,
};
use crate::domain::ports::{ApiError, PoiApi};

/// [`PoiApi`] over the REST backend.
pub struct HttpPoiClient {
    api: Arc<ApiClient>,
}

impl HttpPoiClient {
    /// Build a POI client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PoiApi for HttpPoiClient {
    async fn list_for_trip(&self, trip_id: i64) -> Result<Vec<PointOfInterest>, ApiError> {
        self.api
            .get(&format!("/trips/{trip_id}/points-of-interest"))
            .await
    }

    async fn find_for_segment(
        &self,
        segment_id: i64,
        options: PoiSearchOptions,
    ) -> Result<Vec<PointOfInterest>, ApiError> {
        self.api
            .get_with_query(
                &format!("/route-segments/{segment_id}/points-of-interest"),
                &options,
            )
            .await
    }

    async fn find_accommodation(
        &self,
        segment_id: i64,
        options: AccommodationSearchOptions,
    ) -> Result<Vec<Accommodation>, ApiError> {
        self.api
            .get_with_query(
                &format!("/route-segments/{segment_id}/accommodation"),
                &options,
            )
            .await
    }

    async fn find_events(
        &self,
        trip_id: i64,
        options: EventSearchOptions,
    ) -> Result<Vec<Event>, ApiError> {
        self.api
            .get_with_query(&format!("/trips/{trip_id}/events"), &options)
            .await
    }
}
