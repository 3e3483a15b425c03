//! Saved-segment resource client.
//!
//! Only persisted CRUD lives here; the client-side straight-line preview is
//! pure and implemented in [`crate::domain::geometry`].

use std::sync::Arc;

use async_trait::async_trait;

use super::ApiClient;
use crate::domain::ports::{ApiError, RouteApi};
use crate::domain::route::{RouteSegment, SegmentDraft};

/// [`RouteApi`] over the REST backend.
pub struct HttpRouteClient {
    api: Arc<ApiClient>,
}

impl HttpRouteClient {
    /// Build a route client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RouteApi for HttpRouteClient {
    async fn create_segment(&self, draft: SegmentDraft) -> Result<RouteSegment, ApiError> {
        self.api.post("/route-segments", &draft).await
    }

    async fn update_segment(
        &self,
        id: i64,
        draft: SegmentDraft,
    ) -> Result<RouteSegment, ApiError> {
        self.api.put(&format!("/route-segments/{id}"), &draft).await
    }
}
