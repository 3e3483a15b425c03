//! Trip resource client.

use std::sync::Arc;

use async_trait::async_trait;

use super::ApiClient;
use crate::domain::ports::{ApiError, TripApi};
use crate::domain::trip::{Trip, TripDraft};

/// [`TripApi`] over the REST backend.
pub struct HttpTripClient {
    api: Arc<ApiClient>,
}

impl HttpTripClient {
    /// Build a trip client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TripApi for HttpTripClient {
    async fn list(&self) -> Result<Vec<Trip>, ApiError> {
        self.api.get("/trips").await
    }

    async fn get(&self, id: i64) -> Result<Trip, ApiError> {
        self.api.get(&format!("/trips/{id}")).await
    }

    async fn create(&self, draft: TripDraft) -> Result<Trip, ApiError> {
        self.api.post("/trips", &draft).await
    }

    async fn update(&self, id: i64, draft: TripDraft) -> Result<Trip, ApiError> {
        self.api.put(&format!("/trips/{id}"), &draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/trips/{id}")).await
    }

    async fn calculate_routes(&self, id: i64) -> Result<Trip, ApiError> {
        self.api
            .post_empty(&format!("/trips/{id}/calculate-route"))
            .await
    }
}
