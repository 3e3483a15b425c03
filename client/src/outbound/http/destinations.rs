//! Destination resource client.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::ApiClient;
use crate::domain::destination::{Destination, DestinationDraft, GeocodedLocation};
use crate::domain::ports::{ApiError, DestinationApi};

/// [`DestinationApi`] over the REST backend.
pub struct HttpDestinationClient {
    api: Arc<ApiClient>,
}

impl HttpDestinationClient {
    /// Build a destination client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Reorder payload entry: `{"id": 5, "order": 0}`.
#[derive(Debug, Serialize)]
struct ReorderEntry {
    id: i64,
    order: i64,
}

#[derive(Debug, Serialize)]
struct ReorderBody {
    destinations: Vec<ReorderEntry>,
}

#[derive(Debug, Serialize)]
struct GeocodeBody {
    address: String,
}

#[async_trait]
impl DestinationApi for HttpDestinationClient {
    async fn list_for_trip(&self, trip_id: i64) -> Result<Vec<Destination>, ApiError> {
        self.api.get(&format!("/trips/{trip_id}/destinations")).await
    }

    async fn create(&self, draft: DestinationDraft) -> Result<Destination, ApiError> {
        self.api.post("/destinations", &draft).await
    }

    async fn update(&self, id: i64, draft: DestinationDraft) -> Result<Destination, ApiError> {
        self.api.put(&format!("/destinations/{id}"), &draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/destinations/{id}")).await
    }

    async fn reorder(
        &self,
        trip_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<Destination>, ApiError> {
        // Positions in the submitted sequence become the new order values.
        let body = ReorderBody {
            destinations: ordered_ids
                .into_iter()
                .enumerate()
                .map(|(position, id)| ReorderEntry {
                    id,
                    order: position as i64,
                })
                .collect(),
        };
        self.api
            .post(&format!("/trips/{trip_id}/destinations/reorder"), &body)
            .await
    }

    async fn geocode(&self, address: String) -> Result<GeocodedLocation, ApiError> {
        self.api
            .post("/destinations/geocode", &GeocodeBody { address })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_body_assigns_positional_order_values() {
        let body = ReorderBody {
            destinations: vec![9, 4, 7]
                .into_iter()
                .enumerate()
                .map(|(position, id)| ReorderEntry {
                    id,
                    order: position as i64,
                })
                .collect(),
        };
        let json = serde_json::to_value(&body).expect("body serialises");
        assert_eq!(
            json,
            serde_json::json!({
                "destinations": [
                    {"id": 9, "order": 0},
                    {"id": 4, "order": 1},
                    {"id": 7, "order": 2},
                ],
            }),
        );
    }
}
