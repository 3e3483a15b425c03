//! Ports to the backend REST collaborator.
//!
//! One trait per resource, implemented by the reqwest adapters in
//! [`crate::outbound::http`]. Each method resolves to the unwrapped response
//! payload or rejects with an [`ApiError`]; there are no retries and no
//! caching at this seam, so the store can reason about exactly one request
//! per action.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use super::destination::{Destination, DestinationDraft, GeocodedLocation};
use super::poi::{
    Accommodation, AccommodationSearchOptions, Event, EventSearchOptions, PointOfInterest,
    PoiSearchOptions,
};
use super::route::{RouteSegment, SegmentDraft};
use super::trip::{Trip, TripDraft};

/// Failure raised by the HTTP adapter, classified by what the backend said.
///
/// Classification annotates, it never swallows: every variant keeps the raw
/// diagnostic detail in its `Display`, while [`ApiError::user_message`]
/// yields the fixed user-facing line for each class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received at all (connectivity, DNS, timeout).
    #[error("transport failure: {message}")]
    Transport { message: String },
    /// HTTP 404.
    #[error("resource not found: {message}")]
    NotFound { message: String },
    /// HTTP 419: the session cookie is stale. The adapter refreshes the
    /// session out of band; the caller must resubmit.
    #[error("session expired: {message}")]
    SessionExpired { message: String },
    /// HTTP 422 with the backend's field-name to error-messages mapping.
    #[error("validation failed: {message}")]
    Validation {
        errors: BTreeMap<String, Vec<String>>,
        message: String,
    },
    /// Any 5xx response.
    #[error("server failure (status {status}): {message}")]
    Server { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("response decode failed: {message}")]
    Decode { message: String },
    /// Any other non-success status.
    #[error("unexpected response (status {status}): {message}")]
    Unclassified { status: u16, message: String },
}

impl ApiError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for 404 responses.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Helper for 419 responses.
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::SessionExpired {
            message: message.into(),
        }
    }

    /// Helper for 422 responses.
    pub fn validation(
        errors: BTreeMap<String, Vec<String>>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            errors,
            message: message.into(),
        }
    }

    /// Helper for 5xx responses.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Helper for undecodable payloads.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Helper for unclassified statuses.
    pub fn unclassified(status: u16, message: impl Into<String>) -> Self {
        Self::Unclassified {
            status,
            message: message.into(),
        }
    }

    /// The fixed user-facing message for this failure class.
    ///
    /// Validation failures flatten the field mapping into one multi-line
    /// string, in field order; an empty mapping falls back to the generic
    /// line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => {
                "No response from server. Please check your connection.".to_owned()
            }
            Self::NotFound { .. } => "The requested resource was not found.".to_owned(),
            Self::SessionExpired { .. } => {
                "Your session has expired. Please try again.".to_owned()
            }
            Self::Validation { errors, .. } if !errors.is_empty() => errors
                .values()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Server { .. } => "Server error. Please try again later.".to_owned(),
            Self::Validation { .. } | Self::Decode { .. } | Self::Unclassified { .. } => {
                "An error occurred. Please try again.".to_owned()
            }
        }
    }
}

/// Trip resource operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripApi: Send + Sync {
    /// List every trip, without nested collections.
    async fn list(&self) -> Result<Vec<Trip>, ApiError>;

    /// Fetch one trip with its destinations, segments, and POIs nested.
    async fn get(&self, id: i64) -> Result<Trip, ApiError>;

    /// Create a trip.
    async fn create(&self, draft: TripDraft) -> Result<Trip, ApiError>;

    /// Update a trip.
    async fn update(&self, id: i64, draft: TripDraft) -> Result<Trip, ApiError>;

    /// Delete a trip.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Ask the backend to (re)compute every segment of a trip.
    async fn calculate_routes(&self, id: i64) -> Result<Trip, ApiError>;
}

/// Destination resource operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationApi: Send + Sync {
    /// List a trip's destinations.
    async fn list_for_trip(&self, trip_id: i64) -> Result<Vec<Destination>, ApiError>;

    /// Create a destination.
    async fn create(&self, draft: DestinationDraft) -> Result<Destination, ApiError>;

    /// Update a destination.
    async fn update(&self, id: i64, draft: DestinationDraft) -> Result<Destination, ApiError>;

    /// Delete a destination.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Submit a new waypoint sequence. Each id is assigned the `order`
    /// value equal to its position in `ordered_ids` (0-based), regardless
    /// of its previous order.
    async fn reorder(
        &self,
        trip_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<Destination>, ApiError>;

    /// Resolve an address string to coordinates.
    async fn geocode(&self, address: String) -> Result<GeocodedLocation, ApiError>;
}

/// Saved-segment resource operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteApi: Send + Sync {
    /// Persist a new segment between two waypoints.
    async fn create_segment(&self, draft: SegmentDraft) -> Result<RouteSegment, ApiError>;

    /// Update a saved segment's endpoints.
    async fn update_segment(
        &self,
        id: i64,
        draft: SegmentDraft,
    ) -> Result<RouteSegment, ApiError>;
}

/// Point-of-interest, accommodation, and event search operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoiApi: Send + Sync {
    /// List every POI already attached to a trip.
    async fn list_for_trip(&self, trip_id: i64) -> Result<Vec<PointOfInterest>, ApiError>;

    /// Search for POIs along one segment.
    async fn find_for_segment(
        &self,
        segment_id: i64,
        options: PoiSearchOptions,
    ) -> Result<Vec<PointOfInterest>, ApiError>;

    /// Search for overnight options along one segment.
    async fn find_accommodation(
        &self,
        segment_id: i64,
        options: AccommodationSearchOptions,
    ) -> Result<Vec<Accommodation>, ApiError>;

    /// Search for events along a trip within a date window.
    async fn find_events(
        &self,
        trip_id: i64,
        options: EventSearchOptions,
    ) -> Result<Vec<Event>, ApiError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::transport(
        ApiError::transport("connection refused"),
        "No response from server. Please check your connection."
    )]
    #[case::not_found(
        ApiError::not_found("status 404"),
        "The requested resource was not found."
    )]
    #[case::session(
        ApiError::session_expired("status 419"),
        "Your session has expired. Please try again."
    )]
    #[case::server(
        ApiError::server(503, "status 503"),
        "Server error. Please try again later."
    )]
    #[case::decode(
        ApiError::decode("expected struct Trip"),
        "An error occurred. Please try again."
    )]
    #[case::unclassified(
        ApiError::unclassified(418, "status 418"),
        "An error occurred. Please try again."
    )]
    fn fixed_messages_per_class(#[case] error: ApiError, #[case] expected: &str) {
        assert_eq!(error.user_message(), expected);
    }

    #[test]
    fn validation_flattens_field_map_in_key_order() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "name".to_owned(),
            vec!["The name field is required.".to_owned()],
        );
        errors.insert(
            "end_date".to_owned(),
            vec![
                "The end date must be a valid date.".to_owned(),
                "The end date must be after the start date.".to_owned(),
            ],
        );
        let error = ApiError::validation(errors, "status 422");
        assert_eq!(
            error.user_message(),
            "The end date must be a valid date.\n\
             The end date must be after the start date.\n\
             The name field is required.",
        );
    }

    #[test]
    fn empty_validation_map_falls_back_to_generic_line() {
        let error = ApiError::validation(BTreeMap::new(), "status 422");
        assert_eq!(error.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn display_keeps_raw_detail() {
        let error = ApiError::server(500, "status 500: something broke");
        assert_eq!(
            error.to_string(),
            "server failure (status 500): status 500: something broke",
        );
    }
}
