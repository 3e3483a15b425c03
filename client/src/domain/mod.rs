//! Domain entities, derived-view utilities, and adapter ports.
//!
//! Entities mirror the backend's JSON resources. They are plain serde types;
//! all orchestration lives in [`crate::store`] and all transport in
//! [`crate::outbound`]. The utility modules ([`geometry`], [`polyline`],
//! [`format`], [`icon`]) are pure functions with no I/O.

pub mod destination;
pub mod format;
pub mod geometry;
pub mod icon;
pub mod map;
pub mod poi;
pub mod polyline;
pub mod ports;
pub mod route;
pub mod trip;

pub use self::destination::{Destination, DestinationDraft, GeocodedLocation};
pub use self::geometry::Coordinate;
pub use self::map::MarkerDescriptor;
pub use self::poi::{
    Accommodation, AccommodationSearchOptions, Event, EventSearchOptions, PointOfInterest,
    PoiSearchOptions,
};
pub use self::ports::{ApiError, DestinationApi, PoiApi, RouteApi, TripApi};
pub use self::route::{RoutePreview, RouteSegment, SegmentDraft};
pub use self::trip::{Trip, TripDraft};
