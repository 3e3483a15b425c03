//! Data contract for the map display collaborator.
//!
//! The map widget itself is out of scope; this module only defines the
//! marker descriptor it consumes, alongside the `[lat, lng]` polylines
//! produced by [`crate::domain::polyline`].

use serde::{Deserialize, Serialize};

use super::destination::Destination;
use super::icon::poi_icon;
use super::poi::PointOfInterest;

/// Everything a map needs to render one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Popup title.
    pub name: String,
    /// Taxonomy string driving icon selection; empty for waypoints.
    pub kind: String,
    /// Popup body, when there is one.
    pub description: Option<String>,
}

impl MarkerDescriptor {
    /// Icon class for this marker, via the primary-kind lookup.
    #[must_use]
    pub fn icon(&self) -> String {
        poi_icon(&self.kind)
    }
}

impl From<&PointOfInterest> for MarkerDescriptor {
    fn from(poi: &PointOfInterest) -> Self {
        Self {
            latitude: poi.latitude,
            longitude: poi.longitude,
            name: poi.name.clone(),
            kind: poi.kind.clone(),
            description: poi.description.clone(),
        }
    }
}

impl From<&Destination> for MarkerDescriptor {
    fn from(destination: &Destination) -> Self {
        Self {
            latitude: destination.latitude,
            longitude: destination.longitude,
            name: destination.name.clone(),
            kind: String::new(),
            description: destination.notes.clone(),
        }
    }
}
