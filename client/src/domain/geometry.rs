//! Great-circle distance and the straight-line route preview.
//!
//! These are deliberately modest: the preview is a placeholder for real
//! routing, and the original behaviour (straight line, constant 60 km/h) is
//! preserved exactly.

use serde::{Deserialize, Serialize};

use super::route::RoutePreview;

/// Mean Earth radius in kilometres, as used by the reference geodesy.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Assumed average speed for the duration estimate, in km/h.
const PREVIEW_SPEED_KMH: f64 = 60.0;

/// Default fuel efficiency in litres per 100 km.
pub const DEFAULT_FUEL_EFFICIENCY: f64 = 8.0;

/// A WGS84 latitude/longitude pair.
///
/// Serialises as a `[lat, lng]` two-element array, matching the map
/// collaborator's polyline contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

/// Great-circle surface distance between two coordinates, in kilometres.
///
/// Uses the haversine formula on the mean Earth radius; accurate to well
/// under 0.1% for the sub-1000 km hops a road trip is made of.
///
/// # Examples
/// ```
/// use roadtrip_client::domain::Coordinate;
/// use roadtrip_client::domain::geometry::haversine_distance_km;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let lyon = Coordinate::new(45.7640, 4.8357);
/// let km = haversine_distance_km(paris, lyon);
/// assert!((km - 391.5).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_distance_km(origin: Coordinate, destination: Coordinate) -> f64 {
    let lat_a = origin.latitude.to_radians();
    let lat_b = destination.latitude.to_radians();
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lng = (destination.longitude - origin.longitude).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().asin();
    EARTH_RADIUS_KM * angle
}

/// Straight-line route estimate between two coordinates.
///
/// Distance is the great-circle distance, duration assumes
/// [`PREVIEW_SPEED_KMH`] (so `duration == distance × 60` seconds exactly),
/// and the polyline is the bare two-point line with no interpolation.
#[must_use]
pub fn preview_route(origin: Coordinate, destination: Coordinate) -> RoutePreview {
    let distance = haversine_distance_km(origin, destination);
    RoutePreview {
        distance,
        duration: distance * (3600.0 / PREVIEW_SPEED_KMH),
        polyline: vec![origin, destination],
    }
}

/// Fuel estimate for a distance, in litres.
///
/// `efficiency` is in litres per 100 km and defaults to
/// [`DEFAULT_FUEL_EFFICIENCY`] when `None`.
///
/// # Examples
/// ```
/// use roadtrip_client::domain::geometry::estimate_fuel_litres;
///
/// assert_eq!(estimate_fuel_litres(250.0, None), 20.0);
/// assert_eq!(estimate_fuel_litres(250.0, Some(6.0)), 15.0);
/// ```
#[must_use]
pub fn estimate_fuel_litres(distance_km: f64, efficiency: Option<f64>) -> f64 {
    distance_km * efficiency.unwrap_or(DEFAULT_FUEL_EFFICIENCY) / 100.0
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const PARIS: Coordinate = Coordinate::new(48.8566, 2.3522);
    const LONDON: Coordinate = Coordinate::new(51.5074, -0.1278);
    const BERLIN: Coordinate = Coordinate::new(52.52, 13.405);

    #[rstest]
    #[case::origin(PARIS)]
    #[case::antimeridian(Coordinate::new(0.0, 180.0))]
    #[case::pole(Coordinate::new(90.0, 0.0))]
    fn distance_to_self_is_zero(#[case] point: Coordinate) {
        assert_eq!(haversine_distance_km(point, point), 0.0);
    }

    #[rstest]
    #[case(PARIS, LONDON)]
    #[case(PARIS, BERLIN)]
    #[case(LONDON, BERLIN)]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        let forward = haversine_distance_km(a, b);
        let backward = haversine_distance_km(b, a);
        assert!((forward - backward).abs() < 1e-9);
    }

    /// Reference distances computed with a trusted geodesic implementation.
    #[rstest]
    #[case::paris_london(PARIS, LONDON, 343.5)]
    #[case::paris_berlin(PARIS, BERLIN, 877.5)]
    fn distance_matches_reference_within_tolerance(
        #[case] a: Coordinate,
        #[case] b: Coordinate,
        #[case] expected_km: f64,
    ) {
        let actual = haversine_distance_km(a, b);
        let relative = (actual - expected_km).abs() / expected_km;
        assert!(
            relative < 0.001,
            "expected ~{expected_km} km, got {actual} km"
        );
    }

    #[test]
    fn preview_duration_is_distance_times_sixty() {
        let preview = preview_route(PARIS, LONDON);
        assert_eq!(preview.duration, preview.distance * 60.0);
    }

    #[test]
    fn preview_polyline_is_the_two_endpoints() {
        let preview = preview_route(PARIS, BERLIN);
        assert_eq!(preview.polyline, vec![PARIS, BERLIN]);
    }

    #[test]
    fn fuel_estimate_uses_default_efficiency() {
        assert_eq!(estimate_fuel_litres(100.0, None), 8.0);
    }
}
