//! Wire polyline decoding.
//!
//! Saved segments carry their polyline either as a GeoJSON string (a
//! `LineString`, optionally wrapped in a `Feature`) or as an already-decoded
//! array of coordinate pairs. GeoJSON stores coordinates `[lng, lat]`, so
//! they are flipped to `[lat, lng]` on output. Anything unrecognised decodes
//! to an empty line rather than an error: a segment with a bad polyline is
//! still a segment.

use serde_json::Value;

use super::geometry::Coordinate;

/// Decode a wire polyline into ordered `[lat, lng]` coordinates.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use roadtrip_client::domain::Coordinate;
/// use roadtrip_client::domain::polyline::decode_polyline;
///
/// let geojson = json!(r#"{"type":"LineString","coordinates":[[10,20],[11,21]]}"#);
/// assert_eq!(
///     decode_polyline(&geojson),
///     vec![Coordinate::new(20.0, 10.0), Coordinate::new(21.0, 11.0)],
/// );
/// assert!(decode_polyline(&json!(null)).is_empty());
/// ```
#[must_use]
pub fn decode_polyline(polyline: &Value) -> Vec<Coordinate> {
    match polyline {
        Value::String(raw) => decode_geojson(raw),
        Value::Array(pairs) => decode_pairs(pairs),
        _ => Vec::new(),
    }
}

/// Parse a GeoJSON string and extract its `LineString` coordinates.
fn decode_geojson(raw: &str) -> Vec<Coordinate> {
    let Ok(document) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    line_string_coordinates(&document)
        .map(flip_lng_lat)
        .unwrap_or_default()
}

/// Locate the coordinate array of a `LineString`, unwrapping one `Feature`.
fn line_string_coordinates(document: &Value) -> Option<&[Value]> {
    let geometry = match document.get("type").and_then(Value::as_str) {
        Some("LineString") => document,
        Some("Feature") => {
            let geometry = document.get("geometry")?;
            (geometry.get("type").and_then(Value::as_str) == Some("LineString"))
                .then_some(geometry)?
        }
        _ => return None,
    };
    geometry
        .get("coordinates")?
        .as_array()
        .map(Vec::as_slice)
}

/// GeoJSON order is `[lng, lat]`; emit `[lat, lng]`.
fn flip_lng_lat(coordinates: &[Value]) -> Vec<Coordinate> {
    coordinates
        .iter()
        .filter_map(|pair| {
            let lng = pair.get(0)?.as_f64()?;
            let lat = pair.get(1)?.as_f64()?;
            Some(Coordinate::new(lat, lng))
        })
        .collect()
}

/// An already-decoded array is returned unchanged (pairs are `[lat, lng]`).
fn decode_pairs(pairs: &[Value]) -> Vec<Coordinate> {
    pairs
        .iter()
        .filter_map(|pair| {
            let lat = pair.get(0)?.as_f64()?;
            let lng = pair.get(1)?.as_f64()?;
            Some(Coordinate::new(lat, lng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn geojson_line_string_flips_lng_lat() {
        let polyline = json!(r#"{"type":"LineString","coordinates":[[10,20],[11,21]]}"#);
        assert_eq!(
            decode_polyline(&polyline),
            vec![Coordinate::new(20.0, 10.0), Coordinate::new(21.0, 11.0)],
        );
    }

    #[test]
    fn feature_wrapped_line_string_is_unwrapped() {
        let polyline = json!(
            r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[1,2],[3,4]]}}"#
        );
        assert_eq!(
            decode_polyline(&polyline),
            vec![Coordinate::new(2.0, 1.0), Coordinate::new(4.0, 3.0)],
        );
    }

    #[test]
    fn literal_array_is_returned_unchanged() {
        let polyline = json!([[20.0, 10.0], [21.0, 11.0]]);
        assert_eq!(
            decode_polyline(&polyline),
            vec![Coordinate::new(20.0, 10.0), Coordinate::new(21.0, 11.0)],
        );
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::number(json!(42))]
    #[case::unparsable(json!("not geojson at all"))]
    #[case::wrong_type(json!(r#"{"type":"Point","coordinates":[1,2]}"#))]
    #[case::feature_without_geometry(json!(r#"{"type":"Feature"}"#))]
    fn unrecognised_input_decodes_to_empty(#[case] polyline: Value) {
        assert!(decode_polyline(&polyline).is_empty());
    }
}
