//! POI icon lookup.
//!
//! Maps a taxonomy's primary kind to a Font Awesome class for map markers
//! and list rows. Unknown kinds get the generic map-marker glyph.

use super::poi::primary_kind;

/// Fallback glyph for unknown kinds.
const DEFAULT_ICON: &str = "fa-map-marker-alt";

/// Known primary kinds and their glyphs.
const ICONS: &[(&str, &str)] = &[
    ("tourism.attraction", "fa-landmark"),
    ("tourism.sights", "fa-monument"),
    ("tourism.museum", "fa-museum"),
    ("natural", "fa-mountain"),
    ("natural.water", "fa-water"),
    ("leisure.park", "fa-tree"),
    ("catering.restaurant", "fa-utensils"),
    ("catering.cafe", "fa-coffee"),
    ("entertainment", "fa-theater-masks"),
    ("accommodation.hotel", "fa-bed"),
    ("accommodation.motel", "fa-bed"),
];

/// Font Awesome class for a POI taxonomy string.
///
/// The lookup uses the first comma-separated component of `kind`.
///
/// # Examples
/// ```
/// use roadtrip_client::domain::icon::poi_icon;
///
/// assert_eq!(poi_icon("tourism.museum, historic"), "fas fa-museum");
/// assert_eq!(poi_icon("something.unknown"), "fas fa-map-marker-alt");
/// ```
#[must_use]
pub fn poi_icon(kind: &str) -> String {
    let primary = primary_kind(kind);
    let glyph = ICONS
        .iter()
        .find(|(name, _)| *name == primary)
        .map_or(DEFAULT_ICON, |(_, glyph)| glyph);
    format!("fas {glyph}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::museum("tourism.museum", "fas fa-museum")]
    #[case::secondary_ignored("catering.cafe, tourism.museum", "fas fa-coffee")]
    #[case::unknown("transport.fuel", "fas fa-map-marker-alt")]
    #[case::empty("", "fas fa-map-marker-alt")]
    fn lookup_uses_primary_kind(#[case] kind: &str, #[case] expected: &str) {
        assert_eq!(poi_icon(kind), expected);
    }
}
