//! Presentation formatters for durations, distances, and fuel.
//!
//! Two duration policies coexist on purpose: the compact `"Xh Ym"` form used
//! inline next to each segment, and the verbose `"X hours Y minutes"` form
//! used for trip aggregates. They are independent formatting rules, not one
//! rule with options, and both floor to whole minutes.

/// Compact duration: `"Xh Ym"`.
///
/// The hour segment is omitted when zero; the minute segment is always
/// rendered, even when zero.
///
/// # Examples
/// ```
/// use roadtrip_client::domain::format::format_duration_compact;
///
/// assert_eq!(format_duration_compact(0.0), "0m");
/// assert_eq!(format_duration_compact(3661.0), "1h 1m");
/// assert_eq!(format_duration_compact(7200.0), "2h 0m");
/// ```
#[must_use]
pub fn format_duration_compact(seconds: f64) -> String {
    let (hours, minutes) = split_duration(seconds);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Verbose duration: `"X hours Y minutes"` with singular forms.
///
/// Zero segments are omitted entirely; a zero total renders as
/// `"0 minutes"`.
///
/// # Examples
/// ```
/// use roadtrip_client::domain::format::format_duration_verbose;
///
/// assert_eq!(format_duration_verbose(3600.0), "1 hour");
/// assert_eq!(format_duration_verbose(90.0), "1 minute");
/// assert_eq!(format_duration_verbose(0.0), "0 minutes");
/// assert_eq!(format_duration_verbose(9000.0), "2 hours 30 minutes");
/// ```
#[must_use]
pub fn format_duration_verbose(seconds: f64) -> String {
    let (hours, minutes) = split_duration(seconds);
    let mut formatted = String::new();
    if hours > 0 {
        formatted.push_str(&pluralise(hours, "hour"));
    }
    if minutes > 0 {
        if !formatted.is_empty() {
            formatted.push(' ');
        }
        formatted.push_str(&pluralise(minutes, "minute"));
    }
    if formatted.is_empty() {
        formatted.push_str("0 minutes");
    }
    formatted
}

/// Distance with one decimal: `"X.X km"`.
#[must_use]
pub fn format_distance_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// Fuel volume with one decimal: `"X.X L"`.
#[must_use]
pub fn format_fuel_litres(litres: f64) -> String {
    format!("{litres:.1} L")
}

/// Floor a second count into whole hours and leftover whole minutes.
fn split_duration(seconds: f64) -> (i64, i64) {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let hours = (seconds / 3600.0).floor() as i64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as i64;
    (hours, minutes)
}

fn pluralise(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::zero(0.0, "0m")]
    #[case::sub_minute(59.0, "0m")]
    #[case::minutes_only(150.0, "2m")]
    #[case::hour_and_minute(3661.0, "1h 1m")]
    #[case::exact_hours(7200.0, "2h 0m")]
    #[case::negative(-30.0, "0m")]
    fn compact_policy(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_duration_compact(seconds), expected);
    }

    #[rstest]
    #[case::zero(0.0, "0 minutes")]
    #[case::one_minute(90.0, "1 minute")]
    #[case::one_hour(3600.0, "1 hour")]
    #[case::both(9000.0, "2 hours 30 minutes")]
    #[case::singular_both(3660.0, "1 hour 1 minute")]
    fn verbose_policy(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_duration_verbose(seconds), expected);
    }

    #[test]
    fn distance_and_fuel_render_one_decimal() {
        assert_eq!(format_distance_km(343.546), "343.5 km");
        assert_eq!(format_fuel_litres(27.48), "27.5 L");
    }
}
