//! Coordinate parsing from the mixed notations found in candidate tables.
//!
//! Candidate files are written by different pipelines and hand-edited, so a
//! single column can hold any of:
//!
//! ```text
//! Number:           128.836            (already decimal degrees)
//! Colon-separated:  08:35:20.6         (RA: hours, Dec: degrees)
//! Qualified:        8h35m20.6s  -45d10m35s  45° 10' 35"
//! Decimal text:     "128.836"
//! ```
//!
//! Detection order is colon form, then unit qualifiers, then plain decimal.
//! The plain-decimal fallback reads the leading number and ignores the rest,
//! so `"45 10 35"` is 45.
//! Colon-form right ascension is always taken to be hours. For qualified
//! input the 15× hour scaling applies when the first qualifier is `h`, or when
//! there is no first qualifier and the axis is RA.

use once_cell::sync::Lazy;
use regex::Regex;

use super::identifier::leading_float;
use super::Axis;
use crate::constants::{DEGREES_PER_HOUR, MINUTES_PER_UNIT, SECONDS_PER_UNIT};
use crate::{FieldValue, TriageError, TriageResult};

static QUALIFIED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ([+-]?\d+(?:\.\d+)?)             # first component, optionally signed
        \s*(deg|h|d|°)?                  # hour or degree qualifier
        \s*(\d+(?:\.\d+)?)               # minutes
        \s*(min|m|'|)?                   # minute qualifier
        \s*(\d+(?:\.\d+)?)?              # seconds
        \s*(sec|s|"|)?                   # second qualifier
        "#,
    )
    .unwrap()
});

static SINGLE_QUALIFIED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)^([+-]?\d+(?:\.\d+)?)\s*(deg|h|d|°)$"#).unwrap());

/// Parse a coordinate cell into decimal degrees; `NaN` when it cannot be read.
///
/// Numbers are returned unchanged. Callers must treat `NaN` as "unknown".
pub fn parse_coordinate(value: &FieldValue, axis: Axis) -> f64 {
    match value {
        FieldValue::Number(n) => *n,
        FieldValue::Empty => f64::NAN,
        FieldValue::Text(s) => parse_coordinate_str(s, axis),
    }
}

/// String form of [`parse_coordinate`].
pub fn parse_coordinate_str(s: &str, axis: Axis) -> f64 {
    try_parse_coordinate(s, axis).unwrap_or(f64::NAN)
}

/// Parse a coordinate string into decimal degrees.
///
/// # Errors
/// [`TriageError::Parse`] when no accepted notation matches.
pub fn try_parse_coordinate(s: &str, axis: Axis) -> TriageResult<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TriageError::parse(s, "coordinate"));
    }

    if s.contains(':') {
        return parse_colon(s, axis);
    }

    if let Some(deg) = parse_qualified(s, axis) {
        return Ok(deg);
    }

    leading_float(s)
        .filter(|v| v.is_finite())
        .ok_or_else(|| TriageError::parse(s, "coordinate"))
}

fn parse_colon(s: &str, axis: Axis) -> TriageResult<f64> {
    let parts: Vec<Option<f64>> = s.split(':').map(leading_float).collect();

    let first = parts[0].unwrap_or(0.0);
    let mut magnitude = first.abs();
    if parts.len() > 1 {
        let minutes = parts[1].ok_or_else(|| TriageError::parse(s, "sexagesimal coordinate"))?;
        magnitude += minutes / MINUTES_PER_UNIT;
    }
    if parts.len() > 2 {
        magnitude += parts[2].unwrap_or(0.0) / SECONDS_PER_UNIT;
    }

    if axis.is_right_ascension() {
        magnitude *= DEGREES_PER_HOUR;
    }

    let negative = s.starts_with('-') || first < 0.0;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_qualified(s: &str, axis: Axis) -> Option<f64> {
    if let Some(caps) = QUALIFIED_REGEX.captures(s) {
        let unit = caps.get(2).map(|m| m.as_str());
        let minute_mark = caps.get(4).map_or("", |m| m.as_str());
        if unit.is_some() || !minute_mark.is_empty() {
            let first: f64 = caps[1].parse().ok()?;
            let minutes: f64 = caps[3].parse().ok()?;
            let seconds: f64 = caps.get(5).map_or(Ok(0.0), |m| m.as_str().parse()).ok()?;

            let mut magnitude =
                first.abs() + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT;
            if scales_as_hours(unit, axis) {
                magnitude *= DEGREES_PER_HOUR;
            }
            let negative = s.starts_with('-') || first < 0.0;
            return Some(if negative { -magnitude } else { magnitude });
        }
    }

    let caps = SINGLE_QUALIFIED_REGEX.captures(s)?;
    let value: f64 = caps[1].parse().ok()?;
    Some(if scales_as_hours(caps.get(2).map(|m| m.as_str()), axis) {
        value * DEGREES_PER_HOUR
    } else {
        value
    })
}

fn scales_as_hours(unit: Option<&str>, axis: Axis) -> bool {
    match unit {
        Some(u) => u.eq_ignore_ascii_case("h"),
        None => axis.is_right_ascension(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn ra(s: &str) -> f64 {
        parse_coordinate_str(s, Axis::RightAscension)
    }

    fn dec(s: &str) -> f64 {
        parse_coordinate_str(s, Axis::Declination)
    }

    #[test]
    fn test_number_passthrough() {
        assert_eq!(
            parse_coordinate(&FieldValue::Number(123.4), Axis::RightAscension),
            123.4
        );
        assert_eq!(
            parse_coordinate(&FieldValue::Number(-12.0), Axis::Declination),
            -12.0
        );
        assert!(parse_coordinate(&FieldValue::Empty, Axis::Declination).is_nan());
    }

    #[test]
    fn test_colon_right_ascension_is_hours() {
        let expected = (8.0 + 35.0 / 60.0 + 20.6 / 3600.0) * 15.0;
        assert!((ra("08:35:20.6") - expected).abs() < EPSILON);
        assert!((ra("12:00:00") - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_colon_declination() {
        let expected = -(45.0 + 10.0 / 60.0 + 35.0 / 3600.0);
        assert!((dec("-45:10:35") - expected).abs() < EPSILON);
        assert!((dec("+12:10:01") - (12.0 + 10.0 / 60.0 + 1.0 / 3600.0)).abs() < EPSILON);
    }

    #[test]
    fn test_colon_negative_zero_degrees() {
        assert!((dec("-00:30:00") - -0.5).abs() < EPSILON);
    }

    #[test]
    fn test_colon_two_components() {
        assert!((dec("10:30") - 10.5).abs() < EPSILON);
    }

    #[test]
    fn test_colon_bad_minutes() {
        assert!(dec("10:xx:00").is_nan());
        assert!(try_parse_coordinate("10:xx:00", Axis::Declination).is_err());
    }

    #[test]
    fn test_hour_qualifier() {
        let expected = (8.0 + 35.0 / 60.0 + 20.0 / 3600.0) * 15.0;
        assert!((ra("8h35m20s") - expected).abs() < EPSILON);
        // an explicit h scales even on the declination axis
        assert!((dec("8h35m20s") - expected).abs() < EPSILON);
    }

    #[test]
    fn test_degree_qualifiers() {
        let expected = 45.0 + 10.0 / 60.0 + 35.0 / 3600.0;
        assert!((dec("45d10m35s") - expected).abs() < EPSILON);
        assert!((dec("45deg 10min 35sec") - expected).abs() < EPSILON);
        assert!((dec("45° 10' 35\"") - expected).abs() < EPSILON);
        assert!((dec("-45d10m35s") + expected).abs() < EPSILON);
        // a degree qualifier is never scaled, even for RA
        assert!((ra("45d10m35s") - expected).abs() < EPSILON);
    }

    #[test]
    fn test_missing_first_qualifier_uses_axis() {
        let value = 8.0 + 30.0 / 60.0;
        assert!((ra("8 30m") - value * 15.0).abs() < EPSILON);
        assert!((dec("8 30m") - value).abs() < EPSILON);
    }

    #[test]
    fn test_single_qualified_component() {
        assert!((ra("2h") - 30.0).abs() < EPSILON);
        assert!((ra("30.5deg") - 30.5).abs() < EPSILON);
        assert!((dec("-12.25°") + 12.25).abs() < EPSILON);
    }

    #[test]
    fn test_plain_decimal() {
        assert!((ra("128.836") - 128.836).abs() < EPSILON);
        assert!((dec(" -45.2 ") + 45.2).abs() < EPSILON);
    }

    #[test]
    fn test_plain_decimal_reads_leading_number() {
        assert!((dec("45 10 35") - 45.0).abs() < EPSILON);
        assert!((ra("128.8 approx") - 128.8).abs() < EPSILON);
    }

    #[test]
    fn test_unparseable_is_nan() {
        assert!(ra("").is_nan());
        assert!(ra("   ").is_nan());
        assert!(ra("north").is_nan());
        assert!(dec("+").is_nan());
        assert!(try_parse_coordinate("north", Axis::RightAscension).is_err());
    }
}
