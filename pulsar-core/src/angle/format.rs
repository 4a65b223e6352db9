use super::Axis;
use crate::constants::MINUTES_PER_UNIT;

/// Format a value as `±DD:MM:SS` with whole seconds.
///
/// The value is formatted as given: pass hours for right ascension. Negative
/// values get `-`; non-negative declinations get `+`; non-negative right
/// ascensions get no sign. A rounded-up 60 seconds carries into the minutes.
/// Non-finite input gives an empty string.
///
/// ```
/// use pulsar_core::angle::{format_sexagesimal, Axis};
///
/// assert_eq!(format_sexagesimal(8.5, Axis::RightAscension), "08:30:00");
/// assert_eq!(format_sexagesimal(-45.17639, Axis::Declination), "-45:10:35");
/// assert_eq!(format_sexagesimal(12.2, Axis::Declination), "+12:12:00");
/// ```
pub fn format_sexagesimal(value: f64, axis: Axis) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let absolute = value.abs();
    let mut units = libm::floor(absolute);
    let fraction_minutes = (absolute - units) * MINUTES_PER_UNIT;
    let mut minutes = libm::floor(fraction_minutes);
    let mut seconds = libm::round((fraction_minutes - minutes) * MINUTES_PER_UNIT);

    if seconds >= MINUTES_PER_UNIT {
        seconds -= MINUTES_PER_UNIT;
        minutes += 1.0;
    }
    if minutes >= MINUTES_PER_UNIT {
        minutes -= MINUTES_PER_UNIT;
        units += 1.0;
    }

    let sign = if value < 0.0 {
        "-"
    } else if axis.is_right_ascension() {
        ""
    } else {
        "+"
    };

    format!("{sign}{units:02.0}:{minutes:02.0}:{seconds:02.0}")
}
