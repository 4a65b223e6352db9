//! Positions encoded in pulsar names.
//!
//! IAU-style names pack the position into the identifier:
//!
//! ```text
//! J0835-4510     RA 08h35m,     Dec -45°10'
//! J1939+2134     RA 19h39m,     Dec +21°34'
//! J0024-7204ab   RA 00h24m,     Dec -72°04'   (trailing letters ignored)
//! J053747.4-691019  RA 05h37m47.4s, Dec -69°10'19"
//! ```
//!
//! Digits are read by position: two for the hour (or degree), two for the
//! minute, and whatever follows as seconds. The sign is the only reliable
//! delimiter between the two halves, so it is mandatory.

use super::Position;
use crate::constants::{DEGREES_PER_HOUR, MINUTES_PER_UNIT, SECONDS_PER_UNIT};

/// Decode the position carried by an identifier such as `J0835-4510`.
///
/// A leading `J` or `B` is dropped. Returns `None` if the cleaned name is
/// shorter than four characters, has no `+`/`-`, or if the leading
/// hour/degree/minute digits are not integers.
pub fn parse_identifier(name: &str) -> Option<Position> {
    let clean = strip_prefix(name.trim()).trim();
    if clean.chars().count() < 4 {
        return None;
    }

    let sign_idx = clean.find(['+', '-'])?;
    let (ra_part, rest) = clean.split_at(sign_idx);
    let sign = if rest.starts_with('-') { -1.0 } else { 1.0 };
    let dec_part = &rest[1..];

    let ra_hours = sexagesimal_fields(ra_part)?;
    let dec_degrees = sexagesimal_fields(dec_part)?;

    Position::new(ra_hours * DEGREES_PER_HOUR, sign * dec_degrees).ok()
}

fn strip_prefix(s: &str) -> &str {
    match s.chars().next() {
        Some('J' | 'j' | 'B' | 'b') => &s[1..],
        _ => s,
    }
}

/// `UU[MM][SS.s...]` as a decimal number of units.
fn sexagesimal_fields(s: &str) -> Option<f64> {
    let (units, rest) = split_chars(s, 2);
    let (minutes, seconds) = split_chars(rest, 2);

    let units = parse_integer(units)?;
    let minutes = if minutes.is_empty() {
        0.0
    } else {
        parse_integer(minutes)?
    };
    let seconds = leading_float(seconds).unwrap_or(0.0);

    Some(units + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT)
}

fn parse_integer(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().map(f64::from)
}

fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}

/// Longest numeric prefix (`12.5ab` gives 12.5); `None` if there is none.
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}
