//! Sky positions: decoding, separation and sexagesimal display.
//!
//! All public values are decimal degrees. Right ascension is wrapped into
//! `[0, 360)`, declination must lie in `[-90, 90]`.
//!
//! ```
//! use pulsar_core::angle::{parse_identifier, Position};
//!
//! let vela = parse_identifier("J0835-4510").unwrap();
//! assert!((vela.ra() - 128.75).abs() < 1e-9);
//! assert!((vela.dec() + 45.1666).abs() < 1e-3);
//!
//! let origin = Position::new(0.0, 0.0).unwrap();
//! assert!(origin.separation_to(&vela) > 0.0);
//! ```
//!
//! Parsers come in two forms. The sentinel forms ([`parse_identifier`],
//! [`parse_coordinate`]) never fail loudly: `None` or `NaN` mean "unknown".
//! [`try_parse_coordinate`] carries a [`TriageError`](crate::TriageError) for
//! callers that want to report what went wrong.

mod format;
mod identifier;
mod parse;
mod separation;

pub use format::format_sexagesimal;
pub use identifier::parse_identifier;
pub use parse::{parse_coordinate, parse_coordinate_str, try_parse_coordinate};
pub use separation::{angular_separation, separation_between};

use crate::constants::{DEGREES_PER_HOUR, FULL_CIRCLE_DEG};
use crate::{TriageError, TriageResult};

/// Which celestial axis a value belongs to.
///
/// Right ascension is conventionally written in hours, so sexagesimal and
/// `h`-qualified forms are scaled by 15 when the axis is RA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    RightAscension,
    Declination,
}

impl Axis {
    pub fn is_right_ascension(self) -> bool {
        self == Self::RightAscension
    }
}

/// A position on the celestial sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    ra: f64,
    dec: f64,
}

impl Position {
    /// Build a position, wrapping RA into `[0, 360)`.
    ///
    /// # Errors
    /// Non-finite input, or declination outside `[-90, 90]`.
    pub fn new(ra_deg: f64, dec_deg: f64) -> TriageResult<Self> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(TriageError::calculation(
                "Position::new",
                "coordinates must be finite",
            ));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(TriageError::calculation(
                "Position::new",
                &format!("Dec {:.4}° out of range [-90°, +90°]", dec_deg),
            ));
        }
        Ok(Self {
            ra: ra_deg.rem_euclid(FULL_CIRCLE_DEG),
            dec: dec_deg,
        })
    }

    pub fn ra(&self) -> f64 {
        self.ra
    }

    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Great-circle distance to `other`, in degrees.
    pub fn separation_to(&self, other: &Position) -> f64 {
        angular_separation(self.ra, self.dec, other.ra, other.dec)
    }

    /// `("HH:MM:SS", "±DD:MM:SS")`, RA expressed in hours.
    pub fn to_sexagesimal(&self) -> (String, String) {
        (
            format_sexagesimal(self.ra / DEGREES_PER_HOUR, Axis::RightAscension),
            format_sexagesimal(self.dec, Axis::Declination),
        )
    }
}
