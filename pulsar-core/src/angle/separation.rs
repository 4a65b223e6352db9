use super::Position;
use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Great-circle distance between two points, in degrees.
///
/// Spherical law of cosines. The cosine is clamped to `[-1, 1]` before
/// `acos` so rounding near 0° and 180° cannot produce `NaN`. Any `NaN` input
/// means an unknown position and yields `+∞`, never zero.
pub fn angular_separation(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    if [ra1_deg, dec1_deg, ra2_deg, dec2_deg]
        .iter()
        .any(|v| v.is_nan())
    {
        return f64::INFINITY;
    }

    let d1 = dec1_deg * DEG_TO_RAD;
    let d2 = dec2_deg * DEG_TO_RAD;
    let delta_ra = (ra1_deg - ra2_deg) * DEG_TO_RAD;

    let cos_sep = libm::sin(d1) * libm::sin(d2) + libm::cos(d1) * libm::cos(d2) * libm::cos(delta_ra);
    libm::acos(cos_sep.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

/// Separation between two optional positions; `+∞` if either is unknown.
pub fn separation_between(a: Option<Position>, b: Option<Position>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.separation_to(&b),
        _ => f64::INFINITY,
    }
}
