//! Survey targets: nearby dwarf galaxies and pulsar-rich globular clusters.
//!
//! Coordinates are kept as catalogue strings (RA in hours, Dec in degrees)
//! and decoded on demand with the same parser candidate files go through.

use pulsar_core::angle::parse_coordinate_str;
use pulsar_core::{Axis, Position};

/// A named pointing of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub name: &'static str,
    pub ra: &'static str,
    pub dec: &'static str,
}

impl Target {
    pub fn position(&self) -> Option<Position> {
        Position::new(
            parse_coordinate_str(self.ra, Axis::RightAscension),
            parse_coordinate_str(self.dec, Axis::Declination),
        )
        .ok()
    }
}

const fn target(name: &'static str, ra: &'static str, dec: &'static str) -> Target {
    Target { name, ra, dec }
}

static TARGETS: [Target; 31] = [
    // dwarf galaxies
    target("LMC (Large Magellanic Cloud)", "05:23:34.5", "-69:45:22"),
    target("SMC (Small Magellanic Cloud)", "00:52:44.8", "-72:11:01"),
    // globular clusters
    target("47 Tuc (NGC 104)", "00:24:05.7", "-72:04:53"),
    target("Omega Cen (NGC 5139)", "13:26:47.2", "-47:28:46"),
    target("M15 (NGC 7078)", "21:29:58.3", "+12:10:01"),
    target("M13 (NGC 6205)", "16:41:41.2", "+36:27:36"),
    target("Terzan 5", "17:48:04.9", "-24:46:45"),
    target("M28 (NGC 6626)", "18:24:32.9", "-24:52:11"),
    target("M62 (NGC 6266)", "17:01:12.6", "-30:06:45"),
    target("NGC 6397", "17:40:41.4", "-53:40:25"),
    target("NGC 6752", "19:10:51.8", "-59:58:55"),
    target("M3 (NGC 5272)", "13:42:11.2", "+28:22:32"),
    target("M5 (NGC 5904)", "15:18:33.8", "+02:04:58"),
    target("M10 (NGC 6254)", "16:57:09.0", "-04:05:58"),
    target("M12 (NGC 6218)", "16:47:14.5", "-01:56:52"),
    target("M22 (NGC 6656)", "18:36:24.2", "-23:54:12"),
    target("M53 (NGC 5024)", "13:12:55.2", "+18:10:09"),
    target("M55 (NGC 6809)", "19:39:59.4", "-30:57:44"),
    target("M68 (NGC 4590)", "12:39:28.0", "-26:44:35"),
    target("M71 (NGC 6838)", "19:53:46.1", "+18:46:42"),
    target("M75 (NGC 6864)", "20:06:04.8", "-21:55:16"),
    target("M80 (NGC 6093)", "16:17:02.5", "-22:58:30"),
    target("M92 (NGC 6341)", "17:17:07.3", "+43:08:12"),
    target("M4 (NGC 6121)", "16:23:35.4", "-26:31:32"),
    target("NGC 1851", "05:14:06.3", "-40:02:48"),
    target("NGC 362", "01:03:14.3", "-70:50:54"),
    target("NGC 5986", "15:46:03.0", "-37:47:10"),
    target("NGC 6539", "18:04:49.8", "-07:35:09"),
    target("NGC 6544", "18:07:20.6", "-24:59:50"),
    target("NGC 6624", "18:23:40.5", "-30:21:40"),
    target("Liller 1", "17:33:24.5", "-33:23:20"),
];

pub fn targets() -> &'static [Target] {
    &TARGETS
}

/// Closest target within `max_deg` of `position`, with its separation.
pub fn nearest_target(position: Position, max_deg: f64) -> Option<(&'static Target, f64)> {
    TARGETS
        .iter()
        .filter_map(|t| t.position().map(|p| (t, position.separation_to(&p))))
        .filter(|(_, sep)| *sep <= max_deg)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
