//! Coordinate handling as the catalogue and review crates consume it.

use pulsar_core::angle::{
    angular_separation, format_sexagesimal, parse_coordinate_str, parse_identifier,
    separation_between,
};
use pulsar_core::{Axis, Candidate, Position, Row};

const EPSILON: f64 = 1e-6;

#[test]
fn identifiers_resolve_to_positions() {
    let vela = parse_identifier("J0835-4510").unwrap();
    assert!((vela.ra() - 128.75).abs() < EPSILON);
    assert!((vela.dec() - (-(45.0 + 10.0 / 60.0))).abs() < EPSILON);

    assert!(parse_identifier("nonsense").is_none());
}

#[test]
fn separation_properties() {
    assert!(angular_separation(0.0, 0.0, 0.0, 0.0).abs() < EPSILON);
    assert!((angular_separation(0.0, 0.0, 180.0, 0.0) - 180.0).abs() < EPSILON);

    let pairs = [
        (10.0, -30.0, 250.0, 45.0),
        (359.9, 89.0, 0.1, -89.0),
        (128.75, -45.17, 83.63, 22.01),
    ];
    for (a, b, c, d) in pairs {
        let forward = angular_separation(a, b, c, d);
        let backward = angular_separation(c, d, a, b);
        assert!((forward - backward).abs() < EPSILON, "{a},{b} / {c},{d}");
        assert!((0.0..=180.0).contains(&forward));
    }

    let p = Position::new(10.0, 10.0).unwrap();
    assert!(separation_between(Some(p), None).is_infinite());
    assert!(separation_between(Some(p), Some(p)).abs() < EPSILON);
}

#[test]
fn parsed_strings_format_back() {
    let ra = parse_coordinate_str("12:30:00", Axis::RightAscension);
    let dec = parse_coordinate_str("-45:10:35", Axis::Declination);
    assert!((ra - 187.5).abs() < EPSILON);

    assert_eq!(format_sexagesimal(ra / 15.0, Axis::RightAscension), "12:30:00");
    assert_eq!(format_sexagesimal(dec, Axis::Declination), "-45:10:35");

    assert!((parse_coordinate_str("45 10 35", Axis::Declination) - 45.0).abs() < EPSILON);
    assert!(parse_coordinate_str("north", Axis::Declination).is_nan());
}

#[test]
fn candidate_position_from_columns() {
    let row = Row::from_iter([
        ("png_file", "c.png"),
        ("ra", "05:34:31.9"),
        ("dec", "+22:00:52"),
    ]);
    let position = Candidate::from_row(row).position().unwrap();
    assert!((position.ra() - 83.633).abs() < 0.01);
    assert!((position.dec() - 22.0144).abs() < 0.01);

    let (ra, dec) = position.to_sexagesimal();
    assert_eq!(ra, "05:34:32");
    assert_eq!(dec, "+22:00:52");
}
