use anyhow::Context;
use pulsar_core::angle::{parse_identifier, try_parse_coordinate};
use pulsar_core::{Axis, Position};

use crate::cli::ParseArgs;

pub fn run(args: &ParseArgs) -> anyhow::Result<()> {
    let position = match &args.dec {
        Some(dec) => parse_position(&args.value, dec)?,
        None => parse_identifier(&args.value)
            .with_context(|| format!("'{}' is not a J/B pulsar identifier", args.value))?,
    };
    print_position(&position);
    Ok(())
}

pub fn parse_position(ra: &str, dec: &str) -> anyhow::Result<Position> {
    let ra_deg = try_parse_coordinate(ra, Axis::RightAscension)
        .with_context(|| format!("Cannot parse RA '{}'", ra))?;
    let dec_deg = try_parse_coordinate(dec, Axis::Declination)
        .with_context(|| format!("Cannot parse Dec '{}'", dec))?;
    Ok(Position::new(ra_deg, dec_deg)?)
}

pub fn print_position(position: &Position) {
    let (ra, dec) = position.to_sexagesimal();
    println!("RA  = {:>11.6}°  {}", position.ra(), ra);
    println!("Dec = {:>+11.6}°  {}", position.dec(), dec);
}
