use pulsar_catalog::targets::{nearest_target, targets};

use crate::cli::TargetsArgs;
use crate::parse::{parse_position, print_position};

pub fn run(args: &TargetsArgs) -> anyhow::Result<()> {
    let (ra, dec) = match (&args.ra, &args.dec) {
        (Some(ra), Some(dec)) => (ra, dec),
        (None, None) => {
            for t in targets() {
                println!("{:<30} {:>11} {:>10}", t.name, t.ra, t.dec);
            }
            return Ok(());
        }
        _ => anyhow::bail!("Give both RA and Dec, or neither to list all targets"),
    };

    let position = parse_position(ra, dec)?;
    print_position(&position);
    match nearest_target(position, args.radius) {
        Some((target, sep)) => println!("Nearest target: {} ({:.3}° away)", target.name, sep),
        None => println!("No survey target within {}°", args.radius),
    }
    Ok(())
}
