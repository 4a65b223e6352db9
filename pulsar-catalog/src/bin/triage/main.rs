//! pulsar-triage: candidate matching from the command line
//!
//! Reads candidate and catalogue tables as JSON arrays of row objects (the
//! shape a CSV reader produces), scores every candidate and prints the
//! shortlists.

mod cli;
mod match_candidates;
mod parse;
mod targets;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Match(args) => match_candidates::run(args),
        Commands::Parse(args) => parse::run(args),
        Commands::Targets(args) => targets::run(args),
    }
}
