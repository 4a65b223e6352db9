//! CLI argument definitions for pulsar-triage

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulsar-triage")]
#[command(about = "Match pulsar search candidates against a known-pulsar catalogue")]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalogue pulsars for every candidate in a file
    Match(MatchArgs),

    /// Decode a pulsar identifier or an RA/Dec pair
    Parse(ParseArgs),

    /// Find the nearest survey target to a position
    Targets(TargetsArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// JSON array of candidate rows
    #[arg(long)]
    pub candidates: PathBuf,

    /// JSON array of catalogue rows
    #[arg(long)]
    pub catalogue: PathBuf,

    /// JSON file overriding matching parameters
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Matches shown per candidate (overrides the params file)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Identifier (J0835-4510) or right ascension
    pub value: String,

    /// Declination; when given, VALUE is read as right ascension
    pub dec: Option<String>,
}

#[derive(Parser)]
pub struct TargetsArgs {
    /// Right ascension (degrees, 08:35:20.6 or 8h35m20.6s)
    pub ra: Option<String>,

    /// Declination (degrees, -45:10:35 or -45d10m35s)
    pub dec: Option<String>,

    /// Search radius in degrees
    #[arg(long, default_value = "1.0")]
    pub radius: f64,
}
