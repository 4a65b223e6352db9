use anyhow::Context;
use pulsar_catalog::query::{CatalogueIndex, MatchParams, MatchScorer, PulsarMatch};
use pulsar_core::{Candidate, Row};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::cli::{MatchArgs, OutputFormat};

pub fn run(args: &MatchArgs) -> anyhow::Result<()> {
    let candidate_rows = read_rows(&args.candidates)?;
    let catalogue_rows = read_rows(&args.catalogue)?;

    let mut params = match &args.params {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open params file {}", path.display()))?;
            serde_json::from_reader::<_, MatchParams>(BufReader::new(file))
                .with_context(|| format!("Invalid params file {}", path.display()))?
        }
        None => MatchParams::default(),
    };
    if let Some(limit) = args.limit {
        params = params.with_max_results(limit);
    }

    let index = CatalogueIndex::from_rows(catalogue_rows);
    if index.is_empty() {
        anyhow::bail!(
            "Catalogue {} has no usable entries",
            args.catalogue.display()
        );
    }

    let candidates: Vec<Candidate> = candidate_rows.into_iter().map(Candidate::from_row).collect();
    let scorer = MatchScorer::with_params(&index, params);
    let shortlists = scorer.score_all(&candidates);
    info!(
        candidates = candidates.len(),
        catalogue = index.len(),
        "matching complete"
    );

    match args.format {
        OutputFormat::Table => print_table(&candidates, &shortlists),
        OutputFormat::Json => print_json(&candidates, &shortlists)?,
    }
    Ok(())
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a JSON array of rows", path.display()))
}

fn label(candidate: &Candidate, i: usize) -> String {
    candidate
        .png_file()
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", i + 1))
}

fn mark(close: bool) -> &'static str {
    if close {
        "*"
    } else {
        " "
    }
}

fn print_table(candidates: &[Candidate], shortlists: &[Vec<PulsarMatch<'_>>]) {
    for (i, (candidate, matches)) in candidates.iter().zip(shortlists).enumerate() {
        let period = candidate
            .period_ms()
            .map_or("-".to_string(), |p| format!("{:.4} ms", p));
        let dm = candidate.dm().map_or("-".to_string(), |d| format!("{:.2}", d));
        println!("{}  P={} DM={}", label(candidate, i), period, dm);

        if matches.is_empty() {
            println!("    no catalogue matches");
            continue;
        }
        for (rank, m) in matches.iter().enumerate() {
            let sep = m
                .angular_distance
                .map_or("-".to_string(), |s| format!("{:.2}°", s));
            println!(
                "  {:2}: {:<14} P/Pc={:8.4}{} (h={:.3}) DM/DMc={:6.3}{} Sep={:>8} Score={:.4}",
                rank + 1,
                m.entry.name(),
                m.ratio_cp,
                mark(m.period_close),
                m.best_harmonic,
                m.ratio_dm,
                mark(m.dm_close),
                sep,
                m.score
            );
        }
    }
}

#[derive(serde::Serialize)]
struct JsonMatch<'a> {
    name: &'a str,
    period_s: f64,
    dm: f64,
    ratio_cp: f64,
    ratio_pc: f64,
    ratio_dm: f64,
    best_harmonic: f64,
    harmonic_distance: f64,
    angular_distance_deg: Option<f64>,
    score: f64,
    period_close: bool,
    dm_close: bool,
}

#[derive(serde::Serialize)]
struct JsonCandidate<'a> {
    candidate: String,
    period_s: Option<f64>,
    dm: Option<f64>,
    matches: Vec<JsonMatch<'a>>,
}

fn print_json(
    candidates: &[Candidate],
    shortlists: &[Vec<PulsarMatch<'_>>],
) -> anyhow::Result<()> {
    let out: Vec<JsonCandidate<'_>> = candidates
        .iter()
        .zip(shortlists)
        .enumerate()
        .map(|(i, (candidate, matches))| JsonCandidate {
            candidate: label(candidate, i),
            period_s: candidate.period(),
            dm: candidate.dm(),
            matches: matches
                .iter()
                .map(|m| JsonMatch {
                    name: m.entry.name(),
                    period_s: m.entry.period(),
                    dm: m.entry.dm(),
                    ratio_cp: m.ratio_cp,
                    ratio_pc: m.ratio_pc,
                    ratio_dm: m.ratio_dm,
                    best_harmonic: m.best_harmonic,
                    harmonic_distance: m.harmonic_distance,
                    angular_distance_deg: m.angular_distance,
                    score: m.score,
                    period_close: m.period_close,
                    dm_close: m.dm_close,
                })
                .collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
