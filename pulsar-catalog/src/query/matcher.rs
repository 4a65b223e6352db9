//! Ranking known pulsars against a candidate.
//!
//! Every catalogue entry is scored on three dimensionless terms, lower is
//! better:
//!
//! ```text
//! score = |DMc/DMp - 1|                        DM mismatch
//!       + min_h |(Pc/Pp)/h - 1|                distance to nearest harmonic h
//!       + separation_deg / angular_weight      only when both positions are known
//! ```
//!
//! Before ranking, an entry must pass a hard gate: the DM ratio lies inside
//! the admissible band and, if the separation is known, it is within the
//! angular cut. Unknown positions neither gate nor penalise an entry.
//!
//! The catalogue is scanned in full for every query; it is small enough that
//! no spatial index is needed.

use pulsar_core::angle::separation_between;
use pulsar_core::{Candidate, Position};
use tracing::debug;

use super::catalogue::{CatalogueEntry, CatalogueIndex};
use super::params::MatchParams;

/// One shortlisted catalogue entry, annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PulsarMatch<'a> {
    pub entry: &'a CatalogueEntry,
    /// Candidate period over catalogue period.
    pub ratio_cp: f64,
    /// Catalogue period over candidate period.
    pub ratio_pc: f64,
    /// Candidate DM over catalogue DM.
    pub ratio_dm: f64,
    /// Harmonic ratio closest to `ratio_cp`.
    pub best_harmonic: f64,
    /// `|ratio_cp / best_harmonic - 1|`.
    pub harmonic_distance: f64,
    /// Separation in degrees; `None` when either position is unknown.
    pub angular_distance: Option<f64>,
    pub score: f64,
    /// Period ratio within tolerance of its harmonic target.
    pub period_close: bool,
    /// DM ratio within tolerance of 1.
    pub dm_close: bool,
}

/// Candidate quantities the scorer needs, read once per query.
#[derive(Debug, Clone, Copy)]
struct Probe {
    period: f64,
    dm: f64,
    position: Option<Position>,
}

impl Probe {
    fn from_candidate(candidate: &Candidate) -> Option<Self> {
        let period = candidate.period().filter(|p| p.is_finite())?;
        let dm = candidate.dm().filter(|d| d.is_finite())?;
        Some(Self {
            period,
            dm,
            position: candidate.position(),
        })
    }
}

/// Harmonic nearest to `ratio` and its fractional distance.
///
/// Ties go to the harmonic listed first. Non-positive harmonics are ignored.
pub fn nearest_harmonic(ratio: f64, harmonics: &[f64]) -> Option<(f64, f64)> {
    if !ratio.is_finite() {
        return None;
    }
    harmonics
        .iter()
        .copied()
        .filter(|h| h.is_finite() && *h > 0.0)
        .map(|h| (h, (ratio / h - 1.0).abs()))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Shortlist of catalogue entries for one candidate, best first.
///
/// Empty when the candidate has no positive spin frequency or no DM, or when
/// the catalogue is empty.
pub fn shortlist<'a>(
    index: &'a CatalogueIndex,
    candidate: &Candidate,
    params: &MatchParams,
) -> Vec<PulsarMatch<'a>> {
    let Some(probe) = Probe::from_candidate(candidate) else {
        debug!(
            png_file = candidate.png_file(),
            "candidate lacks frequency or DM, no matches"
        );
        return Vec::new();
    };

    let mut matches: Vec<PulsarMatch<'a>> = index
        .iter()
        .filter_map(|entry| score_entry(&probe, entry, params))
        .collect();

    matches.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(params.max_results);

    debug!(
        png_file = candidate.png_file(),
        matches = matches.len(),
        "candidate scored"
    );
    matches
}

fn score_entry<'a>(
    probe: &Probe,
    entry: &'a CatalogueEntry,
    params: &MatchParams,
) -> Option<PulsarMatch<'a>> {
    if entry.period() <= 0.0 || entry.dm() <= 0.0 {
        return None;
    }

    let ratio_cp = probe.period / entry.period();
    let ratio_pc = 1.0 / ratio_cp;
    let (best_harmonic, harmonic_distance) = nearest_harmonic(ratio_cp, &params.harmonics)?;
    let ratio_dm = probe.dm / entry.dm();

    let angular_distance = match (probe.position, entry.position()) {
        (Some(_), Some(_)) => Some(separation_between(probe.position, entry.position())),
        _ => None,
    };

    if !params.dm_ratio_admissible(ratio_dm) || !params.separation_admissible(angular_distance) {
        return None;
    }

    let dm_term = (ratio_dm - 1.0).abs();
    let angular_term = angular_distance.map_or(0.0, |sep| sep / params.angular_weight);
    let score = dm_term + harmonic_distance + angular_term;

    Some(PulsarMatch {
        entry,
        ratio_cp,
        ratio_pc,
        ratio_dm,
        best_harmonic,
        harmonic_distance,
        angular_distance,
        score,
        period_close: harmonic_distance <= params.close_tolerance,
        dm_close: dm_term <= params.close_tolerance,
    })
}

/// A catalogue paired with matching parameters.
#[derive(Debug, Clone)]
pub struct MatchScorer<'a> {
    index: &'a CatalogueIndex,
    params: MatchParams,
}

impl<'a> MatchScorer<'a> {
    pub fn new(index: &'a CatalogueIndex) -> Self {
        Self::with_params(index, MatchParams::default())
    }

    pub fn with_params(index: &'a CatalogueIndex, params: MatchParams) -> Self {
        Self { index, params }
    }

    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    pub fn shortlist(&self, candidate: &Candidate) -> Vec<PulsarMatch<'a>> {
        shortlist(self.index, candidate, &self.params)
    }

    /// Shortlist for each candidate, in input order.
    pub fn score_all<'c, I>(&self, candidates: I) -> Vec<Vec<PulsarMatch<'a>>>
    where
        I: IntoIterator<Item = &'c Candidate>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.shortlist(candidate))
            .collect()
    }
}
