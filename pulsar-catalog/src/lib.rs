//! Known-pulsar catalogue and candidate matching.
//!
//! Loads a catalogue of known pulsars into an in-memory index and ranks, for
//! any candidate, the entries it is most plausibly a detection of. A
//! candidate can be a harmonic of a known pulsar, so period ratios are tested
//! against a fixed harmonic set rather than against 1 alone.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`query::catalogue`] | [`CatalogueIndex`](query::CatalogueIndex), [`CatalogueEntry`](query::CatalogueEntry), row decoding |
//! | [`query::params`] | [`MatchParams`](query::MatchParams) tuning, [`DEFAULT_HARMONICS`](query::DEFAULT_HARMONICS) |
//! | [`query::matcher`] | [`MatchScorer`](query::MatchScorer), [`PulsarMatch`](query::PulsarMatch), harmonic search |
//! | [`targets`] | Survey targets and [`nearest_target`](targets::nearest_target) |
//!
//! # Quick Start
//!
//! ```
//! use pulsar_catalog::query::{CatalogueEntry, CatalogueIndex, MatchScorer};
//! use pulsar_core::{Candidate, Row};
//!
//! let index = CatalogueIndex::from_entries([
//!     CatalogueEntry::new("J0437-4715", 0.005757, 2.64, None).unwrap(),
//! ]);
//! let candidate = Candidate::from_row(Row::from_iter([
//!     ("f0_new", 86.84),
//!     ("dm_new", 2.7),
//! ]));
//!
//! let matches = MatchScorer::new(&index).shortlist(&candidate);
//! assert_eq!(matches[0].entry.name(), "J0437-4715");
//! assert_eq!(matches[0].best_harmonic, 2.0);
//! ```
//!
//! # Features
//!
//! - **`serde`** (default): `MatchParams` deserialisation, `CatalogueEntry`
//!   serialisation.
//! - **`cli`**: Enables the `pulsar-triage` binary.

pub mod query;
pub mod targets;
