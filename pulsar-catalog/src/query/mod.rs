//! Matching candidates against the known-pulsar catalogue.
//!
//! - [`catalogue`]: decode catalogue rows, build the [`CatalogueIndex`]
//! - [`params`]: [`MatchParams`]: harmonic list, DM band, angular cut and weight
//! - [`matcher`]: harmonic and DM scoring, shortlist ranking

pub mod catalogue;
pub mod matcher;
pub mod params;

pub use catalogue::{CatalogueEntry, CatalogueIndex};
pub use matcher::{nearest_harmonic, shortlist, MatchScorer, PulsarMatch};
pub use params::{MatchParams, DEFAULT_HARMONICS};
