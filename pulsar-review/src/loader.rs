//! Building a session from decoded candidate rows and resolved images.
//!
//! Rows are paired with images by the basename of their `png_file` column.
//! Rows without a match are dropped here and never reach the session.
//!
//! If any surviving row already carries a label, loading stops at
//! [`LoadOutcome::NeedsDecision`]: the caller must ask the operator whether to
//! keep those labels or clear them before a session exists.
//!
//! ```
//! use pulsar_core::Row;
//! use pulsar_review::{ExistingClassifications, LoadOutcome, SessionLoader};
//!
//! let rows = vec![Row::from_iter([
//!     ("png_file", "plots/c1.png"),
//!     ("classification", "Tier 1"),
//! ])];
//! let images = [("c1.png".to_string(), 7u32)];
//!
//! let session = match SessionLoader::new(rows, images).load().unwrap() {
//!     LoadOutcome::Ready(session) => session,
//!     LoadOutcome::NeedsDecision(pending) => pending.resolve(ExistingClassifications::Keep),
//! };
//! assert_eq!(session.len(), 1);
//! assert_eq!(*session.current().unwrap().image(), 7);
//! ```

use std::collections::HashMap;

use pulsar_core::{Candidate, Classification, Row, TriageError, TriageResult};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::item::{normalized_basename, CandidateId, ReviewItem};
use crate::session::ReviewSession;

/// The operator's answer when loaded rows already carry classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingClassifications {
    Keep,
    /// Reset every item to `Unclassified`.
    Clear,
}

/// Result of a successful load.
#[derive(Debug)]
pub enum LoadOutcome<I> {
    Ready(ReviewSession<I>),
    NeedsDecision(PendingSession<I>),
}

impl<I> LoadOutcome<I> {
    /// Apply `choice` if a decision is pending; a ready session is returned
    /// unchanged.
    pub fn resolve_with(self, choice: ExistingClassifications) -> ReviewSession<I> {
        match self {
            Self::Ready(session) => session,
            Self::NeedsDecision(pending) => pending.resolve(choice),
        }
    }

    pub fn needs_decision(&self) -> bool {
        matches!(self, Self::NeedsDecision(_))
    }
}

/// Paired items waiting on the keep-or-clear decision.
#[derive(Debug)]
pub struct PendingSession<I> {
    items: Vec<ReviewItem<I>>,
    config: SessionConfig,
    existing: usize,
}

impl<I> PendingSession<I> {
    /// Items whose source row carried a label other than `Unclassified`.
    pub fn existing(&self) -> usize {
        self.existing
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn resolve(mut self, choice: ExistingClassifications) -> ReviewSession<I> {
        if choice == ExistingClassifications::Clear {
            for item in &mut self.items {
                item.set_classification(Classification::Unclassified);
            }
        }
        info!(?choice, existing = self.existing, "existing classifications resolved");
        ReviewSession::new(self.items, self.config)
    }
}

/// A non-blank label other than `Unclassified`. Unrecognised labels count,
/// so nothing the operator wrote is discarded without asking; keeping them
/// exports the original text unchanged.
fn carries_label<I>(item: &ReviewItem<I>) -> bool {
    item.candidate()
        .existing_classification()
        .is_some_and(|value| {
            value.to_text().parse::<Classification>().ok() != Some(Classification::Unclassified)
        })
}

/// Pairs candidate rows with image handles.
#[derive(Debug, Clone)]
pub struct SessionLoader<I> {
    rows: Vec<Row>,
    images: HashMap<String, I>,
    config: SessionConfig,
}

impl<I: Clone> SessionLoader<I> {
    /// `images` maps file names (or paths; only the basename is used) to
    /// handles.
    pub fn new<R, M, K>(rows: R, images: M) -> Self
    where
        R: IntoIterator<Item = Row>,
        M: IntoIterator<Item = (K, I)>,
        K: AsRef<str>,
    {
        Self {
            rows: rows.into_iter().collect(),
            images: images
                .into_iter()
                .map(|(key, image)| (normalized_basename(key.as_ref()).to_string(), image))
                .collect(),
            config: SessionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// # Errors
    /// [`TriageError::NoMatchingImages`] when no row pairs with an image.
    pub fn load(self) -> TriageResult<LoadOutcome<I>> {
        let total = self.rows.len();
        let mut items = Vec::with_capacity(total);

        for (row_index, row) in self.rows.into_iter().enumerate() {
            let candidate = Candidate::from_row(row);
            let image = candidate
                .png_file()
                .and_then(|png| self.images.get(normalized_basename(png)));
            match image {
                Some(image) => {
                    let id = CandidateId::new(items.len());
                    items.push(ReviewItem::new(id, candidate, image.clone()));
                }
                None => debug!(
                    row = row_index,
                    png_file = candidate.png_file(),
                    "no image for candidate row, dropped"
                ),
            }
        }

        if items.is_empty() {
            return Err(TriageError::NoMatchingImages { rows: total });
        }
        let dropped = total - items.len();
        if dropped > 0 {
            warn!(dropped, kept = items.len(), "candidate rows without images");
        }

        let existing = items.iter().filter(|item| carries_label(item)).count();
        info!(items = items.len(), existing, "candidates loaded");

        if existing > 0 {
            Ok(LoadOutcome::NeedsDecision(PendingSession {
                items,
                config: self.config,
                existing,
            }))
        } else {
            Ok(LoadOutcome::Ready(ReviewSession::new(items, self.config)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_core::FieldValue;

    fn row(png: &str, class: Option<&str>) -> Row {
        let mut row = Row::from_iter([("png_file", png)]);
        if let Some(class) = class {
            row.insert("classification", class);
        }
        row
    }

    fn images(names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|n| (n.to_string(), format!("handle:{n}")))
            .collect()
    }

    #[test]
    fn test_pairs_by_basename_and_drops_unmatched() {
        let rows = vec![
            row("plots/a.png", None),
            row(r"C:\plots\b.png", None),
            row("plots/missing.png", None),
            Row::from_iter([("f0_new", 1.0)]),
        ];
        let outcome = SessionLoader::new(rows, images(&["a.png", "dir/b.png"]))
            .load()
            .unwrap();
        let LoadOutcome::Ready(session) = outcome else {
            panic!("expected a ready session");
        };
        assert_eq!(session.len(), 2);
        assert_eq!(session.items()[0].image(), "handle:a.png");
        assert_eq!(session.items()[1].image(), "handle:dir/b.png");
        assert_eq!(session.items()[1].id(), CandidateId::new(1));
    }

    #[test]
    fn test_no_matching_images_is_an_error() {
        let err = SessionLoader::new(vec![row("a.png", None)], images(&["b.png"]))
            .load()
            .unwrap_err();
        assert_eq!(err, TriageError::NoMatchingImages { rows: 1 });
    }

    #[test]
    fn test_blank_classifications_do_not_trigger_gate() {
        let rows = vec![row("a.png", Some("")), row("b.png", Some("  "))];
        let outcome = SessionLoader::new(rows, images(&["a.png", "b.png"]))
            .load()
            .unwrap();
        assert!(!outcome.needs_decision());
    }

    #[test]
    fn test_existing_classifications_keep() {
        let rows = vec![row("a.png", Some("Noise")), row("b.png", Some(""))];
        let outcome = SessionLoader::new(rows, images(&["a.png", "b.png"]))
            .load()
            .unwrap();
        let LoadOutcome::NeedsDecision(pending) = outcome else {
            panic!("expected a pending decision");
        };
        assert_eq!(pending.existing(), 1);
        let session = pending.resolve(ExistingClassifications::Keep);
        assert_eq!(session.items()[0].classification(), Classification::Noise);
        assert_eq!(session.items()[1].classification(), Classification::Unclassified);
    }

    #[test]
    fn test_existing_classifications_clear() {
        let rows = vec![row("a.png", Some("Noise")), row("b.png", Some("RFI"))];
        let session = SessionLoader::new(rows, images(&["a.png", "b.png"]))
            .load()
            .unwrap()
            .resolve_with(ExistingClassifications::Clear);
        assert!(session
            .items()
            .iter()
            .all(|item| item.classification() == Classification::Unclassified));
        // the original row still holds the old label
        assert_eq!(
            session.items()[0].candidate().original_row().get("classification"),
            Some(&FieldValue::from("Noise"))
        );
        assert_eq!(
            session.export()[0].get("classification"),
            Some(&FieldValue::from("Unclassified"))
        );
    }

    #[test]
    fn test_unclassified_label_does_not_trigger_gate() {
        let rows = vec![row("a.png", Some("Unclassified")), row("b.png", Some("unclassified"))];
        let outcome = SessionLoader::new(rows, images(&["a.png", "b.png"]))
            .load()
            .unwrap();
        assert!(!outcome.needs_decision());
    }

    #[test]
    fn test_unknown_label_still_asks() {
        let rows = vec![row("a.png", Some("maybe pulsar"))];
        let outcome = SessionLoader::new(rows, images(&["a.png"])).load().unwrap();
        assert!(outcome.needs_decision());
    }

    #[test]
    fn test_keep_exports_loaded_labels_unchanged() {
        let rows = vec![
            row("a.png", Some("maybe pulsar")),
            row("b.png", Some("noise")),
            row("c.png", None),
        ];
        let session = SessionLoader::new(rows, images(&["a.png", "b.png", "c.png"]))
            .load()
            .unwrap()
            .resolve_with(ExistingClassifications::Keep);
        assert_eq!(session.items()[0].classification(), Classification::Unclassified);
        assert_eq!(session.items()[1].classification(), Classification::Noise);

        let labels: Vec<_> = session
            .export()
            .iter()
            .map(|r| r.get("classification").cloned())
            .collect();
        assert_eq!(
            labels,
            [
                Some(FieldValue::from("maybe pulsar")),
                Some(FieldValue::from("noise")),
                Some(FieldValue::from("Unclassified")),
            ]
        );
    }

    #[test]
    fn test_relabelling_a_kept_unknown_label_replaces_it() {
        let rows = vec![row("a.png", Some("maybe pulsar"))];
        let mut session = SessionLoader::new(rows, images(&["a.png"]))
            .load()
            .unwrap()
            .resolve_with(ExistingClassifications::Keep);
        session.classify_current(Classification::Tier2, std::time::Instant::now());
        assert_eq!(
            session.export()[0].get("classification"),
            Some(&FieldValue::from("Tier 2"))
        );
    }

    #[test]
    fn test_config_carried_through() {
        let session = SessionLoader::new(vec![row("a.png", None)], images(&["a.png"]))
            .with_config(SessionConfig::without_auto_advance())
            .load()
            .unwrap()
            .resolve_with(ExistingClassifications::Keep);
        assert_eq!(session.config().auto_advance_delay, None);
    }
}
