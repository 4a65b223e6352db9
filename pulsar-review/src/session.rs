//! The operator's review session.
//!
//! A session owns the backing list of [`ReviewItem`]s in load order and a
//! derived view: the indices of the items that pass the current
//! [`ViewFilter`], ordered by the current [`SortKey`]. `position` always
//! indexes the view, never the backing list.
//!
//! | Operation | View rebuilt | Position |
//! |-----------|--------------|----------|
//! | [`set_filter`](ReviewSession::set_filter), [`set_search`](ReviewSession::set_search) | yes | reset to 0 |
//! | [`set_sort`](ReviewSession::set_sort), [`clear_sort`](ReviewSession::clear_sort) | yes | same index, clamped |
//! | [`classify`](ReviewSession::classify) | yes | clamped, advance scheduled |
//! | [`navigate`](ReviewSession::navigate) | no | moved, clamped |
//! | [`reset`](ReviewSession::reset) | yes | reset to 0 |
//!
//! # Auto-advance
//!
//! Classifying the current item schedules a [`PendingAdvance`] instead of
//! moving at once, so the operator sees the new label before the view moves
//! on. The session owns no timer: the caller passes the current instant to
//! [`tick`](ReviewSession::tick) and the advance is applied once it is due.
//! Every other state change bumps a generation counter, and an advance
//! scheduled under an older generation is dropped rather than applied.

use std::time::Instant;

use pulsar_core::{Classification, Row};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::filter::{ClassFilter, ViewFilter};
use crate::item::{CandidateId, ReviewItem};
use crate::sort::SortKey;
use crate::stats::{ClassCounts, ScatterPoint};

/// A navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Move by this many items; negative moves back.
    Delta(isize),
    First,
    Last,
}

impl Navigation {
    pub const NEXT: Navigation = Navigation::Delta(1);
    pub const PREVIOUS: Navigation = Navigation::Delta(-1);
}

/// A scheduled step forward after a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    target: usize,
    due_at: Instant,
    generation: u64,
}

impl PendingAdvance {
    /// View position the advance will move to.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn due_at(&self) -> Instant {
        self.due_at
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSession<I> {
    items: Vec<ReviewItem<I>>,
    filter: ViewFilter,
    sort: Option<SortKey>,
    view: Vec<usize>,
    position: usize,
    generation: u64,
    pending: Option<PendingAdvance>,
    config: SessionConfig,
}

impl<I> ReviewSession<I> {
    pub(crate) fn new(items: Vec<ReviewItem<I>>, config: SessionConfig) -> Self {
        let mut session = Self {
            items,
            filter: ViewFilter::default(),
            sort: None,
            view: Vec::new(),
            position: 0,
            generation: 0,
            pending: None,
            config,
        };
        session.rebuild_view();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Backing list in load order.
    pub fn items(&self) -> &[ReviewItem<I>] {
        &self.items
    }

    pub fn item(&self, id: CandidateId) -> Option<&ReviewItem<I>> {
        self.items.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- derived view ---

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Items in the current filtered and sorted order.
    pub fn view(&self) -> impl Iterator<Item = &ReviewItem<I>> + '_ {
        self.view.iter().map(move |&i| &self.items[i])
    }

    /// Current view position. Zero when the view is empty.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&ReviewItem<I>> {
        self.view.get(self.position).map(|&i| &self.items[i])
    }

    /// Where `id` sits in the current view, if it is visible.
    pub fn position_of(&self, id: CandidateId) -> Option<usize> {
        self.view.iter().position(|&i| i == id.index())
    }

    /// `"n / total"` for the current view, one-based.
    pub fn counter_label(&self) -> String {
        if self.view.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.position + 1, self.view.len())
        }
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    pub fn pending_advance(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    // --- view changes ---

    pub fn set_filter(&mut self, class: ClassFilter) {
        self.filter.set_class(class);
        self.restart_view();
    }

    /// Case-insensitive substring search on the image file name. Counts as a
    /// filter change.
    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
        self.restart_view();
    }

    /// Re-order the view. The position keeps its index, so the operator may
    /// now be looking at a different item.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
        self.invalidate_advance();
        self.rebuild_view();
    }

    /// Back to load order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.invalidate_advance();
        self.rebuild_view();
    }

    /// Move within the view, clamped to its bounds. Returns the new position.
    pub fn navigate(&mut self, nav: Navigation) -> usize {
        if self.view.is_empty() {
            return self.position;
        }
        self.invalidate_advance();
        let last = self.view.len() - 1;
        self.position = match nav {
            Navigation::First => 0,
            Navigation::Last => last,
            Navigation::Delta(delta) => self.position.saturating_add_signed(delta).min(last),
        };
        self.position
    }

    /// Make `id` the current item.
    ///
    /// When the item is hidden by the filter or search, both are cleared
    /// first so it becomes visible. Returns `false` only for an id that is
    /// not in this session.
    pub fn select_by_identity(&mut self, id: CandidateId) -> bool {
        if id.index() >= self.items.len() {
            return false;
        }
        self.invalidate_advance();
        if self.position_of(id).is_none() {
            debug!(%id, "selected item hidden by filter, clearing it");
            self.filter = ViewFilter::default();
            self.rebuild_view();
        }
        match self.position_of(id) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    // --- classification ---

    /// Label the current item. `None` when the view is empty.
    pub fn classify_current(
        &mut self,
        label: Classification,
        now: Instant,
    ) -> Option<CandidateId> {
        let id = self.current()?.id();
        self.classify(id, label, now);
        Some(id)
    }

    /// Label an item by identity.
    ///
    /// The backing item is updated and the view rebuilt, since the filter
    /// may depend on the label. If the item was current and is still visible
    /// at the same position, an advance to the next position is scheduled
    /// unless it is the last one. If the label moved it out of the view, the
    /// following item has already slid into place and nothing is scheduled.
    pub fn classify(&mut self, id: CandidateId, label: Classification, now: Instant) -> bool {
        let Some(item) = self.items.get_mut(id.index()) else {
            return false;
        };
        item.set_classification(label);
        debug!(%id, label = label.label(), "classified");

        let was_current = self.view.get(self.position) == Some(&id.index());
        self.invalidate_advance();
        self.rebuild_view();

        let still_current = self.view.get(self.position) == Some(&id.index());
        if was_current && still_current && self.position + 1 < self.view.len() {
            if let Some(delay) = self.config.auto_advance_delay {
                self.pending = Some(PendingAdvance {
                    target: self.position + 1,
                    due_at: now + delay,
                    generation: self.generation,
                });
            }
        }
        true
    }

    /// Apply a due auto-advance. Returns `true` if the position moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.generation != self.generation {
            self.pending = None;
            return false;
        }
        if now < pending.due_at {
            return false;
        }
        self.pending = None;
        if pending.target >= self.view.len() {
            return false;
        }
        self.position = pending.target;
        true
    }

    /// Set every item back to `Unclassified`.
    ///
    /// Destructive; callers confirm with the operator before calling.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.set_classification(Classification::Unclassified);
        }
        info!(items = self.items.len(), "all classifications reset");
        self.restart_view();
    }

    // --- outputs ---

    /// Every item's original row with the classification column set to the
    /// current label, in load order. Labels kept at load and never changed
    /// are written back as they were read.
    pub fn export(&self) -> Vec<Row> {
        self.items
            .iter()
            .map(|item| item.candidate().to_export_row())
            .collect()
    }

    pub fn class_counts(&self) -> ClassCounts {
        ClassCounts::tally(&self.items)
    }

    /// Period, DM and S/N of every item in load order.
    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        self.items
            .iter()
            .map(|item| ScatterPoint::of(item.id(), item.candidate()))
            .collect()
    }

    // --- internals ---

    fn restart_view(&mut self) {
        self.invalidate_advance();
        self.position = 0;
        self.rebuild_view();
    }

    fn invalidate_advance(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn rebuild_view(&mut self) {
        let items = &self.items;
        let filter = &self.filter;
        let mut view: Vec<usize> = (0..items.len())
            .filter(|&i| filter.matches(items[i].candidate()))
            .collect();
        if let Some(key) = &self.sort {
            view.sort_by(|&a, &b| key.compare(items[a].candidate(), items[b].candidate()));
        }
        self.view = view;
        self.position = self.position.min(self.view.len().saturating_sub(1));
    }
}
