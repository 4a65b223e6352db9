use pulsar_core::{Candidate, Classification};

use crate::item::{CandidateId, ReviewItem};

/// Per-label tally over the whole backing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    counts: [usize; Classification::ALL.len()],
}

impl ClassCounts {
    pub(crate) fn tally<'a, I>(items: impl IntoIterator<Item = &'a ReviewItem<I>>) -> Self
    where
        I: 'a,
    {
        let mut counts = Self::default();
        for item in items {
            counts.counts[slot(item.classification())] += 1;
        }
        counts
    }

    pub fn get(&self, label: Classification) -> usize {
        self.counts[slot(label)]
    }

    /// Labels in display order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        Classification::ALL.into_iter().zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Items carrying any label other than `Unclassified`.
    pub fn classified(&self) -> usize {
        self.total() - self.get(Classification::Unclassified)
    }
}

fn slot(label: Classification) -> usize {
    Classification::ALL
        .iter()
        .position(|c| *c == label)
        .unwrap_or(Classification::ALL.len() - 1)
}

/// One point of the period/DM/S/N scatter the plotting collaborator draws.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScatterPoint {
    pub id: CandidateId,
    /// Seconds.
    pub period: Option<f64>,
    pub dm: Option<f64>,
    pub snr: Option<f64>,
    pub classification: Classification,
}

impl ScatterPoint {
    pub(crate) fn of(id: CandidateId, candidate: &Candidate) -> Self {
        Self {
            id,
            period: candidate.period(),
            dm: candidate.dm(),
            snr: candidate.snr(),
            classification: candidate.classification(),
        }
    }
}
