//! View ordering by an arbitrary column.
//!
//! Each cell falls into one of three ranks, compared in this order:
//!
//! | Rank | Cells | Within the rank |
//! |------|-------|-----------------|
//! | blank | empty or whitespace | equal |
//! | number | numbers, and text that reads as a number | numeric |
//! | text | everything else | lexical |
//!
//! So a column holding `"9.5"` and `"10"` sorts as numbers, file names sort
//! as text, and a mixed column puts its numbers before its text. Sorting is
//! stable: ties keep load order in both directions.

use core::cmp::Ordering;

use pulsar_core::record::CLASSIFICATION_COLUMN;
use pulsar_core::{Candidate, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Column to order the view by, and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }

    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        let ordering = compare_values(&self.value_of(a), &self.value_of(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// The classification column reflects the live label, every other column
    /// the value as loaded.
    fn value_of(&self, candidate: &Candidate) -> FieldValue {
        if self.column == CLASSIFICATION_COLUMN {
            return FieldValue::from(candidate.classification().label());
        }
        candidate
            .original_row()
            .get(&self.column)
            .cloned()
            .unwrap_or_default()
    }
}

/// A cell reduced to a totally ordered key.
#[derive(Debug, Clone)]
enum SortValue {
    Blank,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn of(value: &FieldValue) -> Self {
        if value.is_blank() {
            return Self::Blank;
        }
        match value.as_f64() {
            Some(n) => Self::Number(n),
            None => Self::Text(value.to_text()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Blank => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(x), Self::Number(y)) => x.total_cmp(y),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Blanks first, then numbers in numeric order, then text in lexical order.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    SortValue::of(a).compare(&SortValue::of(b))
}
