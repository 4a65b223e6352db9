use core::fmt;
use core::str::FromStr;

use crate::TriageError;

/// Operator verdict on a candidate.
///
/// The display strings are the exact values written to the classification
/// column on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    KnownPulsar,
    Tier1,
    Tier2,
    Noise,
    Rfi,
    #[default]
    Unclassified,
}

impl Classification {
    /// All labels in display order.
    pub const ALL: [Classification; 6] = [
        Self::KnownPulsar,
        Self::Tier1,
        Self::Tier2,
        Self::Noise,
        Self::Rfi,
        Self::Unclassified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::KnownPulsar => "Known Pulsar",
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Noise => "Noise",
            Self::Rfi => "RFI",
            Self::Unclassified => "Unclassified",
        }
    }

    /// Single-key shortcut the operator uses for this label.
    ///
    /// Only the mapping lives here; binding keys to widgets is the UI's job.
    pub fn shortcut(self) -> Option<char> {
        match self {
            Self::KnownPulsar => Some('p'),
            Self::Tier1 => Some('1'),
            Self::Tier2 => Some('2'),
            Self::Noise => Some('n'),
            Self::Rfi => Some('r'),
            Self::Unclassified => None,
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.shortcut() == Some(key))
    }

    pub fn is_classified(self) -> bool {
        self != Self::Unclassified
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = TriageError;

    /// Case-insensitive match on the display labels. A blank string is
    /// `Unclassified`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Unclassified);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TriageError::parse(s, "classification label"))
    }
}
