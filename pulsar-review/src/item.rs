use core::fmt;

use pulsar_core::{Candidate, Classification};

/// Stable identity of a candidate within one session.
///
/// Assigned at load time as the backing-list index; filtering and sorting
/// never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CandidateId(usize);

impl CandidateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A candidate paired with its diagnostic image.
///
/// `I` is whatever handle the image collaborator hands out (a path, a URL,
/// a texture id); the session only stores and returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewItem<I> {
    id: CandidateId,
    candidate: Candidate,
    image: I,
}

impl<I> ReviewItem<I> {
    pub(crate) fn new(id: CandidateId, candidate: Candidate, image: I) -> Self {
        Self {
            id,
            candidate,
            image,
        }
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn classification(&self) -> Classification {
        self.candidate.classification()
    }

    pub(crate) fn set_classification(&mut self, label: Classification) {
        self.candidate.set_classification(label);
    }
}

/// Last path component of `path`, splitting on both `/` and `\`.
///
/// Image lookups are keyed on this, so `plots/beam3/cand_001.png` and
/// `C:\plots\cand_001.png` both resolve to `cand_001.png`.
pub fn normalized_basename(path: &str) -> &str {
    let path = path.trim();
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_unix_and_windows() {
        assert_eq!(normalized_basename("plots/beam3/cand_001.png"), "cand_001.png");
        assert_eq!(normalized_basename(r"C:\plots\cand_001.png"), "cand_001.png");
        assert_eq!(normalized_basename(r"mixed/dir\cand.png"), "cand.png");
        assert_eq!(normalized_basename("cand.png"), "cand.png");
        assert_eq!(normalized_basename("  cand.png "), "cand.png");
    }

    #[test]
    fn test_basename_keeps_case() {
        assert_eq!(normalized_basename("dir/Cand.PNG"), "Cand.PNG");
    }

    #[test]
    fn test_basename_trailing_separator() {
        assert_eq!(normalized_basename("dir/"), "");
    }

    #[test]
    fn test_candidate_id_display() {
        assert_eq!(CandidateId::new(4).to_string(), "#4");
        assert_eq!(CandidateId::new(4).index(), 4);
    }
}
