use pulsar_core::{Candidate, Classification};

/// Which classifications the view shows.
///
/// Blank or unrecognised labels are decoded as `Unclassified`, so
/// `Only(Unclassified)` also covers rows whose classification cell was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Only(Classification),
}

impl ClassFilter {
    pub fn matches(self, label: Classification) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == label,
        }
    }
}

/// Classification filter AND a case-insensitive substring search on the
/// candidate's image file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilter {
    class: ClassFilter,
    search: String,
}

impl ViewFilter {
    pub fn class(&self) -> ClassFilter {
        self.class
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub(crate) fn set_class(&mut self, class: ClassFilter) {
        self.class = class;
    }

    pub(crate) fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
    }

    pub fn is_active(&self) -> bool {
        self.class != ClassFilter::All || !self.search.is_empty()
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        if !self.class.matches(candidate.classification()) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        candidate
            .png_file()
            .is_some_and(|name| name.to_lowercase().contains(&self.search))
    }
}
