//! Free-text filter over candidate name and email.

use crate::traits::Filter;
use roster::Candidate;

/// Keeps candidates whose name or email contains the term,
/// ignoring case.
///
/// An empty term matches everything.
pub struct SearchTermFilter {
    needle: String,
}

impl SearchTermFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        candidate.name.to_lowercase().contains(&self.needle)
            || candidate.email.to_lowercase().contains(&self.needle)
    }
}
