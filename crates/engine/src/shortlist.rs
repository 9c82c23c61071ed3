//! The Shortlist: candidates the user picked for follow-up.
//!
//! An ordered sequence with no duplicate ids, independent of the visible
//! set. Mutation is by replacement: `toggle` and `remove` return a new
//! shortlist and leave the receiver untouched.

use roster::{Candidate, CandidateId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serialized as a plain list of candidates. Deserializing goes through
/// `from_entries`, so duplicate ids in the input collapse to the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Candidate>", into = "Vec<Candidate>")]
pub struct Shortlist {
    entries: Vec<Candidate>,
}

impl Shortlist {
    /// An empty shortlist, as at session start
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shortlist from existing entries, keeping the first
    /// occurrence of each id.
    pub fn from_entries(entries: impl IntoIterator<Item = Candidate>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|candidate| seen.insert(candidate.id.clone()))
            .map(mark_shortlisted)
            .collect();
        Self { entries }
    }

    /// Remove the candidate if an entry with its id is present,
    /// otherwise append a shortlisted copy at the end.
    ///
    /// Only `id` is compared; other fields may differ.
    pub fn toggle(&self, candidate: &Candidate) -> Self {
        if self.contains(&candidate.id) {
            self.remove(&candidate.id)
        } else {
            let mut entries = self.entries.clone();
            entries.push(mark_shortlisted(candidate.clone()));
            Self { entries }
        }
    }

    /// Drop every entry with this id. Removing an absent id is a no-op.
    pub fn remove(&self, id: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Ids in shortlist order
    pub fn ids(&self) -> Vec<CandidateId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Shortlist {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<Candidate>> for Shortlist {
    fn from(entries: Vec<Candidate>) -> Self {
        Shortlist::from_entries(entries)
    }
}

impl From<Shortlist> for Vec<Candidate> {
    fn from(shortlist: Shortlist) -> Self {
        shortlist.entries
    }
}

fn mark_shortlisted(mut candidate: Candidate) -> Candidate {
    candidate.shortlisted = true;
    candidate
}

/// Toggle `candidate` in `shortlist`. See [`Shortlist::toggle`].
pub fn toggle_shortlist(shortlist: &Shortlist, candidate: &Candidate) -> Shortlist {
    shortlist.toggle(candidate)
}

/// Remove `id` from `shortlist`. See [`Shortlist::remove`].
pub fn remove_from_shortlist(shortlist: &Shortlist, id: &str) -> Shortlist {
    shortlist.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        Candidate::new(id, format!("Candidate {}", id), format!("c{}@x.com", id))
    }

    #[test]
    fn test_toggle_appends_and_marks() {
        let shortlist = Shortlist::new().toggle(&candidate("1")).toggle(&candidate("2"));

        assert_eq!(shortlist.ids(), vec!["1", "2"]);
        assert!(shortlist.iter().all(|entry| entry.shortlisted));
    }

    #[test]
    fn test_toggle_removes_present_id() {
        let shortlist = Shortlist::new()
            .toggle(&candidate("1"))
            .toggle(&candidate("2"))
            .toggle(&candidate("3"));

        let shortlist = shortlist.toggle(&candidate("2"));
        assert_eq!(shortlist.ids(), vec!["1", "3"]);
    }

    #[test]
    fn test_toggle_keys_on_id_only() {
        let shortlist = Shortlist::new().toggle(&candidate("1"));

        // Same id, different payload: still treated as present
        let renamed = Candidate::new("1", "Renamed", "other@x.com");
        assert!(shortlist.toggle(&renamed).is_empty());
    }

    #[test]
    fn test_toggle_leaves_receiver_untouched() {
        let before = Shortlist::new().toggle(&candidate("1"));
        let after = before.toggle(&candidate("2"));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_remove() {
        let shortlist = Shortlist::new().toggle(&candidate("1")).toggle(&candidate("2"));

        assert_eq!(shortlist.remove("1").ids(), vec!["2"]);
        assert_eq!(shortlist.remove("999"), shortlist);
    }

    #[test]
    fn test_from_entries_deduplicates() {
        let shortlist = Shortlist::from_entries(vec![
            candidate("1"),
            candidate("2"),
            Candidate::new("1", "Duplicate", "dup@x.com"),
        ]);

        assert_eq!(shortlist.ids(), vec!["1", "2"]);
        assert_eq!(shortlist.entries()[0].name, "Candidate 1");
        assert!(shortlist.entries()[1].shortlisted);
    }

    #[test]
    fn test_free_functions() {
        let shortlist = toggle_shortlist(&Shortlist::new(), &candidate("7"));
        assert!(shortlist.contains("7"));
        assert!(remove_from_shortlist(&shortlist, "7").is_empty());
    }

    #[test]
    fn test_deserialize_collapses_duplicate_ids() {
        let json = r#"[
            {"id": "1", "name": "First", "email": "a@x.com", "domain": "QA Tester",
             "experience": "Fresher", "education": "BCA", "availability": "Immediate"},
            {"id": "1", "name": "Again", "email": "b@x.com", "domain": "QA Tester",
             "experience": "Fresher", "education": "BCA", "availability": "Immediate"}
        ]"#;

        let shortlist: Shortlist = serde_json::from_str(json).unwrap();
        assert_eq!(shortlist.ids(), vec!["1"]);
        assert_eq!(shortlist.entries()[0].name, "First");
        assert!(shortlist.entries()[0].shortlisted);
    }

    #[test]
    fn test_serializes_as_list() {
        let shortlist = Shortlist::new().toggle(&candidate("4"));
        let value = serde_json::to_value(&shortlist).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "4");
    }
}
