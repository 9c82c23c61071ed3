//! The Candidate Store: the immutable roster for one session.
//!
//! The store is built once from whatever the candidate data source supplies,
//! validated, and never mutated afterwards. Candidates keep their load order;
//! a secondary id index gives O(1) lookups.

use crate::error::{Result, RosterError};
use crate::types::{Candidate, CandidateId, CategoricalField};
use std::collections::{BTreeSet, HashMap};

/// Highest score a candidate may carry
pub const MAX_SCORE: u8 = 100;

/// Read-only collection of candidates for the current session.
#[derive(Debug, Default)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
    by_id: HashMap<CandidateId, usize>,
}

impl CandidateStore {
    /// Build a store from candidates in load order.
    ///
    /// Fails if two candidates share an id, an id is blank, or a score
    /// is above 100.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(candidates.len());

        for (position, candidate) in candidates.iter().enumerate() {
            validate_candidate(candidate)?;
            if by_id.insert(candidate.id.clone(), position).is_some() {
                return Err(RosterError::DuplicateId {
                    id: candidate.id.clone(),
                });
            }
        }

        Ok(Self { candidates, by_id })
    }

    /// A store with no candidates, used when the data source fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// All candidates in load order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by id
    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.by_id.get(id).map(|&position| &self.candidates[position])
    }

    /// Position of a candidate in load order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sorted distinct values present for a categorical field.
    ///
    /// Candidates missing the field contribute nothing.
    pub fn distinct_values(&self, field: CategoricalField) -> Vec<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.categorical(field))
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct skills across the roster
    pub fn distinct_skills(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.skills.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn validate_candidate(candidate: &Candidate) -> Result<()> {
    if candidate.id.trim().is_empty() {
        return Err(RosterError::ValidationError(format!(
            "candidate '{}' has an empty id",
            candidate.name
        )));
    }
    if let Some(score) = candidate.score {
        if score > MAX_SCORE {
            return Err(RosterError::InvalidValue {
                id: candidate.id.clone(),
                field: "score".to_string(),
                value: score.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Candidate> {
        vec![
            Candidate::new("1", "John Doe", "john@x.com")
                .with_domain("Frontend Development")
                .with_skills(["React", "TypeScript"]),
            Candidate::new("2", "Jane Smith", "jane@x.com")
                .with_domain("Backend Development")
                .with_location_preference("Remote")
                .with_skills(["Node.js", "React"]),
            Candidate::new("3", "Mike Johnson", "mike@x.com")
                .with_domain("Frontend Development"),
        ]
    }

    #[test]
    fn test_store_preserves_load_order() {
        let store = CandidateStore::new(sample()).unwrap();
        let ids: Vec<&str> = store.candidates().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = CandidateStore::new(sample()).unwrap();
        assert_eq!(store.get("2").unwrap().name, "Jane Smith");
        assert_eq!(store.position("3"), Some(2));
        assert!(store.get("999").is_none());
        assert!(!store.contains("999"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut candidates = sample();
        candidates.push(Candidate::new("2", "Someone Else", "else@x.com"));

        let err = CandidateStore::new(candidates).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { ref id } if id == "2"));
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let candidates = vec![Candidate::new("1", "A", "a@x.com").with_score(101)];
        let err = CandidateStore::new(candidates).unwrap_err();
        assert!(matches!(err, RosterError::InvalidValue { .. }));

        let candidates = vec![Candidate::new("1", "A", "a@x.com").with_score(100)];
        assert!(CandidateStore::new(candidates).is_ok());
    }

    #[test]
    fn test_blank_id_rejected() {
        let candidates = vec![Candidate::new("  ", "A", "a@x.com")];
        assert!(matches!(
            CandidateStore::new(candidates),
            Err(RosterError::ValidationError(_))
        ));
    }

    #[test]
    fn test_distinct_values() {
        let store = CandidateStore::new(sample()).unwrap();
        assert_eq!(
            store.distinct_values(CategoricalField::Domain),
            vec!["Backend Development", "Frontend Development"]
        );
        assert_eq!(
            store.distinct_values(CategoricalField::LocationPreference),
            vec!["Remote"]
        );
        assert_eq!(store.distinct_skills(), vec!["Node.js", "React", "TypeScript"]);
    }

    #[test]
    fn test_empty_store() {
        let store = CandidateStore::empty();
        assert!(store.is_empty());
        assert!(store.candidates().is_empty());
        assert!(store.distinct_skills().is_empty());
    }
}
