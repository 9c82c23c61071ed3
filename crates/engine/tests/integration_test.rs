//! Integration tests for the engine.
//!
//! These exercise filtering and the shortlist together on fixed rosters,
//! the way the dashboard controller drives them.

use engine::{QueryState, Shortlist, VisibleView, compute_visible_set, remove_from_shortlist, toggle_shortlist};
use roster::{Candidate, CandidateStore, CategoricalField, fixtures};
use std::sync::Arc;

fn two_candidate_store() -> CandidateStore {
    CandidateStore::new(vec![
        Candidate::new("1", "John Doe", "john@x.com")
            .with_domain("Frontend Development")
            .with_experience("2-3 years")
            .with_skills(["React"]),
        Candidate::new("2", "Jane Smith", "jane@x.com")
            .with_domain("Backend Development")
            .with_experience("3-5 years")
            .with_skills(["Node.js"]),
    ])
    .unwrap()
}

fn demo_store() -> CandidateStore {
    CandidateStore::new(fixtures::demo_roster()).unwrap()
}

fn ids(visible: &[&Candidate]) -> Vec<String> {
    visible.iter().map(|c| c.id.clone()).collect()
}

/// A spread of queries touching every clause
fn sample_queries() -> Vec<QueryState> {
    vec![
        QueryState::new(),
        QueryState::new().with_search_term("SHARMA"),
        QueryState::new().with_search_term("email.com"),
        QueryState::new().with_filter(CategoricalField::LocationPreference, "Remote"),
        QueryState::new()
            .with_filter(CategoricalField::Experience, "1-3 years")
            .with_filter(CategoricalField::Education, "B.Tech"),
        QueryState::new().with_skills(["Python", "Figma"]),
        QueryState::new()
            .with_search_term("a")
            .with_filter(CategoricalField::Availability, "Immediate")
            .with_skills(["Node.js"]),
    ]
}

#[test]
fn test_filtering_is_idempotent() {
    let store = demo_store();
    for query in sample_queries() {
        let first = compute_visible_set(store.candidates(), &query);
        let second = compute_visible_set(store.candidates(), &query);
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_identity_query_returns_everything() {
    let store = demo_store();
    let visible = compute_visible_set(store.candidates(), &QueryState::new());

    let expected: Vec<&Candidate> = store.candidates().iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn test_and_semantics_across_fields() {
    let store = two_candidate_store();
    let query = QueryState::new()
        .with_filter(CategoricalField::Domain, "Frontend Development")
        .with_filter(CategoricalField::Experience, "3-5 years");

    assert!(compute_visible_set(store.candidates(), &query).is_empty());
}

#[test]
fn test_or_semantics_within_skills() {
    let store = CandidateStore::new(vec![
        Candidate::new("1", "A", "a@x.com").with_skills(["React", "Node.js"]),
    ])
    .unwrap();
    let query = QueryState::new().with_skills(["Node.js", "Python"]);

    assert_eq!(ids(&compute_visible_set(store.candidates(), &query)), vec!["1"]);
}

#[test]
fn test_skills_are_not_and_combined() {
    // Requesting two skills must not require both
    let store = demo_store();
    let query = QueryState::new().with_skills(["Kubernetes", "Figma"]);

    let visible = compute_visible_set(store.candidates(), &query);
    assert_eq!(ids(&visible), vec!["2", "5", "10"]);
}

#[test]
fn test_case_insensitive_text_match() {
    let store = two_candidate_store();
    let query = QueryState::new().with_search_term("JOHN");

    assert_eq!(ids(&compute_visible_set(store.candidates(), &query)), vec!["1"]);
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let store = demo_store();
    let base = Shortlist::new()
        .toggle(store.get("3").unwrap())
        .toggle(store.get("1").unwrap());

    for candidate in store.candidates().iter().filter(|c| !base.contains(&c.id)) {
        let round_trip = toggle_shortlist(&toggle_shortlist(&base, candidate), candidate);
        assert_eq!(round_trip.ids(), base.ids());
    }
}

#[test]
fn test_shortlist_never_holds_duplicates() {
    let store = demo_store();
    let mut shortlist = Shortlist::new();

    // A fixed, repetitive sequence of user actions
    let actions = ["1", "2", "1", "3", "3", "3", "4", "-2", "2", "5", "-9", "1", "-1", "6", "6"];
    for action in actions {
        shortlist = match action.strip_prefix('-') {
            Some(id) => remove_from_shortlist(&shortlist, id),
            None => toggle_shortlist(&shortlist, store.get(action).unwrap()),
        };

        let mut seen = std::collections::HashSet::new();
        assert!(shortlist.iter().all(|entry| seen.insert(entry.id.clone())));
    }
    assert_eq!(shortlist.ids(), vec!["3", "4", "2", "5"]);
}

#[test]
fn test_order_preservation() {
    let store = demo_store();
    for query in sample_queries() {
        let positions: Vec<usize> = compute_visible_set(store.candidates(), &query)
            .iter()
            .map(|c| store.position(&c.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
    }
}

#[test]
fn test_end_to_end_scenario() {
    let store = Arc::new(two_candidate_store());
    let mut view = VisibleView::new(store.clone());

    let query = QueryState::new().with_filter(CategoricalField::Domain, "Frontend Development");
    assert_eq!(ids(&view.visible(&query)), vec!["1"]);

    let shortlist = toggle_shortlist(&Shortlist::new(), store.get("1").unwrap());
    assert_eq!(shortlist.ids(), vec!["1"]);

    let query = query.with_filter(CategoricalField::Domain, "All");
    assert_eq!(ids(&view.visible(&query)), vec!["1", "2"]);
    assert_eq!(shortlist.ids(), vec!["1"]);
}

#[test]
fn test_shortlist_survives_filter_changes() {
    let store = demo_store();
    let shortlist = Shortlist::new()
        .toggle(store.get("2").unwrap())
        .toggle(store.get("7").unwrap());

    // Hide both shortlisted candidates from the visible set
    let query = QueryState::new().with_filter(CategoricalField::Domain, "DevOps Engineer");
    let visible = compute_visible_set(store.candidates(), &query);

    assert_eq!(ids(&visible), vec!["5"]);
    assert_eq!(shortlist.ids(), vec!["2", "7"]);
}
