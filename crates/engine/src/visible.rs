//! The Visible Set: candidates remaining after applying a query.
//!
//! `compute_visible_set` is the pure function. `VisibleView` memoizes it for
//! a controller that asks for the same view repeatedly (every render) but
//! only changes the query on user input.

use crate::filter_pipeline::FilterPipeline;
use crate::query::QueryState;
use roster::{Candidate, CandidateStore};
use std::sync::Arc;
use tracing::debug;

/// Candidates from `candidates` that satisfy `query`, in store order.
///
/// A candidate is included iff the search term matches its name or email
/// (case-insensitively), every concrete field selection equals its value,
/// and it shares at least one skill with the requested set. Empty clauses
/// impose no constraint.
///
/// Pure and total: no I/O, no errors, same input gives the same output.
pub fn compute_visible_set<'a>(candidates: &'a [Candidate], query: &QueryState) -> Vec<&'a Candidate> {
    FilterPipeline::from_query(query).apply(candidates)
}

/// Positions (into `candidates`) of the visible set.
pub fn compute_visible_positions(candidates: &[Candidate], query: &QueryState) -> Vec<usize> {
    FilterPipeline::from_query(query).positions(candidates)
}

/// Memoized visible set for one Candidate Store.
///
/// ## Memoization contract
/// The cached result is keyed on (store identity, query value). It is reused
/// while both are unchanged and recomputed when either changes. Store
/// identity is pointer identity of the `Arc`: rebinding to a different store,
/// even one with equal contents, invalidates the cache.
#[derive(Debug)]
pub struct VisibleView {
    store: Arc<CandidateStore>,
    cached: Option<CachedView>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CachedView {
    query: QueryState,
    positions: Vec<usize>,
}

impl VisibleView {
    pub fn new(store: Arc<CandidateStore>) -> Self {
        Self {
            store,
            cached: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn store(&self) -> &Arc<CandidateStore> {
        &self.store
    }

    /// Point the view at another store. Drops the cache unless it is the
    /// same store.
    pub fn rebind(&mut self, store: Arc<CandidateStore>) {
        if !Arc::ptr_eq(&self.store, &store) {
            debug!("Visible view rebound to a new store ({} candidates)", store.len());
            self.store = store;
            self.cached = None;
        }
    }

    /// The visible set for `query`, from cache when possible.
    pub fn visible(&mut self, query: &QueryState) -> Vec<&Candidate> {
        let candidates = self.store.candidates();

        let reuse = matches!(&self.cached, Some(cached) if cached.query == *query);
        if reuse {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.cached = Some(CachedView {
                query: query.clone(),
                positions: compute_visible_positions(candidates, query),
            });
        }

        match &self.cached {
            Some(cached) => cached
                .positions
                .iter()
                .map(|&position| &candidates[position])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Times a request was answered from cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Times the visible set had to be computed
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
