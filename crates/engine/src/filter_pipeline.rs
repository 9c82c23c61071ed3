//! The FilterPipeline combines multiple filters.
//!
//! Filters are chained with the builder pattern and combined with AND:
//! a candidate is kept only if every filter matches it.

use crate::filters::{FieldFilter, SearchTermFilter, SkillFilter};
use crate::query::QueryState;
use crate::traits::Filter;
use roster::Candidate;
use tracing;

/// Chains multiple filters together into one predicate.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTermFilter::new("john"))
///     .add_filter(FieldFilter::new(CategoricalField::Domain, "QA Tester"))
///     .add_filter(SkillFilter::new(["Selenium"]));
///
/// let visible = pipeline.apply(store.candidates());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a query.
    ///
    /// Only constraining clauses are installed: an empty search term,
    /// an `All` selection and an empty skill set add no filter.
    pub fn from_query(query: &QueryState) -> Self {
        let mut pipeline = Self::new();

        if !query.search_term.is_empty() {
            pipeline = pipeline.add_filter(SearchTermFilter::new(&query.search_term));
        }
        for (field, value) in query.filters.active() {
            pipeline = pipeline.add_filter(FieldFilter::new(field, value));
        }
        if !query.skills.is_empty() {
            pipeline = pipeline.add_filter(SkillFilter::new(query.skills.iter().cloned()));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of installed filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the installed filters, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Whether a single candidate passes every filter
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.filters.iter().all(|filter| filter.matches(candidate))
    }

    /// Apply all filters to the candidates.
    ///
    /// ## Algorithm
    /// 1. Walk the candidates once, in order
    /// 2. Keep a candidate only if every filter matches it
    /// 3. Return borrowed candidates in their original relative order
    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        self.positions(candidates)
            .into_iter()
            .map(|position| &candidates[position])
            .collect()
    }

    /// Same as `apply`, but returns positions into `candidates`.
    pub fn positions(&self, candidates: &[Candidate]) -> Vec<usize> {
        tracing::debug!(
            "Applying filters: [{}] (input count: {})",
            self.filter_names().join(", "),
            candidates.len()
        );
        let kept: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| self.matches(candidate))
            .map(|(position, _)| position)
            .collect();
        tracing::debug!("Filters applied (output count: {})", kept.len());
        kept
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
