//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the candidate roster.

use roster::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - Filters are pure predicates over a borrowed candidate; the pipeline
///   owns iteration so that order is preserved in one place
/// - A filter never fails: a candidate that lacks the inspected field
///   simply does not match
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this candidate passes the filter
    fn matches(&self, candidate: &Candidate) -> bool;
}
