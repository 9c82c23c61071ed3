//! Filter implementations for the candidate pipeline.
//!
//! One filter per clause of the visible-set predicate. They are combined
//! with AND by `FilterPipeline`.

pub mod field_match;
pub mod search_term;
pub mod skills;

// Re-export for convenience
pub use field_match::FieldFilter;
pub use search_term::SearchTermFilter;
pub use skills::SkillFilter;
