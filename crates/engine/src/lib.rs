//! Filter & Shortlist Engine for the HR candidate dashboard.
//!
//! This crate provides:
//! - `QueryState` describing the current search and filter intent
//! - Filter trait and implementations, composed by `FilterPipeline`
//! - `compute_visible_set` and the memoized `VisibleView`
//! - `Shortlist` with toggle/remove semantics
//!
//! ## Architecture
//! Everything here is synchronous and free of I/O. The visible set is a pure
//! function of (Candidate Store, Query State). The shortlist is a separate
//! value that filtering never touches.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{compute_visible_set, QueryState, Shortlist};
//! use roster::CategoricalField;
//!
//! let query = QueryState::new()
//!     .with_search_term("sharma")
//!     .with_filter(CategoricalField::LocationPreference, "Remote");
//!
//! let visible = compute_visible_set(store.candidates(), &query);
//! let shortlist = Shortlist::new().toggle(visible[0]);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod shortlist;
pub mod traits;
pub mod visible;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use query::{FieldFilters, QueryState, Selection};
pub use shortlist::{Shortlist, remove_from_shortlist, toggle_shortlist};
pub use traits::Filter;
pub use visible::{VisibleView, compute_visible_positions, compute_visible_set};
