//! # Roster Crate
//!
//! Candidate data for the HR portal: the candidate record, the read-only
//! Candidate Store built once per session, and the ways a roster gets in.
//!
//! ## Main Components
//!
//! - **types**: `Candidate`, `CategoricalField` and the descriptive payload types
//! - **store**: `CandidateStore`, validated and immutable after construction
//! - **parser**: JSON roster documents
//! - **fixtures**: the built-in demo roster
//! - **catalog**: filter option vocabularies
//! - **error**: `RosterError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::{CandidateStore, fixtures};
//!
//! let store = CandidateStore::new(fixtures::demo_roster())?;
//! let arjun = store.get("1").unwrap();
//! println!("{} <{}>", arjun.name, arjun.email);
//! ```

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use store::CandidateStore;
pub use types::{Assessment, Candidate, CandidateId, CategoricalField, Project, Status};
