//! # Portal Crate
//!
//! The UI-controller layer of the HR portal and the collaborators around
//! the filter engine.
//!
//! ## Main Components
//!
//! - **config**: `PortalConfig`, read from the environment
//! - **auth**: demo sign-in and the `Session`
//! - **source**: `RosterSource`, supplies the Candidate Store at startup
//! - **persistence**: `PortalStore` port with file and memory stores
//! - **profile**: `StudentProfile`, saved per user
//! - **email**: `EmailDraft` and the `Mailer` trait
//! - **controller**: `Dashboard`, the HR screen state and its `UiEvent`s
//! - **session**: `PortalSession`, wiring all of the above
//!
//! ## Example Usage
//!
//! ```ignore
//! let config = PortalConfig::load()?;
//! let session = auth::login("hr@demo.com", "password123")?;
//! let store = JsonFileStore::new(&config.store_path);
//!
//! let mut portal = PortalSession::open(&config, session, store, LogMailer).await?;
//! portal.dispatch(UiEvent::ShortlistToggled("1".into())).await?;
//! ```

pub mod auth;
pub mod config;
pub mod controller;
pub mod email;
pub mod error;
pub mod persistence;
pub mod profile;
pub mod session;
pub mod source;

// Re-export commonly used types for convenience
pub use auth::{Session, User, UserType};
pub use config::{PortalConfig, ShortlistPolicy};
pub use controller::{Dashboard, UiEvent};
pub use email::{EmailDraft, LogMailer, Mailer};
pub use error::{PortalError, Result};
pub use persistence::{JsonFileStore, MemoryStore, PortalStore};
pub use profile::StudentProfile;
pub use session::PortalSession;
pub use source::RosterSource;
