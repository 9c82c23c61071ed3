//! Persistence port for per-user data.
//!
//! The engine never touches storage. The session layer saves and restores
//! shortlists and student profiles through a `PortalStore`, keyed by the
//! owning user's uid. Shortlists are stored as candidate ids only; entries
//! are rebuilt from the current Candidate Store on restore.

use crate::error::Result;
use crate::profile::StudentProfile;
use engine::Shortlist;
use roster::{CandidateId, CandidateStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Storage for per-user shortlists and profiles
pub trait PortalStore: Send + Sync {
    /// Saved shortlist ids for `owner`, or `None` if nothing was ever saved
    fn load_shortlist(&self, owner: &str) -> impl Future<Output = Result<Option<Vec<CandidateId>>>> + Send;

    /// Replace the saved shortlist ids for `owner`
    fn save_shortlist(&self, owner: &str, ids: &[CandidateId]) -> impl Future<Output = Result<()>> + Send;

    fn load_profile(&self, owner: &str) -> impl Future<Output = Result<Option<StudentProfile>>> + Send;

    fn save_profile(&self, owner: &str, profile: &StudentProfile) -> impl Future<Output = Result<()>> + Send;
}

const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PortalDocument {
    version: u32,
    #[serde(default)]
    shortlists: BTreeMap<String, Vec<CandidateId>>,
    #[serde(default)]
    profiles: BTreeMap<String, StudentProfile>,
}

/// All users' data in one JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<PortalDocument> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PortalDocument {
                version: DOCUMENT_VERSION,
                ..PortalDocument::default()
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, mut document: PortalDocument) -> Result<()> {
        document.version = DOCUMENT_VERSION;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl PortalStore for JsonFileStore {
    async fn load_shortlist(&self, owner: &str) -> Result<Option<Vec<CandidateId>>> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;
        Ok(document.shortlists.get(owner).cloned())
    }

    async fn save_shortlist(&self, owner: &str, ids: &[CandidateId]) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.shortlists.insert(owner.to_string(), ids.to_vec());
        self.write_document(document).await?;
        debug!("Saved {} shortlisted ids for {} to {}", ids.len(), owner, self.path.display());
        Ok(())
    }

    async fn load_profile(&self, owner: &str) -> Result<Option<StudentProfile>> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;
        Ok(document.profiles.get(owner).cloned())
    }

    async fn save_profile(&self, owner: &str, profile: &StudentProfile) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.profiles.insert(owner.to_string(), profile.clone());
        self.write_document(document).await?;
        debug!("Saved profile for {} to {}", owner, self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and session-only setups
#[derive(Debug, Default)]
pub struct MemoryStore {
    shortlists: Mutex<HashMap<String, Vec<CandidateId>>>,
    profiles: Mutex<HashMap<String, StudentProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortalStore for MemoryStore {
    async fn load_shortlist(&self, owner: &str) -> Result<Option<Vec<CandidateId>>> {
        Ok(self.shortlists.lock().await.get(owner).cloned())
    }

    async fn save_shortlist(&self, owner: &str, ids: &[CandidateId]) -> Result<()> {
        self.shortlists
            .lock()
            .await
            .insert(owner.to_string(), ids.to_vec());
        Ok(())
    }

    async fn load_profile(&self, owner: &str) -> Result<Option<StudentProfile>> {
        Ok(self.profiles.lock().await.get(owner).cloned())
    }

    async fn save_profile(&self, owner: &str, profile: &StudentProfile) -> Result<()> {
        self.profiles
            .lock()
            .await
            .insert(owner.to_string(), profile.clone());
        Ok(())
    }
}

/// Rebuild a shortlist from saved ids.
///
/// Ids no longer present in `store` are dropped with a warning; order
/// and first-occurrence uniqueness are kept.
pub fn resolve_shortlist(store: &CandidateStore, ids: &[CandidateId]) -> Shortlist {
    let entries = ids.iter().filter_map(|id| {
        let candidate = store.get(id);
        if candidate.is_none() {
            warn!("Dropping saved shortlist entry for unknown candidate {}", id);
        }
        candidate.cloned()
    });
    Shortlist::from_entries(entries)
}
