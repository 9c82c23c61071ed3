//! Candidate data source.
//!
//! Supplies the Candidate Store once at session start. Failures are handled
//! here: callers that must keep going use `load_or_empty`, which logs the
//! problem and hands back an empty store instead.

use crate::config::PortalConfig;
use crate::error::Result;
use roster::{CandidateStore, RosterError, fixtures, parser};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Built-in demo roster
    Demo,
    /// JSON roster document on disk
    File(PathBuf),
}

impl RosterSource {
    pub fn from_config(config: &PortalConfig) -> Self {
        match &config.roster_path {
            Some(path) => RosterSource::File(path.clone()),
            None => RosterSource::Demo,
        }
    }

    /// Load and validate the roster
    pub async fn load(&self) -> Result<Arc<CandidateStore>> {
        let store = match self {
            RosterSource::Demo => CandidateStore::new(fixtures::demo_roster())?,
            RosterSource::File(path) => {
                let origin = path.display().to_string();
                let json = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
                    ErrorKind::NotFound => RosterError::FileNotFound { path: origin.clone() },
                    _ => RosterError::Io(e),
                })?;
                parser::store_from_json(&json, &origin)?
            }
        };
        info!("Candidate store ready with {} candidates", store.len());
        Ok(Arc::new(store))
    }

    /// Load the roster, substituting an empty store on failure
    pub async fn load_or_empty(&self) -> Arc<CandidateStore> {
        match self.load().await {
            Ok(store) => store,
            Err(e) => {
                warn!("Could not load candidates ({e}); continuing with an empty roster");
                Arc::new(CandidateStore::empty())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use std::io::Write;

    #[tokio::test]
    async fn test_demo_source() {
        let store = RosterSource::Demo.load().await.unwrap();
        assert_eq!(store.len(), 10);
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "name": "Ada", "email": "ada@x.com", "domain": "Data Scientist",
                "experience": "3+ years", "education": "M.Tech", "availability": "Immediate"}}]"#
        )
        .unwrap();

        let store = RosterSource::File(file.path().to_path_buf()).load().await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().name, "Ada");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = RosterSource::File(PathBuf::from("no/such/roster.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, PortalError::Roster(RosterError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let store = RosterSource::File(file.path().to_path_buf()).load_or_empty().await;
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = PortalConfig::default();
        assert_eq!(RosterSource::from_config(&config), RosterSource::Demo);

        let config = PortalConfig {
            roster_path: Some(PathBuf::from("r.json")),
            ..PortalConfig::default()
        };
        assert_eq!(
            RosterSource::from_config(&config),
            RosterSource::File(PathBuf::from("r.json"))
        );
    }
}
