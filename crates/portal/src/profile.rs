//! Student profiles.
//!
//! Saved through the same store as shortlists, keyed by user uid. Profiles
//! always persist; the shortlist policy does not apply to them.

use crate::auth::{Session, User};
use crate::error::Result;
use crate::persistence::PortalStore;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub github_url: String,
    pub university: String,
    pub degree: String,
    pub graduation_year: String,
    pub bio: String,
    pub profile_picture: String,
    pub posts: u32,
    pub followers: u32,
}

impl StudentProfile {
    /// Blank profile with the account email filled in
    pub fn for_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Name, university and degree are all filled in
    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.university, &self.degree]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// The signed-in user's saved profile, or a blank one if none was saved
pub async fn load_profile<S: PortalStore>(store: &S, session: &Session) -> Result<StudentProfile> {
    Ok(store
        .load_profile(&session.user.uid)
        .await?
        .unwrap_or_else(|| StudentProfile::for_user(&session.user)))
}

pub async fn save_profile<S: PortalStore>(
    store: &S,
    session: &Session,
    profile: &StudentProfile,
) -> Result<()> {
    store.save_profile(&session.user.uid, profile).await?;
    info!("Saved profile for {}", session.user.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::login;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_is_complete() {
        let mut profile = StudentProfile {
            full_name: "Sneha Gupta".to_string(),
            university: "Pune University".to_string(),
            ..StudentProfile::default()
        };
        assert!(!profile.is_complete());

        profile.degree = "B.Tech".to_string();
        assert!(profile.is_complete());
    }

    #[test]
    fn test_deserializes_partial_document() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"fullName": "Sneha Gupta", "graduationYear": "2025"}"#).unwrap();
        assert_eq!(profile.full_name, "Sneha Gupta");
        assert_eq!(profile.graduation_year, "2025");
        assert_eq!(profile.followers, 0);
    }

    #[tokio::test]
    async fn test_load_defaults_to_blank_profile() {
        let session = login("student@demo.com", "password123").unwrap();
        let profile = load_profile(&MemoryStore::new(), &session).await.unwrap();

        assert_eq!(profile.email, "student@demo.com");
        assert!(!profile.is_complete());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryStore::new();
        let session = login("student@demo.com", "password123").unwrap();

        let mut profile = load_profile(&store, &session).await.unwrap();
        profile.full_name = "Demo Student".to_string();
        profile.bio = "Learning Rust".to_string();
        save_profile(&store, &session, &profile).await.unwrap();

        assert_eq!(load_profile(&store, &session).await.unwrap(), profile);
    }
}
