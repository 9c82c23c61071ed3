//! # Portal Session
//!
//! Wires the collaborators around one signed-in HR user:
//! 1. Load the Candidate Store from the configured source
//! 2. Open the dashboard for the session
//! 3. Restore the saved shortlist (persistent policy only; a store that
//!    cannot be read leaves it empty)
//! 4. Apply events, saving after each shortlist change
//! 5. Hand email drafts to the mailer

use std::sync::Arc;
use std::time::Instant;

use roster::CandidateStore;
use tracing::{info, warn};

use crate::auth::{self, Session};
use crate::config::{PortalConfig, ShortlistPolicy};
use crate::controller::{Dashboard, UiEvent};
use crate::email::{EmailDraft, LogMailer, Mailer};
use crate::error::Result;
use crate::persistence::PortalStore;
use crate::source::RosterSource;

pub struct PortalSession<S: PortalStore, M: Mailer = LogMailer> {
    session: Session,
    policy: ShortlistPolicy,
    dashboard: Dashboard,
    shortlists: S,
    mailer: M,
}

impl<S: PortalStore, M: Mailer> PortalSession<S, M> {
    /// Load the roster named by `config` and open the dashboard.
    ///
    /// A roster that fails to load is replaced by an empty one.
    pub async fn open(config: &PortalConfig, session: Session, shortlists: S, mailer: M) -> Result<Self> {
        let store = RosterSource::from_config(config).load_or_empty().await;
        Self::with_store(store, config.shortlist_policy, session, shortlists, mailer).await
    }

    /// Open the dashboard over an already loaded store
    pub async fn with_store(
        store: Arc<CandidateStore>,
        policy: ShortlistPolicy,
        session: Session,
        shortlists: S,
        mailer: M,
    ) -> Result<Self> {
        let start_time = Instant::now();
        let mut dashboard = Dashboard::open(&session, store)?;

        if policy == ShortlistPolicy::Persistent {
            match shortlists.load_shortlist(&session.user.uid).await {
                Ok(Some(ids)) => dashboard.restore_shortlist(&ids),
                Ok(None) => {}
                Err(e) => warn!("Could not restore the saved shortlist ({e}); starting empty"),
            }
        }

        info!(
            "Opened dashboard for {} ({} candidates, {} shortlisted, policy {}) in {:?}",
            session.user.email,
            dashboard.store().len(),
            dashboard.shortlist().len(),
            policy,
            start_time.elapsed()
        );

        Ok(Self {
            session,
            policy,
            dashboard,
            shortlists,
            mailer,
        })
    }

    /// Apply an event. Returns `true` if the shortlist changed.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<bool> {
        let changed = self.dashboard.handle(event)?;
        if changed && self.policy == ShortlistPolicy::Persistent {
            self.shortlists
                .save_shortlist(&self.session.user.uid, &self.dashboard.shortlist().ids())
                .await?;
        }
        Ok(changed)
    }

    /// Send a draft through the configured mailer
    pub fn send_email(&self, draft: &EmailDraft) -> Result<()> {
        self.mailer.send(draft)?;
        info!("Email sent to {} recipient(s)", draft.recipients.len());
        Ok(())
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> ShortlistPolicy {
        self.policy
    }

    /// End the session and sign the user out
    pub fn close(self) {
        auth::logout(self.session);
    }
}
