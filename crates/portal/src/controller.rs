//! # HR Dashboard Controller
//!
//! Owns the state behind the HR screen and applies UI events to it:
//! 1. Query events replace the `QueryState`
//! 2. Shortlist events replace the `Shortlist`
//! 3. The visible set is read through a memoized `VisibleView`
//!
//! Query changes never touch the shortlist, and shortlist changes never
//! touch the query.

use std::sync::Arc;

use engine::{QueryState, Selection, Shortlist, VisibleView};
use roster::{Candidate, CandidateId, CandidateStore, CategoricalField};
use tracing::debug;

use crate::auth::Session;
use crate::email::EmailDraft;
use crate::error::{PortalError, Result};
use crate::persistence::resolve_shortlist;

/// Discrete input from the HR screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchTermChanged(String),
    FilterChanged(CategoricalField, Selection),
    SkillToggled(String),
    FiltersCleared,
    ShortlistToggled(CandidateId),
    ShortlistRemoved(CandidateId),
}

#[derive(Debug)]
pub struct Dashboard {
    store: Arc<CandidateStore>,
    query: QueryState,
    shortlist: Shortlist,
    view: VisibleView,
}

impl Dashboard {
    /// Open the dashboard for an HR session
    pub fn open(session: &Session, store: Arc<CandidateStore>) -> Result<Self> {
        if !session.is_hr() {
            return Err(PortalError::NotAuthorized {
                user_type: session.user_type.to_string(),
            });
        }

        Ok(Self {
            view: VisibleView::new(store.clone()),
            store,
            query: QueryState::new(),
            shortlist: Shortlist::new(),
        })
    }

    /// Apply one event. Returns `true` if the shortlist changed.
    pub fn handle(&mut self, event: UiEvent) -> Result<bool> {
        debug!("Dashboard event: {:?}", event);

        match event {
            UiEvent::SearchTermChanged(term) => {
                self.query = self.query.clone().with_search_term(term);
                Ok(false)
            }
            UiEvent::FilterChanged(field, selection) => {
                self.query = self.query.clone().with_filter(field, selection);
                Ok(false)
            }
            UiEvent::SkillToggled(skill) => {
                self.query = self.query.clone().with_skill_toggled(skill);
                Ok(false)
            }
            UiEvent::FiltersCleared => {
                self.query = self.query.clone().cleared_filters();
                Ok(false)
            }
            UiEvent::ShortlistToggled(id) => {
                let candidate = self
                    .store
                    .get(&id)
                    .ok_or_else(|| PortalError::UnknownCandidate(id.clone()))?;
                self.shortlist = self.shortlist.toggle(candidate);
                Ok(true)
            }
            UiEvent::ShortlistRemoved(id) => {
                let before = self.shortlist.len();
                self.shortlist = self.shortlist.remove(&id);
                Ok(self.shortlist.len() != before)
            }
        }
    }

    /// The visible set for the current query
    pub fn visible(&mut self) -> Vec<&Candidate> {
        self.view.visible(&self.query)
    }

    pub fn store(&self) -> &Arc<CandidateStore> {
        &self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn shortlist(&self) -> &Shortlist {
        &self.shortlist
    }

    pub fn is_shortlisted(&self, id: &str) -> bool {
        self.shortlist.contains(id)
    }

    /// Cache statistics of the visible view as (hits, misses)
    pub fn view_stats(&self) -> (u64, u64) {
        (self.view.hits(), self.view.misses())
    }

    /// Replace the shortlist with saved ids resolved against the store
    pub fn restore_shortlist(&mut self, ids: &[CandidateId]) {
        self.shortlist = resolve_shortlist(&self.store, ids);
        debug!("Restored shortlist with {} entries", self.shortlist.len());
    }

    /// Draft addressed to everyone on the shortlist
    pub fn compose_for_shortlist(&self) -> Result<EmailDraft> {
        EmailDraft::for_candidates(self.shortlist.iter())
    }

    /// Draft addressed to one candidate
    pub fn compose_for(&self, id: &str) -> Result<EmailDraft> {
        let candidate = self
            .store
            .get(id)
            .ok_or_else(|| PortalError::UnknownCandidate(id.to_string()))?;
        EmailDraft::for_candidates([candidate])
    }
}
