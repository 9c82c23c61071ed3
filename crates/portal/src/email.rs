//! Email composition.
//!
//! Drafts are addressed to shortlisted candidates (or a single candidate)
//! and handed to a `Mailer`. No delivery transport exists; `LogMailer`
//! writes the payload to the log.

use crate::error::{PortalError, Result};
use roster::Candidate;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_SUBJECT: &str = "Job Opportunity - TECH-ENGINE";

pub const DEFAULT_BODY: &str = "Dear Candidate,

We have reviewed your profile and are impressed with your skills and experience. \
We would like to discuss potential opportunities that align with your background.

Please let us know your availability for a brief conversation this week.

Best regards,
HR Team
TECH-ENGINE";

/// The payload handed to a mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Draft with the default subject and body addressed to `candidates`.
    ///
    /// Recipients are the candidates' emails in the given order.
    pub fn for_candidates<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Result<Self> {
        let recipients: Vec<String> = candidates
            .into_iter()
            .map(|candidate| candidate.email.clone())
            .collect();
        if recipients.is_empty() {
            return Err(PortalError::EmptyRecipients);
        }

        Ok(Self {
            recipients,
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
        })
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Anything that can "send" a draft
pub trait Mailer: Send + Sync {
    fn send(&self, draft: &EmailDraft) -> Result<()>;
}

/// Mailer that only logs the payload
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, draft: &EmailDraft) -> Result<()> {
        if draft.recipients.is_empty() {
            return Err(PortalError::EmptyRecipients);
        }
        let payload = serde_json::to_string(draft)?;
        info!("Sending email to {} recipient(s): {}", draft.recipients.len(), payload);
        Ok(())
    }
}
