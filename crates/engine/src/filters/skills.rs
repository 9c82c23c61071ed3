//! Skill filter.
//!
//! Unlike the categorical fields, skills are multi-valued, so the clause is
//! an OR: one overlapping skill is enough.

use crate::traits::Filter;
use roster::Candidate;

/// Keeps candidates that list at least one of the requested skills.
///
/// ## Algorithm
/// For each requested skill, check the candidate's skill list for an exact
/// (case-sensitive) entry. O(requested x candidate skills), which is fine
/// for the handful of skills a profile carries.
pub struct SkillFilter {
    skills: Vec<String>,
}

impl SkillFilter {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for SkillFilter {
    fn name(&self) -> &str {
        "SkillFilter"
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.skills.is_empty() || self.skills.iter().any(|skill| candidate.has_skill(skill))
    }
}
