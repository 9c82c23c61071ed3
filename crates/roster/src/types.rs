//! Core domain types for the candidate roster.
//!
//! A `Candidate` is one recruitment prospect. Only a handful of its fields
//! are ever inspected by filtering (name, email, the six categorical fields
//! and skills); the rest is descriptive payload carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable identifier assigned to a candidate at ingestion time
pub type CandidateId = String;

// =============================================================================
// Candidate
// =============================================================================

/// Represents one recruitment prospect.
///
/// JSON documents use the camelCase field names of the hosted store
/// (`locationPreference`, `resumeLink`, ...). Optional fields may be
/// missing entirely; a missing categorical field never matches a concrete
/// filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,

    // Categorical attributes
    pub domain: String,
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,
    pub education: String,
    pub availability: String,

    #[serde(default)]
    pub skills: Vec<String>,

    /// Assessment score, 0-100 inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    // Descriptive payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub badges: Vec<String>,

    /// Set on shortlisted copies. Informational only.
    #[serde(default)]
    pub shortlisted: bool,
}

impl Candidate {
    /// Create a candidate with the required identity fields and empty
    /// categorical values. Use the `with_*` methods to fill in the rest.
    pub fn new(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            domain: String::new(),
            experience: String::new(),
            location_preference: None,
            assessment_type: None,
            education: String::new(),
            availability: String::new(),
            skills: Vec::new(),
            score: None,
            status: None,
            rank: None,
            resume_link: None,
            github_link: None,
            portfolio_link: None,
            phone: None,
            location: None,
            projects: Vec::new(),
            assessments: Vec::new(),
            badges: Vec::new(),
            shortlisted: false,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn with_location_preference(mut self, preference: impl Into<String>) -> Self {
        self.location_preference = Some(preference.into());
        self
    }

    pub fn with_assessment_type(mut self, assessment_type: impl Into<String>) -> Self {
        self.assessment_type = Some(assessment_type.into());
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_score(mut self, score: u8) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Value of one categorical field, or `None` when the candidate
    /// does not carry it.
    pub fn categorical(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Domain => Some(self.domain.as_str()),
            CategoricalField::Experience => Some(self.experience.as_str()),
            CategoricalField::LocationPreference => self.location_preference.as_deref(),
            CategoricalField::AssessmentType => self.assessment_type.as_deref(),
            CategoricalField::Education => Some(self.education.as_str()),
            CategoricalField::Availability => Some(self.availability.as_str()),
        }
    }

    /// True when the candidate lists this exact skill
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

// =============================================================================
// Categorical fields
// =============================================================================

/// The six candidate fields that accept an exact-match filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoricalField {
    Domain,
    Experience,
    LocationPreference,
    AssessmentType,
    Education,
    Availability,
}

impl CategoricalField {
    /// All fields, in filter-panel order
    pub const ALL: [CategoricalField; 6] = [
        CategoricalField::Domain,
        CategoricalField::Experience,
        CategoricalField::LocationPreference,
        CategoricalField::AssessmentType,
        CategoricalField::Education,
        CategoricalField::Availability,
    ];

    /// Field name as it appears in roster documents
    pub fn key(self) -> &'static str {
        match self {
            CategoricalField::Domain => "domain",
            CategoricalField::Experience => "experience",
            CategoricalField::LocationPreference => "locationPreference",
            CategoricalField::AssessmentType => "assessmentType",
            CategoricalField::Education => "education",
            CategoricalField::Availability => "availability",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            CategoricalField::Domain => "Job Domain",
            CategoricalField::Experience => "Experience",
            CategoricalField::LocationPreference => "Location Preference",
            CategoricalField::AssessmentType => "Assessment Type",
            CategoricalField::Education => "Education",
            CategoricalField::Availability => "Availability",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Payload types
// =============================================================================

/// Hiring status of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Available,
    Interviewed,
    Hired,
    #[serde(rename = "In Process")]
    InProcess,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Available => "Available",
            Status::Interviewed => "Interviewed",
            Status::Hired => "Hired",
            Status::InProcess => "In Process",
        };
        f.write_str(label)
    }
}

/// A project listed on a candidate profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One assessment result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(rename = "type")]
    pub kind: String,
    pub score: u32,
    pub max_score: u32,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
