//! Filter option lists offered by the HR filter panel.
//!
//! Each categorical list starts with the `"All"` sentinel. The lists are a
//! fixed vocabulary; `CandidateStore::distinct_values` gives the values
//! actually present in a loaded roster.

use crate::types::CategoricalField;

/// Sentinel option meaning "no constraint on this field"
pub const ALL_OPTION: &str = "All";

pub const DOMAINS: &[&str] = &[
    ALL_OPTION,
    "UI/UX Designer",
    "Backend Developer",
    "Frontend Developer",
    "Full Stack Developer",
    "Python Developer",
    "DevOps Engineer",
    "Data Scientist",
    "QA Tester",
];

pub const EXPERIENCES: &[&str] = &[ALL_OPTION, "Fresher", "0-1 years", "1-3 years", "3+ years"];

pub const LOCATION_PREFERENCES: &[&str] = &[ALL_OPTION, "Remote", "Onsite", "Hybrid"];

pub const ASSESSMENT_TYPES: &[&str] = &[
    ALL_OPTION,
    "Hackathon Score",
    "Technical Test",
    "Interview Round",
];

pub const EDUCATIONS: &[&str] = &[ALL_OPTION, "B.Tech", "M.Tech", "BCA", "MCA", "Diploma"];

pub const AVAILABILITIES: &[&str] = &[ALL_OPTION, "Immediate", "15 days", "30 days"];

pub const SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "Django",
    "SQL",
    "Docker",
    "Figma",
    "JavaScript",
    "TypeScript",
    "AWS",
    "MongoDB",
    "PostgreSQL",
    "Vue.js",
    "Angular",
    "Express.js",
    "Redis",
    "Kubernetes",
];

/// Option list for one categorical field
pub fn options_for(field: CategoricalField) -> &'static [&'static str] {
    match field {
        CategoricalField::Domain => DOMAINS,
        CategoricalField::Experience => EXPERIENCES,
        CategoricalField::LocationPreference => LOCATION_PREFERENCES,
        CategoricalField::AssessmentType => ASSESSMENT_TYPES,
        CategoricalField::Education => EDUCATIONS,
        CategoricalField::Availability => AVAILABILITIES,
    }
}
