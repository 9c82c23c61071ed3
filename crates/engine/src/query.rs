//! Query State: the user's current search and filter intent.
//!
//! A `QueryState` is a plain value. Every update returns a new value rather
//! than mutating in place, so a controller can swap it atomically and use
//! it as a memoization key.

use roster::CategoricalField;
use roster::catalog::ALL_OPTION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Selection for one categorical field.
///
/// Serialized as a bare string; `"All"` is the sentinel for no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Exact(String),
}

impl Selection {
    pub fn exact(value: impl Into<String>) -> Self {
        Selection::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The required value, if this selection constrains the field
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Exact(value) => Some(value),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL_OPTION {
            Selection::All
        } else {
            Selection::Exact(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL_OPTION.to_string(),
            Selection::Exact(value) => value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(ALL_OPTION))
    }
}

/// One selection per categorical field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldFilters {
    pub domain: Selection,
    pub experience: Selection,
    pub location_preference: Selection,
    pub assessment_type: Selection,
    pub education: Selection,
    pub availability: Selection,
}

impl FieldFilters {
    pub fn get(&self, field: CategoricalField) -> &Selection {
        match field {
            CategoricalField::Domain => &self.domain,
            CategoricalField::Experience => &self.experience,
            CategoricalField::LocationPreference => &self.location_preference,
            CategoricalField::AssessmentType => &self.assessment_type,
            CategoricalField::Education => &self.education,
            CategoricalField::Availability => &self.availability,
        }
    }

    pub fn set(&mut self, field: CategoricalField, selection: Selection) {
        let slot = match field {
            CategoricalField::Domain => &mut self.domain,
            CategoricalField::Experience => &mut self.experience,
            CategoricalField::LocationPreference => &mut self.location_preference,
            CategoricalField::AssessmentType => &mut self.assessment_type,
            CategoricalField::Education => &mut self.education,
            CategoricalField::Availability => &mut self.availability,
        };
        *slot = selection;
    }

    /// Fields with a concrete selection, in filter-panel order
    pub fn active(&self) -> impl Iterator<Item = (CategoricalField, &str)> + '_ {
        CategoricalField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).value().map(|value| (field, value)))
    }
}

/// Free-text term, per-field selections and required skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryState {
    pub search_term: String,
    pub filters: FieldFilters,
    /// Any one of these skills satisfies the skill constraint
    pub skills: BTreeSet<String>,
}

impl QueryState {
    /// The unconstrained query: everything is visible
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filter(mut self, field: CategoricalField, selection: impl Into<Selection>) -> Self {
        self.filters.set(field, selection.into());
        self
    }

    /// Add the skill if absent, remove it if present
    pub fn with_skill_toggled(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.skills.remove(&skill) {
            self.skills.insert(skill);
        }
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

    /// Reset every field selection and the skill set, keeping the search term
    pub fn cleared_filters(self) -> Self {
        Self {
            search_term: self.search_term,
            ..Self::default()
        }
    }

    /// True when no clause constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.skills.is_empty()
            && self.filters.active().next().is_none()
    }
}
