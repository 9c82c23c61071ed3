//! Exact-match filter for one categorical field.

use crate::traits::Filter;
use roster::{Candidate, CategoricalField};

/// Keeps candidates whose value for `field` equals `value` exactly.
///
/// ## Algorithm
/// Case-sensitive string equality, not substring. A candidate that does
/// not carry the field never matches.
pub struct FieldFilter {
    field: CategoricalField,
    value: String,
    name: String,
}

impl FieldFilter {
    pub fn new(field: CategoricalField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            name: format!("FieldFilter({})", field),
        }
    }

    pub fn field(&self) -> CategoricalField {
        self.field
    }
}

impl Filter for FieldFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        candidate.categorical(self.field) == Some(self.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let candidate = Candidate::new("1", "A", "a@x.com").with_domain("Frontend Development");

        assert!(FieldFilter::new(CategoricalField::Domain, "Frontend Development").matches(&candidate));
    }

    #[test]
    fn test_case_sensitive() {
        let candidate = Candidate::new("1", "A", "a@x.com").with_domain("Frontend Development");

        assert!(!FieldFilter::new(CategoricalField::Domain, "frontend development").matches(&candidate));
    }

    #[test]
    fn test_not_substring() {
        let candidate = Candidate::new("1", "A", "a@x.com").with_domain("Frontend Development");

        assert!(!FieldFilter::new(CategoricalField::Domain, "Frontend").matches(&candidate));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let candidate = Candidate::new("1", "A", "a@x.com");
        let filter = FieldFilter::new(CategoricalField::AssessmentType, "Technical Test");

        assert!(!filter.matches(&candidate));
    }

    #[test]
    fn test_name_includes_field() {
        let filter = FieldFilter::new(CategoricalField::LocationPreference, "Remote");
        assert_eq!(filter.name(), "FieldFilter(locationPreference)");
        assert_eq!(filter.field(), CategoricalField::LocationPreference);
    }
}
