//! Parser for JSON roster documents.
//!
//! Two document shapes are accepted:
//! - a bare array of candidates: `[{...}, {...}]`
//! - an export envelope: `{"candidates": [{...}, {...}]}`

use crate::error::{Result, RosterError};
use crate::store::CandidateStore;
use crate::types::Candidate;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    Bare(Vec<Candidate>),
    Envelope { candidates: Vec<Candidate> },
}

/// Parse a roster document.
///
/// `origin` names the document in error messages (usually a file name).
pub fn parse_roster(json: &str, origin: &str) -> Result<Vec<Candidate>> {
    if json.trim().is_empty() {
        return Err(RosterError::ParseError {
            origin: origin.to_string(),
            reason: "document is empty".to_string(),
        });
    }

    // Check syntax first so malformed JSON surfaces as a JSON error with a position
    let value: serde_json::Value = serde_json::from_str(json)?;

    let document = RosterDocument::deserialize(value).map_err(|e| RosterError::ParseError {
        origin: origin.to_string(),
        reason: format!("not a candidate list: {}", e),
    })?;

    Ok(match document {
        RosterDocument::Bare(candidates) => candidates,
        RosterDocument::Envelope { candidates } => candidates,
    })
}

/// Parse and validate a roster document into a `CandidateStore`
pub fn store_from_json(json: &str, origin: &str) -> Result<CandidateStore> {
    let store = CandidateStore::new(parse_roster(json, origin)?)?;
    info!("Loaded {} candidates from {}", store.len(), origin);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CANDIDATES: &str = r#"[
        {"id": "1", "name": "John Doe", "email": "john@x.com",
         "domain": "Frontend Development", "experience": "2-3 years",
         "education": "B.Tech", "availability": "Immediate", "skills": ["React"]},
        {"id": "2", "name": "Jane Smith", "email": "jane@x.com",
         "domain": "Backend Development", "experience": "3-5 years",
         "education": "M.Tech", "availability": "30 days", "skills": ["Node.js"]}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let candidates = parse_roster(TWO_CANDIDATES, "inline").unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].name, "Jane Smith");
    }

    #[test]
    fn test_parse_envelope() {
        let json = format!(r#"{{"candidates": {}}}"#, TWO_CANDIDATES);
        let candidates = parse_roster(&json, "inline").unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_parse_empty_document() {
        let err = parse_roster("   ", "roster.json").unwrap_err();
        assert!(matches!(err, RosterError::ParseError { ref origin, .. } if origin == "roster.json"));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_roster("[{", "roster.json").unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_roster(r#"{"students": []}"#, "roster.json").unwrap_err();
        assert!(matches!(err, RosterError::ParseError { .. }));
    }

    #[test]
    fn test_store_from_json() {
        let store = store_from_json(TWO_CANDIDATES, "inline").unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("1"));
    }

    #[test]
    fn test_store_from_json_validates() {
        let json = r#"[
            {"id": "1", "name": "A", "email": "a@x.com", "domain": "QA Tester",
             "experience": "Fresher", "education": "BCA", "availability": "Immediate"},
            {"id": "1", "name": "B", "email": "b@x.com", "domain": "QA Tester",
             "experience": "Fresher", "education": "BCA", "availability": "Immediate"}
        ]"#;
        let err = store_from_json(json, "roster.json").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { ref id } if id == "1"));
    }
}
