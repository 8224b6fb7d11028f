//! Parse sanitized model output into normalized records

use crate::error::ExtractorError;
use sanctoral_domain::Record;
use serde_json::Value;
use tracing::warn;

/// Parse a sanitized response string as a JSON array of records.
///
/// Each array element normalizes through the tolerant `Record` schema:
/// missing `lieu`/`epoque`/`nom` default to `""`, missing or empty title
/// data defaults to `["aucun"]`, unknown keys are dropped. Elements that are
/// not JSON objects (or whose fields have the wrong type) are warned about
/// and skipped.
///
/// # Errors
///
/// Returns `InvalidFormat` when the string is not valid JSON or the top
/// level is not an array. The pipeline treats that as a recoverable
/// per-document failure.
pub fn parse_records(response: &str) -> Result<Vec<Record>, ExtractorError> {
    let json: Value = serde_json::from_str(response)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| ExtractorError::InvalidFormat("expected a JSON array".to_string()))?;

    let mut records = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            warn!("entry {} is not a JSON object, skipping", idx);
            continue;
        }
        match serde_json::from_value::<Record>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(e) => warn!("failed to normalize entry {}: {}", idx, e),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctoral_domain::DEFAULT_TITLE;

    #[test]
    fn test_parse_full_entries() {
        let response = r#"[
            {"lieu": "Rome", "epoque": "IIIe siècle", "nom": "Laurent", "titre": "diacre"},
            {"lieu": "", "epoque": "", "nom": "Agnès", "titre": "vierge"}
        ]"#;

        let records = parse_records(response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nom, "Laurent");
        assert_eq!(records[0].titres, vec!["diacre"]);
        assert_eq!(records[1].lieu, "");
    }

    #[test]
    fn test_missing_title_gets_default() {
        let response = r#"[{"lieu": "Lyon", "epoque": "IIe siècle", "nom": "Blandine"}]"#;

        let records = parse_records(response).unwrap();
        assert_eq!(records[0].titres, vec![DEFAULT_TITLE]);
    }

    #[test]
    fn test_titles_list_variant() {
        let response = r#"[{"nom": "Laurent", "titres": ["diacre", "martyr"]}]"#;

        let records = parse_records(response).unwrap();
        assert_eq!(records[0].titres, vec!["diacre", "martyr"]);
    }

    #[test]
    fn test_empty_array() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_records("this is not JSON");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_non_array_is_an_error() {
        let result = parse_records(r#"{"nom": "Laurent"}"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let response = r#"[{"nom": "Laurent"}, "stray string", 42, {"nom": "Agnès"}]"#;

        let records = parse_records(response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nom, "Laurent");
        assert_eq!(records[1].nom, "Agnès");
    }

    #[test]
    fn test_wrongly_typed_entry_is_skipped() {
        let response = r#"[{"nom": 42}, {"nom": "Agnès"}]"#;

        let records = parse_records(response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nom, "Agnès");
    }
}
