//! Tests for project record parsing and validation

use crate::error::RecordError;
use crate::record::{parse_records, ProjectRecord, RawProjectRecord};

#[test]
fn test_parse_records_preserves_order() {
    let json = r#"[
        {"title": "A", "imageUrl": "a.png", "altText": "a", "description": "first", "link": "https://a"},
        {"title": "B", "imageUrl": "b.png", "altText": "b", "description": "second", "link": "https://b"}
    ]"#;

    let records = parse_records(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "A");
    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].image_url, "b.png");
}

#[test]
fn test_parse_records_ignores_unknown_fields() {
    let json = r#"[{"id": 1, "title": "T", "imageUrl": "I", "altText": "A", "description": "D", "link": "L"}]"#;

    let records = parse_records(json).unwrap();
    assert_eq!(records, vec![ProjectRecord::new("T", "I", "A", "D", "L")]);
}

#[test]
fn test_parse_records_empty_array() {
    assert!(parse_records("[]").unwrap().is_empty());
}

#[test]
fn test_parse_records_null_is_empty() {
    assert!(parse_records("null").unwrap().is_empty());
    assert!(parse_records("  null\n").unwrap().is_empty());
}

#[test]
fn test_parse_records_rejects_non_json() {
    let result = parse_records("not json at all");
    assert!(matches!(result, Err(RecordError::Json(_))));
}

#[test]
fn test_parse_records_rejects_object() {
    let result = parse_records(r#"{"title": "T"}"#);
    assert!(matches!(result, Err(RecordError::Json(_))));
}

#[test]
fn test_missing_field_is_reported_by_name() {
    let json = r#"[
        {"title": "A", "imageUrl": "a.png", "altText": "a", "description": "first", "link": "https://a"},
        {"title": "B", "imageUrl": "b.png", "description": "second", "link": "https://b"}
    ]"#;

    match parse_records(json) {
        Err(RecordError::MissingField { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "altText");
        }
        other => panic!("Expected MissingField, got: {other:?}"),
    }
}

#[test]
fn test_null_field_counts_as_missing() {
    let json = r#"[{"title": "T", "imageUrl": null, "altText": "A", "description": "D", "link": "L"}]"#;

    let err = parse_records(json).unwrap_err();
    assert_eq!(err.to_string(), "project 0: missing field `imageUrl`");
}

#[test]
fn test_blank_title_rejected() {
    let raw = RawProjectRecord {
        title: Some("   ".to_string()),
        image_url: Some("I".to_string()),
        alt_text: Some("A".to_string()),
        description: Some("D".to_string()),
        link: Some("L".to_string()),
    };

    match raw.validate(3) {
        Err(RecordError::BlankField { index, field }) => {
            assert_eq!(index, 3);
            assert_eq!(field, "title");
        }
        other => panic!("Expected BlankField, got: {other:?}"),
    }
}

#[test]
fn test_empty_description_allowed() {
    let raw = RawProjectRecord {
        title: Some("T".to_string()),
        image_url: Some("I".to_string()),
        alt_text: Some(String::new()),
        description: Some(String::new()),
        link: Some("L".to_string()),
    };

    let record = raw.validate(0).unwrap();
    assert_eq!(record.description, "");
}

#[test]
fn test_serializes_camel_case() {
    let record = ProjectRecord::new("T", "I", "A", "D", "L");
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"imageUrl\":\"I\""));
    assert!(json.contains("\"altText\":\"A\""));
    assert!(!json.contains("image_url"));
}
