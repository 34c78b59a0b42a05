//! Tests for `MediaType` as a proof-of-validity token.

use media_type::{MediaType, parse_media_type};
use serde::{Deserialize, Serialize};

use crate::common::{INVALID, VALID};

#[derive(Debug, Serialize, Deserialize)]
struct Attachment {
    name: String,
    content_type: MediaType,
}

fn describe(content_type: &MediaType) -> String {
    content_type.parse().essence()
}

#[test]
fn test_stringifies_to_original_input() {
    let media_type = MediaType::new("text/html; charset=UTF-8").unwrap();
    assert_eq!(media_type.to_string(), "text/html; charset=UTF-8");
    assert_eq!(format!("{media_type}"), "text/html; charset=UTF-8");
}

#[test]
fn test_only_valid_inputs_construct() {
    for input in VALID {
        let media_type = MediaType::new(*input).unwrap();
        assert_eq!(media_type.as_str(), *input);
    }
    for input in INVALID {
        assert!(MediaType::new(*input).is_err(), "{input:?} should not construct");
    }
}

#[test]
fn test_parse_matches_free_function() {
    for input in VALID {
        let media_type = MediaType::new(*input).unwrap();
        assert_eq!(media_type.parse(), parse_media_type(input).unwrap());
        assert_eq!(media_type.parse(), media_type.parse());
    }
}

#[test]
fn test_passed_by_reference_without_revalidation() {
    let media_type: MediaType = "application/vnd.api+json; ext=bulk".parse().unwrap();
    assert_eq!(describe(&media_type), "application/vnd.api+json");
}

#[test]
fn test_deserialized_field_is_validated() {
    let json = r#"{"name":"report.pdf","content_type":"application/pdf"}"#;
    let attachment: Attachment = serde_json::from_str(json).unwrap();
    assert_eq!(attachment.name, "report.pdf");
    assert_eq!(attachment.content_type.as_str(), "application/pdf");

    let bad = r#"{"name":"report.pdf","content_type":"application"}"#;
    let err = serde_json::from_str::<Attachment>(bad).unwrap_err();
    assert!(err.to_string().contains("not a media type"));
}

#[test]
fn test_serialized_as_plain_string() {
    let attachment = Attachment {
        name: "a.txt".to_string(),
        content_type: MediaType::new("text/plain").unwrap(),
    };
    let json = serde_json::to_string(&attachment).unwrap();
    assert_eq!(json, r#"{"name":"a.txt","content_type":"text/plain"}"#);
}

#[test]
fn test_usable_as_map_key() {
    let mut seen = std::collections::HashSet::new();
    seen.insert(MediaType::new("text/plain").unwrap());
    assert!(seen.contains(&MediaType::new("text/plain").unwrap()));
    assert!(!seen.contains(&MediaType::new("Text/Plain").unwrap()));
}
