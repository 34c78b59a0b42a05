//! Tests for error construction, classification and display.

use media_type::{Error, ErrorKind, ParameterError, parse_media_type};

#[test]
fn test_not_a_media_type_carries_input() {
    let err = parse_media_type("text/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAMediaType);
    assert_eq!(err.input(), Some("text/"));
    assert!(!err.is_internal_defect());
}

#[test]
fn test_not_a_media_type_message_names_grammar() {
    let err = Error::not_a_media_type("text");
    let message = err.to_string();
    assert!(message.contains("'text'"));
    assert!(message.contains(media_type::error::EXPECTED_GRAMMAR));
}

#[test]
fn test_regex_is_broken() {
    let err = Error::regex_is_broken("subtype group missing");
    assert_eq!(err.kind(), ErrorKind::MatchRegexIsBroken);
    assert!(err.is_internal_defect());
    assert_eq!(err.input(), None);
    match &err {
        Error::MatchRegexIsBroken { details } => assert_eq!(details, "subtype group missing"),
        _ => unreachable!("Expected MatchRegexIsBroken"),
    }
}

#[test]
fn test_config_error() {
    let err = Error::config("bad policy");
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.to_string(), "Configuration error: bad policy");
}

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let err = Error::not_a_media_type("x");
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::not_a_media_type("y"));
}

#[test]
fn test_parameter_error_display() {
    assert_eq!(ParameterError::EmptyBlock.to_string(), "empty parameter block");
    assert_eq!(
        ParameterError::UnterminatedQuote {
            segment: "a=\"b".to_string()
        }
        .to_string(),
        "parameter 'a=\"b' has an unterminated quoted value"
    );
    assert_eq!(
        ParameterError::EmptyKey {
            segment: "=b".to_string()
        }
        .to_string(),
        "parameter '=b' has an empty name"
    );
}
