//! Tests for configuration loading.

use media_type::{Config, ErrorKind, FailurePolicy};

#[test]
fn test_config_abort_policy() {
    let config = Config::from_toml_str("failure_policy = \"abort\"").unwrap();
    assert_eq!(config.failure_policy, FailurePolicy::Abort);
}

#[test]
fn test_config_report_policy() {
    let config = Config::from_toml_str("failure_policy = \"report\"").unwrap();
    assert_eq!(config.failure_policy, FailurePolicy::Report);
}

#[test]
fn test_config_defaults() {
    let config = Config::from_toml_str("# nothing set\n").unwrap();
    assert_eq!(config.failure_policy, FailurePolicy::Abort);
}

#[test]
fn test_config_malformed_toml() {
    let err = Config::from_toml_str("failure_policy = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_policy_serializes_snake_case() {
    let json = serde_json::to_string(&FailurePolicy::Report).unwrap();
    assert_eq!(json, "\"report\"");
}
