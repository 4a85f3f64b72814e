//! Tests for review configuration

use std::fs;

use nbreview::config::{CONFIG_FILE, ConfigError, ReviewConfig};
use nbreview::core::services::{DEFAULT_MARKER, MatchScope, PreamblePolicy, TaskHeader};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = ReviewConfig::default();
    assert_eq!(config.expected_tasks, 3);
    assert_eq!(config.marker, DEFAULT_MARKER);
    assert_eq!(config.header_pattern, TaskHeader::DEFAULT_PATTERN);
    assert_eq!(config.preamble, PreamblePolicy::Discard);
    assert_eq!(config.match_scope, MatchScope::AnyType);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ReviewConfig::from_toml("expected_tasks = 5\npreamble = \"attach_to_first\"\n").unwrap();
    assert_eq!(config.expected_tasks, 5);
    assert_eq!(config.preamble, PreamblePolicy::AttachToFirst);
    assert_eq!(config.marker, DEFAULT_MARKER);
}

#[test]
fn test_full_toml() {
    let toml = r#"
expected_tasks = 2
marker = "[CHANGED]"
header_pattern = '##\s*Task\s*(\d+)'
preamble = "discard"
match_scope = "same_type"
"#;
    let config = ReviewConfig::from_toml(toml).unwrap();
    assert_eq!(config.marker, "[CHANGED]");
    assert_eq!(config.header_pattern, r"##\s*Task\s*(\d+)");
    assert_eq!(config.match_scope, MatchScope::SameType);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_enum_value_rejected() {
    assert!(ReviewConfig::from_toml("preamble = \"keep\"").is_err());
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ReviewConfig::discover(temp.path()).unwrap();
    assert_eq!(config, ReviewConfig::default());
}

#[test]
fn test_discover_reads_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE), "expected_tasks = 7\n").unwrap();

    let config = ReviewConfig::discover(temp.path()).unwrap();
    assert_eq!(config.expected_tasks, 7);
}

#[test]
fn test_load_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "expected_tasks = \"many\"").unwrap();

    assert!(matches!(ReviewConfig::load(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    assert!(matches!(ReviewConfig::load(&path), Err(ConfigError::Io { .. })));
}
