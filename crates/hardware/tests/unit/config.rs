//! # Configuration Tests
//!
//! Defaults, partial JSON deserialization and file loading.

use roi_harness_core::common::HarnessError;
use roi_harness_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_ticks);
    assert_eq!(config.general.max_ticks, 1_000_000);
    assert!(!config.driver.idle_serial_in);
    assert!(config.stats.sections.is_empty());
}

#[test]
fn test_general_config_defaults() {
    let general = GeneralConfig::default();
    assert!(!general.trace_ticks);
    assert_eq!(general.max_ticks, 1_000_000);
}

#[test]
fn test_driver_config_defaults() {
    assert!(!DriverConfig::default().idle_serial_in);
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert!(!config.general.trace_ticks);
    assert_eq!(config.general.max_ticks, 1_000_000);
    assert!(!config.driver.idle_serial_in);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{"general": {"trace_ticks": true}}"#).unwrap();
    assert!(config.general.trace_ticks);
    assert_eq!(config.general.max_ticks, 1_000_000);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "general": { "trace_ticks": false, "max_ticks": 385 },
        "driver": { "idle_serial_in": true },
        "stats": { "sections": ["protocol", "lines"] }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(config.general.max_ticks, 385);
    assert!(config.driver.idle_serial_in);
    assert_eq!(config.stats.sections, vec!["protocol", "lines"]);
}

#[test]
fn test_wrong_type_is_json_error() {
    let err = Config::from_json_str(r#"{"general": {"max_ticks": "lots"}}"#).unwrap_err();
    assert!(matches!(err, HarnessError::Json(_)));
    assert!(err.to_string().starts_with("invalid JSON: "));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harness.json");
    std::fs::write(&path, r#"{"driver": {"idle_serial_in": true}}"#).unwrap();
    let config = Config::from_file(&path).unwrap();
    assert!(config.driver.idle_serial_in);
    assert!(!config.general.trace_ticks);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}
