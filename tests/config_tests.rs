//! Tests for settings file handling
//!
//! These tests verify:
//! - Save/load through a real file on disk
//! - Partial and empty files fall back to defaults
//! - Unreadable or malformed files produce descriptive errors

use calctui::config_file::AppConfig;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_then_load_preserves_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calctui.json");

    let config = AppConfig {
        poll_interval_ms: 120,
        show_keypad: false,
        mouse_support: false,
        comma_decimal: false,
    };
    config.save_to_file(&path).unwrap();

    let loaded = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calctui.json");
    AppConfig::default().save_to_file(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"poll_interval_ms\": 50"));
    assert!(content.contains("\"show_keypad\": true"));
}

#[test]
fn test_empty_object_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calctui.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(AppConfig::load_from_file(&path).unwrap(), AppConfig::default());
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_missing_file_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_invalid_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ poll_interval_ms: ").unwrap();

    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parse"));
}

#[test]
fn test_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typed.json");
    fs::write(&path, r#"{ "show_keypad": "yes" }"#).unwrap();

    assert!(AppConfig::load_from_file(&path).is_err());
}

#[test]
fn test_loaded_file_can_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slow.json");
    fs::write(&path, r#"{ "poll_interval_ms": 5000 }"#).unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}
