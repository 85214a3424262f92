//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, partial files and persistence.

use std::fs;

use tempfile::TempDir;
use zync::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use zync::types::errors::SettingsError;
use zync::types::settings::{BuildMode, ShellSettings};

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the shell behaves exactly like the hard-coded
/// original: "Zync", 1700x900, dev server and `qrc:` index.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
    assert_eq!(settings.window.title, "Zync");
    assert_eq!((settings.window.width, settings.window.height), (1700, 900));
    assert_eq!(settings.content.dev_url, "http://localhost:5173");
    assert_eq!(settings.content.bundled_url, "qrc:/web/index.html");
    assert_eq!(settings.content.assets_dir, None);
    assert_eq!(settings.content.build_mode, None);
}

#[test]
fn test_save_then_load_in_new_engine() {
    let dir = TempDir::new().unwrap();
    engine_in_temp(&dir).save().unwrap();

    let mut engine2 = engine_in_temp(&dir);
    assert!(engine2.config_exists());
    assert_eq!(engine2.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_partial_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(
        engine.get_config_path(),
        r#"{"window":{"width":1280},"content":{"build_mode":"Debug"}}"#,
    )
    .unwrap();

    let settings = engine.load().unwrap();

    assert_eq!(settings.window.width, 1280);
    assert_eq!(settings.window.height, 900);
    assert_eq!(settings.window.title, "Zync");
    assert_eq!(settings.content.build_mode, Some(BuildMode::Debug));
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(engine.get_config_path(), "{ invalid json }").unwrap();

    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_wrong_field_type_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(engine.get_config_path(), r#"{"window":{"width":"wide"}}"#).unwrap();

    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_unknown_build_mode_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(
        engine.get_config_path(),
        r#"{"content":{"build_mode":"Profile"}}"#,
    )
    .unwrap();

    assert!(engine.load().is_err());
}
