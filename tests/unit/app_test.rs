//! App startup and launch plan resolution.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use zync::app::App;
use zync::services::url_resolver::BuildMode;
use zync::types::errors::{SettingsError, ShellError};
use zync::types::settings::ShellSettings;
use zync::types::window::WindowSize;

fn app_in(dir: &TempDir) -> (App, PathBuf) {
    let path = dir.path().join("settings.json");
    (App::new(Some(path.to_string_lossy().to_string())), path)
}

#[test]
fn test_first_startup_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);

    app.startup().unwrap();

    assert!(path.exists(), "first run must leave an editable settings file");
    let written: ShellSettings = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, ShellSettings::default());
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);
    fs::write(&path, r#"{"window":{"title":"Zync Dev"}}"#).unwrap();

    app.startup().unwrap();

    assert_eq!(app.settings().window.title, "Zync Dev");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"window":{"title":"Zync Dev"}}"#
    );
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);
    fs::write(&path, "title = Zync").unwrap();

    assert!(matches!(
        app.startup(),
        Err(ShellError::Settings(SettingsError::SerializationError(_)))
    ));
    assert_eq!(*app.settings(), ShellSettings::default());
    assert!(app.launch_plan().is_ok());
}

#[test]
fn test_release_override_plans_bundled_assets() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);
    let assets = dir.path().join("assets");
    let json = serde_json::json!({
        "content": {
            "build_mode": "Release",
            "assets_dir": assets.to_string_lossy(),
        }
    });
    fs::write(&path, json.to_string()).unwrap();
    app.startup().unwrap();

    let plan = app.launch_plan().unwrap();

    assert_eq!(plan.mode, BuildMode::Release);
    assert_eq!(plan.start_url, "qrc:/web/index.html");
    assert_eq!(plan.asset_scheme.as_deref(), Some("qrc"));
    assert_eq!(plan.asset_root, assets);
    assert_eq!(plan.window.title, "Zync");
    assert_eq!(plan.window.size, WindowSize::new(1700.0, 900.0));
}

#[test]
fn test_debug_override_plans_dev_server() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);
    fs::write(&path, r#"{"content":{"build_mode":"Debug"}}"#).unwrap();
    app.startup().unwrap();

    let plan = app.launch_plan().unwrap();

    assert_eq!(plan.mode, BuildMode::Debug);
    assert_eq!(plan.start_url, "http://localhost:5173");
}

#[test]
fn test_invalid_target_fails_launch_plan() {
    let dir = TempDir::new().unwrap();
    let (mut app, path) = app_in(&dir);
    fs::write(
        &path,
        r#"{"content":{"build_mode":"Debug","dev_url":"localhost"}}"#,
    )
    .unwrap();
    app.startup().unwrap();

    assert!(app.launch_plan().is_err());
}
