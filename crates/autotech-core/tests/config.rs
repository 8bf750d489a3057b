use std::fs;
use std::time::Duration;

use autotech_core::config::{ConfigError, Settings};
use autotech_core::maintenance::MaintenanceStatus;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_load_full_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "vin_api_base": "http://localhost:8080/decodevin",
            "user_agent": "garage-terminal",
            "notification_timeout_secs": 8,
            "due_soon_window": 1000,
            "default_model": "cj5"
        }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(
        settings,
        Settings {
            vin_api_base: "http://localhost:8080/decodevin".to_string(),
            user_agent: "garage-terminal".to_string(),
            notification_timeout_secs: 8,
            due_soon_window: 1000,
            default_model: "cj5".to_string(),
        }
    );
    assert_eq!(settings.notification_timeout(), Duration::from_secs(8));
    assert_eq!(settings.vin_decoder().base_url(), "http://localhost:8080/decodevin");
}

#[test]
fn test_configured_window_drives_evaluator() {
    let settings = Settings {
        due_soon_window: 1000,
        ..Settings::default()
    };
    let status = settings
        .due_evaluator()
        .evaluate(2100, autotech_core::catalog::VehicleCatalog::builtin().schedule("prelude"));
    assert!(matches!(status, MaintenanceStatus::DueSoon { remaining: 900, .. }));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = Settings::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
}

#[test]
fn test_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    fs::write(&path, r#"{ "vin_api_base": "not a url" }"#).unwrap();
    assert!(matches!(
        Settings::load(&path).unwrap_err(),
        ConfigError::InvalidValue { ref field, .. } if field == "vin_api_base"
    ));

    fs::write(&path, r#"{ "due_soon_window": -1 }"#).unwrap();
    assert!(matches!(
        Settings::load(&path).unwrap_err(),
        ConfigError::InvalidValue { ref field, .. } if field == "due_soon_window"
    ));
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.notification_timeout(), Duration::from_secs(5));
    assert_eq!(settings.due_soon_window, 500);
    assert_eq!(settings.default_model, "prelude");
    assert!(settings.validate().is_ok());
}
