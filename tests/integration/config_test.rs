//! Configuration Integration Tests
//!
//! File plus override layering and persistence.

use std::path::PathBuf;

use requirements_analyzer::{AnalyzerConfig, AnalyzerError, ConfigService, SettingsUpdate};

#[test]
fn test_file_then_overrides() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"model": "gpt-4o", "max_tokens": 900, "output_dir": "exports"}"#,
    )
    .unwrap();

    let config = ConfigService::load_layered(
        Some(&path),
        SettingsUpdate {
            max_tokens: Some(1500),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.max_tokens, 1500);
    assert_eq!(config.output_dir, PathBuf::from("exports"));
    assert_eq!(config.temperature, AnalyzerConfig::default().temperature);
}

#[test]
fn test_out_of_range_budget_rejected() {
    let err = ConfigService::load_layered(
        None,
        SettingsUpdate {
            max_tokens: Some(10_000),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AnalyzerError::Validation(_)));
}

#[test]
fn test_save_then_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");
    let config = AnalyzerConfig {
        model: "gpt-4o".to_string(),
        prompts_dir: Some(PathBuf::from("prompts")),
        ..Default::default()
    };

    ConfigService::save_to_file(&path, &config).unwrap();
    let loaded = ConfigService::load_layered(Some(&path), SettingsUpdate::default()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ConfigService::load_layered(Some(&path), SettingsUpdate::default()).unwrap_err();
    assert!(matches!(err, AnalyzerError::Serialization(_)));
}
