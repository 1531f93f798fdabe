//! Configuration module tests
//!
//! Test cases for configuration file and environment variable support:
//! 1. Load config from TOML file
//! 2. Environment variable override
//! 3. Default values
//! 4. Priority: CLI > ENV > Config > Default

use kbsearch::config::app_config::AppConfig;
use kbsearch::session::{Key, KeyEvent};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.catalog_dir(), "content");
    assert_eq!(config.max_results(), 20);
}

#[test]
fn test_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    std::fs::write(
        &config_path,
        r#"
catalog_dir = "/custom/content"
max_results = 10
open_hotkey = "ctrl+p"
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&config_path).unwrap();
    assert_eq!(config.catalog_dir(), "/custom/content");
    assert_eq!(config.max_results(), 10);
    assert_eq!(config.open_hotkey(), "ctrl+p");
}

#[test]
fn test_partial_toml_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "max_results = 5\n").unwrap();

    let config = AppConfig::from_file(&config_path).unwrap();
    assert_eq!(config.catalog_dir(), "content");
    assert_eq!(config.max_results(), 5);
    assert_eq!(config.open_hotkey(), "mod+k");
}

#[test]
fn test_toml_max_results_above_cap_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "max_results = 25\n").unwrap();

    let config = AppConfig::from_file(&config_path).unwrap();
    assert_eq!(config.max_results(), 25);
    assert!(config.validate().is_err());
}

#[test]
fn test_env_override() {
    std::env::set_var("KBSEARCH_CATALOG_DIR", "/env/content");

    let config = AppConfig::from_env();
    assert_eq!(config.catalog_dir(), "/env/content");

    std::env::remove_var("KBSEARCH_CATALOG_DIR");
}

#[test]
fn test_merge_priority() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    std::fs::write(
        &config_path,
        r#"
open_hotkey = "ctrl+k"
max_results = 15
"#,
    )
    .unwrap();

    std::env::set_var("KBSEARCH_OPEN_HOTKEY", "alt+s");

    let file_config = AppConfig::from_file(&config_path).unwrap();
    let env_config = AppConfig::from_env();
    let merged = file_config.merge_with(&env_config);

    // ENV should override file
    assert_eq!(merged.open_hotkey(), "alt+s");
    // File value should be preserved where ENV is not set
    assert_eq!(merged.max_results(), 15);

    std::env::remove_var("KBSEARCH_OPEN_HOTKEY");
}

#[test]
fn test_config_with_cli_override() {
    let base_config = AppConfig::default();
    let with_override = base_config.with_catalog_dir("/cli/content");

    assert_eq!(with_override.catalog_dir(), "/cli/content");
}

#[test]
fn test_hotkey_from_config() {
    let config = AppConfig::default().with_open_hotkey("ctrl+p");
    let hotkey = config.hotkey().unwrap();

    assert!(hotkey.matches(&KeyEvent::char('p').with_ctrl()));
    assert!(!hotkey.matches(&KeyEvent::new(Key::Escape)));
}

#[test]
fn test_config_serialization() {
    let config = AppConfig::default()
        .with_catalog_dir("/test/content")
        .with_max_results(15);

    let toml_str = config.to_toml().unwrap();
    assert!(toml_str.contains("catalog_dir"));
    assert!(toml_str.contains("/test/content"));
    assert!(toml_str.contains("open_hotkey"));
}

#[test]
fn test_missing_file_returns_error() {
    let result = AppConfig::from_file(&PathBuf::from("/nonexistent/config.toml"));
    assert!(result.is_err());
}
