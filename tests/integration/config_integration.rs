//! Integration tests for building managers from configuration

use super::test_utils::record;
use paramdir::config::{ConfigLoader, ManagerConfig};
use paramdir::{ParamsError, ParamsManager};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_manager_from_config_file_loads_named_default() {
    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().join("params");
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("base.json"), r#"{"a": 1, "b": 2}"#).unwrap();

    let config_file = temp_dir.path().join("paramdir.toml");
    std::fs::write(
        &config_file,
        format!(
            "folder = {:?}\ndefault_name = \"base\"\n",
            folder.to_string_lossy()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let manager = ParamsManager::from_config(&config).unwrap();

    assert_eq!(manager.folder(), folder.as_path());
    assert_eq!(
        manager.default_params().unwrap(),
        record(json!({"a": 1, "b": 2}))
    );
    assert!(manager.set_params("x", &record(json!({"a": 5})), false).unwrap());
}

#[test]
fn test_manager_from_config_without_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = ManagerConfig {
        folder: temp_dir.path().to_path_buf(),
        ..ManagerConfig::default()
    };

    let manager = ParamsManager::from_config(&config).unwrap();
    assert!(manager.default_params().is_none());
}

#[test]
fn test_manager_from_config_missing_default_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = ManagerConfig {
        folder: temp_dir.path().to_path_buf(),
        default_name: Some("base".to_string()),
        ..ManagerConfig::default()
    };

    assert!(matches!(
        ParamsManager::from_config(&config),
        Err(ParamsError::NotFound { .. })
    ));
}

#[test]
fn test_manager_from_invalid_config_fails() {
    let config = ManagerConfig {
        folder: PathBuf::from("params"),
        default_name: Some("a/b".to_string()),
        ..ManagerConfig::default()
    };

    assert!(matches!(
        ParamsManager::from_config(&config),
        Err(ParamsError::Config(_))
    ));
}
