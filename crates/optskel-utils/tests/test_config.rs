//! Tests for configuration handling.

use optskel_utils::{CONFIG_FILE, Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_new() {
    let config = Config::new("cmdline");
    assert_eq!(config.parser.name, "cmdline");
    assert!(config.parser.handle_error);
    assert_eq!(config.parser.indent, 0);
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);

    let mut config = Config::new("cmdline_parser");
    config.parser.indent = 2;
    config.parser.handle_error = false;
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_defaults_for_missing_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);
    fs::write(&config_path, "[parser]\nname = \"cmdline\"\n").unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded.parser.name, "cmdline");
    assert!(loaded.parser.handle_error);
    assert_eq!(loaded.parser.indent, 0);
}

#[test]
fn test_config_load_rejects_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);
    fs::write(&config_path, "[parser]\nindent = -1\n").unwrap();

    assert!(Config::load(&config_path).is_err());
}

#[test]
fn test_config_find_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();

    Config::new("find_test")
        .save(project_dir.join(CONFIG_FILE))
        .unwrap();

    let sub_dir = project_dir.join("src").join("gen");
    fs::create_dir_all(&sub_dir).unwrap();

    let (found_config, found_dir) = Config::find_from(&sub_dir).unwrap();
    assert_eq!(found_config.parser.name, "find_test");
    assert_eq!(found_dir, project_dir);
}

#[test]
fn test_config_validate() {
    assert!(Config::new("cmdline").validate().is_ok());

    let err = Config::new("cmd-line").validate().unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE));
    assert!(format!("{err:#}").contains("contains '-'"));
}

#[test]
fn test_config_find_optional_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let isolated = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&isolated).unwrap();

    assert!(Config::find_optional_from(&isolated).unwrap().is_none());
}

#[test]
fn test_config_find_optional_reports_broken_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").unwrap();

    assert!(Config::find_optional_from(temp_dir.path()).is_err());
}
