//! Tests for the config module

use super::*;
use crate::error::CliptreeError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(!config.browser.show_hidden);
    assert_eq!(config.apply.temp_suffix, ".cliptree_tmp");
    assert!(config.apply.confirm);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[browser]
show_hidden = true

[apply]
temp_suffix = ".swap"
confirm = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert!(config.browser.show_hidden);
    assert_eq!(config.apply.temp_suffix, ".swap");
    assert!(!config.apply.confirm);
}

#[test]
fn test_config_partial_sections_use_defaults() {
    let config: Config = toml::from_str("[apply]\nconfirm = false\n").unwrap();

    assert!(!config.browser.show_hidden);
    assert_eq!(config.apply.temp_suffix, ".cliptree_tmp");
    assert!(!config.apply.confirm);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".cliptree.toml");
    fs::write(&path, "[browser]\nshow_hiden = true\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(!config.browser.show_hidden);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "show_hiden");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("show_hidden"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".cliptree.toml");
    fs::write(&path, "[browser\nshow_hidden = ").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, CliptreeError::InvalidConfig { .. }));
}

#[test]
fn test_wrong_value_type_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".cliptree.toml");
    fs::write(&path, "[apply]\nconfirm = \"sometimes\"\n").unwrap();

    assert!(Config::load_with_warnings(&path).is_err());
}

#[test]
fn test_first_existing_candidate_wins() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    fs::write(&first, "[apply]\ntemp_suffix = \".first\"\n").unwrap();
    fs::write(&second, "[apply]\ntemp_suffix = \".second\"\n").unwrap();

    let loaded = load_from_candidates(&[missing, first.clone(), second]).unwrap();

    assert_eq!(loaded.source, Some(first));
    assert_eq!(loaded.config.apply.temp_suffix, ".first");
}

#[test]
fn test_no_candidates_gives_defaults() {
    let loaded = load_from_candidates(&[PathBuf::from("/nonexistent/cliptree.toml")]).unwrap();
    assert!(loaded.source.is_none());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_project_config_is_first_candidate() {
    let root = PathBuf::from("/clips");
    let candidates = config_candidates(&root);
    assert_eq!(candidates[0], root.join(".cliptree.toml"));
}

#[test]
fn test_overrides_from_lookup() {
    let lookup = |name: &str| match name {
        "CLIPTREE_SHOW_HIDDEN" => Some("yes".to_string()),
        "CLIPTREE_TEMP_SUFFIX" => Some(".env_tmp".to_string()),
        "CLIPTREE_CONFIRM" => Some("0".to_string()),
        _ => None,
    };

    let config = with_overrides_from(Config::default(), lookup);

    assert!(config.browser.show_hidden);
    assert_eq!(config.apply.temp_suffix, ".env_tmp");
    assert!(!config.apply.confirm);
}

#[test]
fn test_invalid_override_keeps_value() {
    let lookup = |name: &str| (name == "CLIPTREE_CONFIRM").then(|| "perhaps".to_string());

    let config = with_overrides_from(Config::default(), lookup);

    assert!(config.apply.confirm);
}

#[test]
fn test_config_derives_engine_options() {
    let mut config = Config::default();
    config.browser.show_hidden = true;
    config.apply.temp_suffix = ".swap".to_string();

    assert!(config.scan_options().show_hidden);
    assert_eq!(config.apply_options().temp_suffix, ".swap");
}
