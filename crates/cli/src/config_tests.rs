// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let config = Config::new(Some(" alice "), None).unwrap();
    let rung_dir = init_rung_dir(temp.path(), &config).unwrap();

    let loaded = Config::load(&rung_dir).unwrap();
    assert_eq!(loaded.owner.as_deref(), Some("alice"));
    assert_eq!(loaded.busy_timeout(), Duration::from_millis(5000));
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_owner() {
    assert!(Config::new(Some("   "), None).is_err());
}

#[test]
fn test_already_initialized() {
    let temp = TempDir::new().unwrap();
    init_rung_dir(temp.path(), &Config::default()).unwrap();

    let err = init_rung_dir(temp.path(), &Config::default()).unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}

#[test]
fn test_init_succeeds_with_empty_rung_dir() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join(".rung")).unwrap();

    let rung_dir = init_rung_dir(temp.path(), &Config::default()).unwrap();
    assert!(rung_dir.join("config.toml").exists());
}

#[test]
fn test_find_rung_dir_walks_up() {
    let temp = TempDir::new().unwrap();
    let rung_dir = init_rung_dir(temp.path(), &Config::default()).unwrap();
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_rung_dir_from(&nested).unwrap(), rung_dir);
}

#[test]
fn test_find_rung_dir_missing() {
    let temp = TempDir::new().unwrap();
    let err = find_rung_dir_from(temp.path()).unwrap_err();
    assert!(matches!(err, Error::NotInitialized));
}

#[test]
fn test_db_path_default() {
    let rung_dir = PathBuf::from("/project/.rung");
    let path = get_db_path(&rung_dir, &Config::default());
    assert_eq!(path, PathBuf::from("/project/.rung/items.db"));
}

#[test]
fn test_db_path_relative_and_absolute() {
    let rung_dir = PathBuf::from("/project/.rung");
    let relative = Config::new(None, Some("data/list.db".into())).unwrap();
    assert_eq!(
        get_db_path(&rung_dir, &relative),
        PathBuf::from("/project/data/list.db")
    );

    let absolute = Config::new(None, Some("/var/lists/list.db".into())).unwrap();
    assert_eq!(
        get_db_path(&rung_dir, &absolute),
        PathBuf::from("/var/lists/list.db")
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let config: Config = toml::from_str("owner = \"bob\"\n").unwrap();
    assert_eq!(config.owner.as_deref(), Some("bob"));
    assert_eq!(config.database, None);
    assert_eq!(config.busy_timeout_ms, 5000);
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().starts_with("config error: failed to read config"));
}

#[test]
fn test_config_load_malformed() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "busy_timeout_ms = \"soon\"").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_resolve_owner() {
    let config = Config::new(Some("alice"), None).unwrap();
    assert_eq!(config.resolve_owner(None).unwrap().as_str(), "alice");
    assert_eq!(config.resolve_owner(Some("bob")).unwrap().as_str(), "bob");

    let unowned = Config::default();
    assert!(matches!(
        unowned.resolve_owner(None).unwrap_err(),
        Error::OwnerRequired
    ));
    assert!(matches!(
        unowned.resolve_owner(Some("")).unwrap_err(),
        Error::Store(rung_core::Error::Validation { .. })
    ));
}
