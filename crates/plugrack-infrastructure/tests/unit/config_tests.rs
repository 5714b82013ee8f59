//! Configuration loader tests

use plugrack_infrastructure::config::{
    AppConfig, ConfigLoader, EventBusKind, StoreBackend, loader::validate_app_config,
};
use plugrack_providers::TokioEventBusProvider;
use std::path::PathBuf;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("plugrack.toml");
    std::fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_bus_capacity_default_matches_tokio_bus() {
    assert_eq!(
        AppConfig::default().event_bus.capacity,
        TokioEventBusProvider::new().capacity()
    );
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.store.backend, StoreBackend::JsonFile);
    assert_eq!(config.event_bus.provider, EventBusKind::Tokio);
    assert!(!config.providers.seed_metadata_defaults);
    validate_app_config(&config).expect("defaults validate");
}

#[test]
fn test_load_merges_toml_over_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[store]
backend = "memory"

[event_bus]
provider = "null"

[providers]
seed_metadata_defaults = true
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("PLUGRACK_TEST_MERGE")
        .load()
        .expect("load");

    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert_eq!(config.event_bus.provider, EventBusKind::Null);
    assert_eq!(config.event_bus.capacity, 1024, "untouched keys keep defaults");
    assert!(config.providers.seed_metadata_defaults);
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[logging]\nlevel = \"debug\"\n");

    // SAFETY: the prefix is unique to this test.
    unsafe {
        std::env::set_var("PLUGRACK_TEST_ENV_LOGGING__LEVEL", "warn");
    }
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("PLUGRACK_TEST_ENV")
        .load();
    unsafe {
        std::env::remove_var("PLUGRACK_TEST_ENV_LOGGING__LEVEL");
    }

    assert_eq!(config.expect("load").logging.level, "warn");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let result = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load();

    assert!(result.is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    for contents in [
        "[logging]\nlevel = \"loud\"\n",
        "[event_bus]\ncapacity = 0\n",
        "[store]\nbackend = \"json_file\"\ndata_dir = \"\"\n",
        "[http]\ntimeout_secs = 0\n",
        "[store]\nbackend = \"sqlite\"\n",
    ] {
        let path = write_config(&dir, contents);
        let result = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("PLUGRACK_TEST_INVALID")
            .load();
        assert!(result.is_err(), "should reject: {contents}");
    }
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.toml");
    let loader = ConfigLoader::new().with_env_prefix("PLUGRACK_TEST_SAVE");

    let mut config = AppConfig::default();
    config.store.data_dir = PathBuf::from("/var/lib/plugrack");
    config.http.timeout_secs = 5;
    loader.save_to_file(&config, &path).expect("save");

    let loaded = loader.with_config_path(&path).load().expect("load");
    assert_eq!(loaded, config);
}
