use petpal_core::config::{DEFAULT_LATENCY_MS, RootConfig};
use petpal_infrastructure::{ConfigService, ConfigSource};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let service = ConfigService::with_path(dir.path().join("config.toml"));

    let config = service.get_config().unwrap();
    assert_eq!(config, RootConfig::default());
    assert_eq!(config.simulator.latency_ms, DEFAULT_LATENCY_MS);
    assert!(config.roster.seed_demo_pets);
}

#[test]
fn test_partial_file_overrides_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[simulator]
latency_ms = 0
seed = 42

[roster]
seed_demo_pets = false
"#,
    )
    .unwrap();

    let config = ConfigService::with_path(&path).get_config().unwrap();
    assert_eq!(config.simulator.latency_ms, 0);
    assert_eq!(config.simulator.seed, Some(42));
    assert!(!config.roster.seed_demo_pets);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[simulator]\nlatency_ms = \"soon\"\n").unwrap();

    let err = ConfigService::with_path(&path).get_config().unwrap_err();
    assert!(err.is_serialization());
}

#[test]
fn test_cache_until_invalidated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[simulator]\nlatency_ms = 5\n").unwrap();

    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().unwrap().simulator.latency_ms, 5);

    fs::write(&path, "[simulator]\nlatency_ms = 9\n").unwrap();
    assert_eq!(service.get_config().unwrap().simulator.latency_ms, 5);

    service.invalidate_cache();
    assert_eq!(service.get_config().unwrap().simulator.latency_ms, 9);
}

#[test]
fn test_config_source_reports_file_or_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let service = ConfigService::with_path(&path);

    assert_eq!(
        service.config_source().unwrap(),
        ConfigSource::Defaults(path.clone())
    );

    fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(service.config_source().unwrap(), ConfigSource::File(path));
}
