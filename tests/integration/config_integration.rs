//! Integration tests for the configuration system

use clipsmith::config::{ClipsmithConfig, ConfigLoader, DEFAULT_SERVICE_URL};
use tempfile::TempDir;

#[test]
fn test_config_loads_service_and_logging_sections() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("test_config.toml");

    std::fs::write(
        &config_file,
        r#"
[service]
base_url = "https://video.example.com"
connect_timeout_secs = 5
request_timeout_secs = 600

[logging]
level = "warn"
format = "json"
output = "stdout"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.service.base_url, "https://video.example.com");
    assert_eq!(config.service.connect_timeout_secs, 5);
    assert_eq!(config.service.request_timeout_secs, 600);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stdout");
}

#[test]
fn test_partial_config_filled_from_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("test_config.toml");

    std::fs::write(&config_file, "[logging]\nlevel = \"debug\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.service.base_url, DEFAULT_SERVICE_URL);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_environment_file_overrides_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[service]
base_url = "http://base.example.com"
connect_timeout_secs = 7
"#,
    )
    .unwrap();
    // The default environment is "development"; its file is layered on top.
    std::fs::write(
        config_dir.join("development.toml"),
        "[service]\nbase_url = \"http://dev.example.com\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.service.base_url, "http://dev.example.com");
    // Fields not repeated in the environment file keep the workspace value.
    assert_eq!(config.service.connect_timeout_secs, 7);
}

#[test]
fn test_validation_rejects_malformed_service_url() {
    let mut config = ClipsmithConfig::default();
    config.service.base_url = "ftp://video.example.com".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ClipsmithConfig::default();
    let serialized = toml::to_string_pretty(&config).unwrap();
    let reparsed: ClipsmithConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(reparsed.service.base_url, config.service.base_url);
    assert_eq!(reparsed.logging.level, config.logging.level);
}
