use std::path::PathBuf;
use switchlog::logging::config::{ENV_FILE_PATH, ENV_JSON_PATH};
use switchlog::{create_output_with_config, ConfigError, LogConfig, LogOutput};

#[test]
fn loads_paths_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logging.toml");
    std::fs::write(
        &path,
        r#"
[outputs.file]
path = "var/app.log"

[outputs.structured]
path = "var/records.json"
"#,
    )
    .unwrap();

    // This binary never sets SWITCHLOG_* variables, so only the file applies
    assert!(std::env::var_os(ENV_FILE_PATH).is_none());
    assert!(std::env::var_os(ENV_JSON_PATH).is_none());

    let config = LogConfig::from_file(&path).unwrap();
    assert_eq!(config.outputs.file.path, PathBuf::from("var/app.log"));
    assert_eq!(config.outputs.structured.path, PathBuf::from("var/records.json"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config: LogConfig = toml::from_str("[outputs.file]\npath = \"only.log\"\n").unwrap();
    assert_eq!(config.outputs.file.path, PathBuf::from("only.log"));
    assert_eq!(config.outputs.structured.path, PathBuf::from("logs.json"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logging.toml");
    std::fs::write(&path, "[outputs.file\npath = 3").unwrap();

    assert!(matches!(LogConfig::from_file(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        LogConfig::from_file(dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn save_then_load_keeps_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("logging.toml");

    let mut config = LogConfig::default();
    config.outputs.file.path = PathBuf::from("saved.log");
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded: LogConfig = toml::from_str(&content).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn factory_uses_overridden_destination() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("override.log");

    let mut config = LogConfig::default();
    config.apply_overrides([(ENV_FILE_PATH.to_string(), target.display().to_string())]);

    create_output_with_config("file", &config)
        .unwrap()
        .write("hello")
        .unwrap();
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello\n");
}
