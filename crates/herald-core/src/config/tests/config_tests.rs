use std::fs;
use std::path::Path;

use log::LevelFilter;
use tempfile::tempdir;

use crate::config::{ConfigError, ConfigFormat, DispatcherConfig};
use crate::event::{Dispatcher, CALLER_KEY};

#[test]
fn test_default_config() {
    let config = DispatcherConfig::default();
    assert_eq!(config.caller, None);
    assert_eq!(config.invocation_log_level, LevelFilter::Trace);
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("herald.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("herald.JSON")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("herald.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("herald")), None);
    assert_eq!(ConfigFormat::Json.extension(), "json");
}

#[cfg(feature = "yaml-config")]
#[test]
fn test_format_from_path_yaml() {
    assert_eq!(ConfigFormat::from_path(Path::new("herald.yml")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("herald.yaml")), Some(ConfigFormat::Yaml));
}

#[cfg(feature = "toml-config")]
#[test]
fn test_format_from_path_toml() {
    assert_eq!(ConfigFormat::from_path(Path::new("herald.toml")), Some(ConfigFormat::Toml));
}

#[test]
fn test_empty_document_uses_defaults() -> Result<(), ConfigError> {
    let config = DispatcherConfig::deserialize("{}", ConfigFormat::Json)?;
    assert_eq!(config, DispatcherConfig::default());
    Ok(())
}

#[test]
fn test_json_deserialize() -> Result<(), ConfigError> {
    let config = DispatcherConfig::deserialize(
        r#"{ "caller": "billing", "invocation_log_level": "debug" }"#,
        ConfigFormat::Json,
    )?;
    assert_eq!(config.caller.as_deref(), Some("billing"));
    assert_eq!(config.invocation_log_level, LevelFilter::Debug);
    Ok(())
}

#[test]
fn test_invalid_json_is_deserialization_error() {
    let err = DispatcherConfig::deserialize("{ not json", ConfigFormat::Json).unwrap_err();
    match err {
        ConfigError::Deserialization { format, .. } => assert_eq!(format, "json"),
        other => panic!("Expected Deserialization, got {:?}", other),
    }
}

#[test]
fn test_json_serialize_then_read_back() -> Result<(), ConfigError> {
    let config = DispatcherConfig::default()
        .with_caller("audit")
        .with_invocation_log_level(LevelFilter::Info);
    let text = config.serialize(ConfigFormat::Json)?;
    assert!(text.contains("audit"));
    assert_eq!(DispatcherConfig::deserialize(&text, ConfigFormat::Json)?, config);
    Ok(())
}

#[cfg(feature = "yaml-config")]
#[test]
fn test_yaml_deserialize() -> Result<(), ConfigError> {
    let config = DispatcherConfig::deserialize(
        "caller: orders\ninvocation_log_level: error\n",
        ConfigFormat::Yaml,
    )?;
    assert_eq!(config.caller.as_deref(), Some("orders"));
    assert_eq!(config.invocation_log_level, LevelFilter::Error);
    Ok(())
}

#[cfg(feature = "toml-config")]
#[test]
fn test_toml_deserialize() -> Result<(), ConfigError> {
    let config = DispatcherConfig::deserialize(
        "caller = \"orders\"\ninvocation_log_level = \"warn\"\n",
        ConfigFormat::Toml,
    )?;
    assert_eq!(config.caller.as_deref(), Some("orders"));
    assert_eq!(config.invocation_log_level, LevelFilter::Warn);
    Ok(())
}

#[cfg(feature = "toml-config")]
#[test]
fn test_toml_serialize_without_caller() -> Result<(), ConfigError> {
    let text = DispatcherConfig::default().serialize(ConfigFormat::Toml)?;
    assert!(!text.contains("caller"));
    assert_eq!(
        DispatcherConfig::deserialize(&text, ConfigFormat::Toml)?,
        DispatcherConfig::default()
    );
    Ok(())
}

#[test]
fn test_load_from_file() -> Result<(), ConfigError> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("herald.json");
    fs::write(&path, r#"{ "caller": "from-file" }"#).expect("Failed to write config file");

    let config = DispatcherConfig::load(&path)?;
    assert_eq!(config.caller.as_deref(), Some("from-file"));

    let dispatcher = Dispatcher::with_config(config);
    let event = dispatcher.broadcast("foo").expect("broadcast without listeners");
    assert_eq!(event.get_data(CALLER_KEY).unwrap(), &serde_json::json!("from-file"));
    Ok(())
}

#[test]
fn test_load_unsupported_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("herald.ini");
    fs::write(&path, "caller=x").expect("Failed to write config file");

    let err = DispatcherConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("absent.json");

    let err = DispatcherConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected Io, got {:?}", other),
    }
}
