use std::path::PathBuf;

use vitalrisk_server::config::{
    CURRENT_VERSION, DEFAULT_BIND_ADDR, LogFormat, ServerConfig, apply_overrides, parse_config,
    read_config_file,
};

#[test]
fn defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.database_path.ends_with("vitalrisk/vitalrisk.db"));
}

#[test]
fn missing_fields_take_defaults() {
    let config = parse_config(r#"{ "log_format": "json" }"#).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.config_version, CURRENT_VERSION);
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{ "config_version": 99 }"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 1, "bind_addr": "0.0.0.0:9000", "database_path": "/tmp/x.db" }"#,
    )
    .unwrap();
    let config = read_config_file(&path).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.database_path, PathBuf::from("/tmp/x.db"));

    assert!(read_config_file(&dir.path().join("missing.json")).is_err());
}

#[test]
fn environment_overrides_individual_fields() {
    let mut config = ServerConfig::default();
    apply_overrides(&mut config, |key| match key {
        "VITALRISK_BIND" => Some("0.0.0.0:8080".to_string()),
        "VITALRISK_LOG_FORMAT" => Some("JSON".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.database_path, ServerConfig::default().database_path);

    let bad = apply_overrides(&mut config, |key| {
        (key == "VITALRISK_LOG_FORMAT").then(|| "xml".to_string())
    });
    assert!(bad.is_err());
}
