use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Files stamped with a newer version are refused.
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(eyre::eyre!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Schema version. Missing = 0.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            database_path: default_database_path(),
            log_format: LogFormat::Text,
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitalrisk")
        .join("vitalrisk.db")
}

/// Load the config named by `VITALRISK_CONFIG` (or defaults), then apply
/// the `VITALRISK_BIND`, `VITALRISK_DB` and `VITALRISK_LOG_FORMAT` overrides.
pub fn load_config() -> eyre::Result<ServerConfig> {
    let mut config = match std::env::var_os("VITALRISK_CONFIG") {
        Some(path) => read_config_file(Path::new(&path))?,
        None => ServerConfig::default(),
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> eyre::Result<ServerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<ServerConfig> {
    // Check the version on the raw JSON before deserializing the rest.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    if on_disk_version > u64::from(CURRENT_VERSION) {
        return Err(eyre::eyre!(
            "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    let mut config: ServerConfig = serde_json::from_value(json)?;
    config.config_version = CURRENT_VERSION;
    Ok(config)
}

/// `lookup` returns the value of an environment variable, if set.
pub fn apply_overrides(
    config: &mut ServerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> eyre::Result<()> {
    if let Some(bind) = lookup("VITALRISK_BIND").filter(|v| !v.trim().is_empty()) {
        config.bind_addr = bind.trim().to_string();
    }
    if let Some(db) = lookup("VITALRISK_DB").filter(|v| !v.trim().is_empty()) {
        config.database_path = PathBuf::from(db.trim());
    }
    if let Some(format) = lookup("VITALRISK_LOG_FORMAT").filter(|v| !v.trim().is_empty()) {
        config.log_format = format.parse()?;
    }
    Ok(())
}
