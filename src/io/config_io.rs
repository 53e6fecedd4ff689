use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config dir>/tick/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tick").join("config.toml"))
}

/// `<data dir>/tick`, or `./.tick` when the platform has no data dir
pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("tick"))
        .unwrap_or_else(|| PathBuf::from(".tick"))
}

/// Read the config file. A missing file yields the defaults; an explicit
/// path that doesn't exist is still an error.
pub fn read_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}

/// Where the store lives: CLI override, then config, then the default
pub fn resolve_storage_dir(cli_override: Option<&Path>, config: &Config) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.storage.dir.clone())
        .unwrap_or_else(default_storage_dir)
}
