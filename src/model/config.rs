use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store files. Default: `<data dir>/tick`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub sidebar: bool,
    #[serde(default = "default_true")]
    pub progress: bool,
    #[serde(default = "default_true")]
    pub empty_state: bool,
    #[serde(default = "default_true")]
    pub celebration: bool,
    /// How long an error banner stays up
    #[serde(default = "default_banner_ms")]
    pub banner_ms: u64,
    /// Hex color overrides, keyed by theme slot (`background`, `highlight`, ...)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            sidebar: true,
            progress: true,
            empty_state: true,
            celebration: true,
            banner_ms: default_banner_ms(),
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_banner_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. Default: `<storage dir>/tick.log`
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when RUST_LOG is unset
    #[serde(default)]
    pub level: Option<String>,
}

/// Which optional UI surfaces are available.
///
/// Each dependent feature checks its flag before acting: no sidebar means
/// no list switching or list creation from the UI, no progress means no
/// gauge, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    pub sidebar: bool,
    pub progress: bool,
    pub empty_state: bool,
    pub celebration: bool,
}

impl Default for Surfaces {
    fn default() -> Self {
        UiConfig::default().surfaces()
    }
}

impl UiConfig {
    pub fn surfaces(&self) -> Surfaces {
        Surfaces {
            sidebar: self.sidebar,
            progress: self.progress,
            empty_state: self.empty_state,
            celebration: self.celebration,
        }
    }
}
