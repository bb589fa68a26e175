//! Configuration for chart rendering and logging

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Application name for directory paths
const APP_NAME: &str = "bench-charts";

/// Config file name inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Main chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Series colours, assigned to algorithms in sorted order and cycled
    pub palette: Vec<[u8; 3]>,

    /// Stroke width of every line series
    pub line_width: f32,

    /// Dash pattern for dictionary-based algorithm variants
    pub dash: Vec<f32>,

    /// Initial state of the ASCII-subset toggle
    pub show_ascii_inputs: bool,

    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                [221, 221, 221],
                [46, 37, 133],
                [51, 117, 56],
                [93, 168, 153],
                [148, 203, 236],
                [220, 205, 125],
                [194, 106, 119],
                [159, 74, 150],
                [126, 41, 84],
            ],
            line_width: 3.0,
            dash: vec![3.2, 3.2],
            show_ascii_inputs: false,
            log_filter: "info".into(),
        }
    }
}

/// Errors from reading or writing the config file
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    Io(String),
    /// The file is not valid TOML for this config
    Parse(String),
    /// The config could not be serialised
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Config I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "Config parse error: {}", msg),
            Self::Serialize(msg) => write!(f, "Config serialise error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl ChartConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the per-user config path, or defaults if there is no file there
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// `<config dir>/bench-charts/config.toml`
    pub fn config_path() -> PathBuf {
        config_dir().join(CONFIG_FILE)
    }
}

/// Per-user config directory, falling back to the working directory
pub fn config_dir() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join(APP_NAME);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".config").join(APP_NAME);
    }
    PathBuf::from(".").join(APP_NAME)
}
