//! Application configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so a
//! missing file or a partial file both work.

use crate::error::{Result, SoundbankError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "SOUNDBANK_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub theme: ThemeChoice,
    pub fonts: FontConfig,
    /// Directory screenshots are written to
    pub screenshot_dir: PathBuf,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            theme: ThemeChoice::default(),
            fonts: FontConfig::default(),
            screenshot_dir: PathBuf::from("output"),
            log_filter: "soundbank=debug,info".to_string(),
        }
    }
}

/// Native window geometry
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            min_width: 640.0,
            min_height: 480.0,
            title: "Soundbank".to_string(),
        }
    }
}

/// Which theme palette to apply
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FontConfig {
    /// Explicit CJK font file; system locations are probed when unset
    pub cjk_font_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| SoundbankError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SoundbankError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            SoundbankError::ConfigError(msg) => {
                SoundbankError::ConfigError(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load from `$SOUNDBANK_CONFIG` or the user config directory
    ///
    /// Returns the defaults when no file exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("[CONFIG] Loading {}", path.display());
                Self::load(path)
            }
            Some(path) => {
                debug!("[CONFIG] No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Location of the config file
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("soundbank").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        let w = &self.window;
        if w.width <= 0.0 || w.height <= 0.0 || w.min_width <= 0.0 || w.min_height <= 0.0 {
            return Err(SoundbankError::ConfigError(
                "Window dimensions must be positive".to_string(),
            ));
        }
        if w.min_width > w.width || w.min_height > w.height {
            return Err(SoundbankError::ConfigError(format!(
                "Minimum window size {}x{} exceeds initial size {}x{}",
                w.min_width, w.min_height, w.width, w.height
            )));
        }
        Ok(())
    }
}
