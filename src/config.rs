//! Configuration loading and management.
//!
//! Configuration covers output preferences only - the rule catalog is
//! fixed and deliberately not configurable. Sources are merged with the
//! following precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.slow-query-detector.toml` in current directory
//! 4. `~/.config/slow-query-detector/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [output]
//! format = "text"   # text, json, yaml
//! color = true
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SLOW_QUERY_FORMAT` | Output format (`text`, `json`, `yaml`) |
//! | `NO_COLOR` | Any value disables colored output |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig
}

/// Output preferences
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format name ("text", "json", "yaml")
    pub format: Option<String>,
    /// Colored terminal output
    pub color:  bool
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color:  true
        }
    }
}

impl Config {
    /// Load configuration from files and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.slow-query-detector.toml)
    /// 3. Config file in home directory
    ///    (~/.config/slow-query-detector/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("slow-query-detector")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".slow-query-detector.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        // Override with environment variables
        if let Ok(format) = env::var("SLOW_QUERY_FORMAT") {
            config.output.format = Some(format);
        }

        if env::var_os("NO_COLOR").is_some() {
            config.output.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
