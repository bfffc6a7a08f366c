//! Configuration module for AlgoVis-RS
//!
//! This module handles the visualizer configuration:
//! - Every option the UI exposes (array size, speed, algorithm pickers,
//!   search value, theme) with its default
//! - Validation of those options before any engine runs
//! - Persistence of the configuration as TOML
//!
//! # App Data Location
//!
//! The configuration is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.hxyulin.algovis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.algovis-rs/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.algovis-rs\`
//!
//! # Example
//!
//! ```ignore
//! use algovis_rs::config::VisualizerConfig;
//!
//! let mut config = VisualizerConfig::load_or_default();
//! config.speed = 80;
//! config.validate()?;
//! config.save()?;
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{Result, ResultExt, VisError};
use crate::playback::DEFAULT_SPEED;
use crate::types::{SearchAlgorithm, SortAlgorithm, Value};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.algovis-rs";

/// Config filename
pub const CONFIG_FILE: &str = "visualizer.toml";

/// Smallest selectable array size
pub const MIN_ARRAY_SIZE: usize = 10;

/// Largest selectable array size
pub const MAX_ARRAY_SIZE: usize = 100;

/// Array size used when none is configured
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Default lower bound of generated values
pub const MIN_VALUE: Value = 5;

/// Default upper bound of generated values
pub const MAX_VALUE: Value = 500;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir()
        .ok_or_else(|| VisError::Config("Could not determine app data directory".to_string()))?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(VisError::from)
            .context("Failed to create app data directory")?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Visualizer Config ====================

/// Every user-facing option of the visualizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Number of bars (10–100)
    pub array_size: usize,

    /// Animation speed (1–100, higher is faster)
    pub speed: u32,

    /// Selected sort engine
    pub sort_algorithm: SortAlgorithm,

    /// Selected search engine
    pub search_algorithm: SearchAlgorithm,

    /// Raw text of the search box; must hold an integer to search
    pub search_value: String,

    /// Display theme
    pub theme: Theme,

    /// Range generated values are drawn from
    pub value_range: ValueRange,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            sort_algorithm: SortAlgorithm::default(),
            search_algorithm: SearchAlgorithm::default(),
            search_value: String::new(),
            theme: Theme::default(),
            value_range: ValueRange::default(),
        }
    }
}

impl VisualizerConfig {
    /// Check every option, reporting the first invalid one
    ///
    /// The search value is not checked here: an empty search box is a
    /// normal state that only disables searching.
    pub fn validate(&self) -> Result<()> {
        validate_array_size(self.array_size)?;
        validate_speed(self.speed)?;
        self.value_range.validate()
    }

    /// Parsed search target, if the search box holds one
    pub fn search_target(&self) -> Result<Value> {
        parse_search_target(&self.search_value)
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path()
            .ok_or_else(|| VisError::Config("Could not determine config path".to_string()))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load and validate a config file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(VisError::from)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: Self = toml::from_str(&content)
            .map_err(VisError::from)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save the config to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }

    /// Save the config as TOML
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(VisError::from)
            .context("Failed to serialize config")?;

        std::fs::write(path, content)
            .map_err(VisError::from)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }
}
