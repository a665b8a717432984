//! Configuration management for the picker core.
//!
//! This module handles loading, validating, and saving tool configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HISTORY_CAPACITY, HOTKEYS_FILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory picker files are saved to by default
    pub pickers_dir: Option<PathBuf>,
    /// Hotkey binding file; defaults to `hotkeys.json` in the config dir
    pub hotkeys_file: Option<PathBuf>,
}

/// Undo history configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Committed groups kept before the oldest is evicted
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Top-level tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system locations
    #[serde(default)]
    pub paths: PathConfig,
    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Gets the platform config directory for the tool.
    ///
    /// - Linux: `~/.config/RigPicker/`
    /// - macOS: `~/Library/Application Support/RigPicker/`
    /// - Windows: `%APPDATA%\RigPicker\`
    ///
    /// # Errors
    ///
    /// Fails when the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join(CONFIG_DIR_NAME))
    }

    /// Gets the path of the configuration file itself.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::config_dir`].
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files or malformed TOML.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Saves the configuration, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Fails on serialization or file system errors.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;

        let path = dir.join(CONFIG_FILE_NAME);
        let text = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, text)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the hotkey file location: the configured override, or
    /// `hotkeys.json` in the config directory.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::config_dir`].
    pub fn hotkeys_path(&self) -> Result<PathBuf> {
        match &self.paths.hotkeys_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(HOTKEYS_FILE_NAME)),
        }
    }
}
