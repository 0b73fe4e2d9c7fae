// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification settings, including loading and saving
//! them to a `notifications.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//! use iced_notify::notifications::Position;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_position = Position::BottomLeft;
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "IcedNotify";

/// Stacking and timing settings for a notification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corner used when a notification does not name one.
    pub default_position: Position,
    /// Baseline distance from the anchored edge; also the assumed height of
    /// a toast whose rendered height is unknown.
    pub base_offset: f32,
    /// Gap between consecutive toasts of a corner.
    pub gap: f32,
    /// Auto-dismiss delay for notifications without an explicit duration.
    pub default_duration_ms: u64,
    pub z_index_base: u32,
    /// Re-derive offsets from the view during reflow instead of trusting the
    /// registry. Only useful for renderers that move toasts on their own.
    pub read_back_offsets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_position: Position::default(),
            base_offset: DEFAULT_BASE_OFFSET,
            gap: DEFAULT_GAP,
            default_duration_ms: DEFAULT_DURATION_MS,
            z_index_base: DEFAULT_Z_INDEX_BASE,
            read_back_offsets: false,
        }
    }
}

impl Config {
    /// Default auto-dismiss delay, `None` when toasts stay until closed.
    #[must_use]
    pub fn default_duration(&self) -> Option<Duration> {
        (self.default_duration_ms > 0).then(|| Duration::from_millis(self.default_duration_ms))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads settings from `path`. A file that is not valid TOML yields the
/// defaults rather than an error; only I/O failures are reported.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            default_position: Position::BottomLeft,
            base_offset: 24.0,
            gap: 8.0,
            default_duration_ms: 0,
            z_index_base: 10,
            read_back_offsets: true,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "default_position = \"bottom-right\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_position, Position::BottomRight);
        assert_eq!(loaded.gap, DEFAULT_GAP);
        assert_eq!(loaded.default_duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn zero_duration_means_sticky() {
        let config = Config {
            default_duration_ms: 0,
            ..Config::default()
        };
        assert!(config.default_duration().is_none());
        assert_eq!(
            Config::default().default_duration(),
            Some(Duration::from_millis(DEFAULT_DURATION_MS))
        );
    }

    #[test]
    fn default_config_uses_top_right_and_baseline() {
        let config = Config::default();
        assert_eq!(config.default_position, Position::TopRight);
        assert_eq!(config.base_offset, DEFAULT_BASE_OFFSET);
        assert!(!config.read_back_offsets);
    }
}
