// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The application never writes the file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[feed]` - Mock feed size and seed
//! - `[animation]` - Comment panel animation timing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FEED_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_feed::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! println!("{} posts, panel animates over {:?}",
//!     config.feed.post_count(),
//!     config.animation.disclosure_duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Mock feed generation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Number of posts to generate.
    #[serde(default = "default_post_count")]
    pub post_count: Option<u32>,

    /// Upper bound on generated comments per post.
    #[serde(default = "default_max_comments")]
    pub max_comments: Option<u32>,

    /// Fixed seed for reproducible feeds. Absent means a fresh seed per launch.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            post_count: default_post_count(),
            max_comments: default_max_comments(),
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Post count clamped to the supported range.
    #[must_use]
    pub fn post_count(&self) -> u32 {
        self.post_count
            .unwrap_or(DEFAULT_POST_COUNT)
            .clamp(MIN_POST_COUNT, MAX_POST_COUNT)
    }

    /// Comment bound clamped to the supported range.
    #[must_use]
    pub fn max_comments(&self) -> u32 {
        self.max_comments
            .unwrap_or(DEFAULT_MAX_COMMENTS)
            .min(MAX_MAX_COMMENTS)
    }
}

/// Animation timing settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Duration of a full comment panel open/close, in milliseconds.
    #[serde(default = "default_disclosure_duration_ms")]
    pub disclosure_duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            disclosure_duration_ms: default_disclosure_duration_ms(),
        }
    }
}

impl AnimationConfig {
    /// Disclosure duration clamped to the supported range.
    #[must_use]
    pub fn disclosure_duration(&self) -> Duration {
        let ms = self
            .disclosure_duration_ms
            .unwrap_or(DEFAULT_DISCLOSURE_DURATION_MS)
            .clamp(MIN_DISCLOSURE_DURATION_MS, MAX_DISCLOSURE_DURATION_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_post_count() -> Option<u32> {
    Some(DEFAULT_POST_COUNT)
}

fn default_max_comments() -> Option<u32> {
    Some(DEFAULT_MAX_COMMENTS)
}

fn default_disclosure_duration_ms() -> Option<u64> {
    Some(DEFAULT_DISCLOSURE_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn full_file_loads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"light\"\n\n[feed]\npost_count = 12\nmax_comments = 4\nseed = 7\n\n[animation]\ndisclosure_duration_ms = 250\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    theme_mode: ThemeMode::Light,
                },
                feed: FeedConfig {
                    post_count: Some(12),
                    max_comments: Some(4),
                    seed: Some(7),
                },
                animation: AnimationConfig {
                    disclosure_duration_ms: Some(250),
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[feed]\nseed = 99\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.feed.seed, Some(99));
        assert_eq!(loaded.feed.post_count, Some(DEFAULT_POST_COUNT));
        assert_eq!(
            loaded.animation.disclosure_duration_ms,
            Some(DEFAULT_DISCLOSURE_DURATION_MS)
        );
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn disclosure_duration_is_clamped() {
        let too_short = AnimationConfig {
            disclosure_duration_ms: Some(1),
        };
        let too_long = AnimationConfig {
            disclosure_duration_ms: Some(60_000),
        };

        assert_eq!(
            too_short.disclosure_duration(),
            Duration::from_millis(MIN_DISCLOSURE_DURATION_MS)
        );
        assert_eq!(
            too_long.disclosure_duration(),
            Duration::from_millis(MAX_DISCLOSURE_DURATION_MS)
        );
    }

    #[test]
    fn feed_counts_are_clamped() {
        let feed = FeedConfig {
            post_count: Some(0),
            max_comments: Some(1_000),
            seed: None,
        };

        assert_eq!(feed.post_count(), MIN_POST_COUNT);
        assert_eq!(feed.max_comments(), MAX_MAX_COMMENTS);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"dark\"\n\n[feed]\nseed = 1234\n",
        )
        .expect("failed to write config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.feed.seed, Some(1234));
    }
}
