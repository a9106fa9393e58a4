// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and startup theme mode
//! - `[toggle]` - Theme toggle geometry
//! - `[menu]` - Floating menu behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_DOCK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_dock::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Sections resolve to validated values
//! let size = config.toggle.size();
//! let options = config.menu.options();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::menu::MenuOptions;
use crate::ui::state::ToggleSize;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when the settings file exists but cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Startup theme (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Theme toggle settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ToggleConfig {
    /// Track width in logical pixels, clamped on use.
    #[serde(default = "default_toggle_size")]
    pub size: Option<f32>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            size: default_toggle_size(),
        }
    }
}

impl ToggleConfig {
    /// Validated track width.
    #[must_use]
    pub fn size(&self) -> ToggleSize {
        self.size.map(ToggleSize::new).unwrap_or_default()
    }
}

/// Floating menu settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Request a haptic pulse when the menu opens.
    #[serde(default = "default_menu_haptics")]
    pub haptics: Option<bool>,

    /// Drop delayed steps of a transition reversed mid-flight.
    #[serde(default = "default_cancel_pending_on_reverse")]
    pub cancel_pending_on_reverse: Option<bool>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            haptics: default_menu_haptics(),
            cancel_pending_on_reverse: default_cancel_pending_on_reverse(),
        }
    }
}

impl MenuConfig {
    #[must_use]
    pub fn haptics_enabled(&self) -> bool {
        self.haptics.unwrap_or(DEFAULT_MENU_HAPTICS)
    }

    /// Behavior switches handed to the menu state machine.
    #[must_use]
    pub fn options(&self) -> MenuOptions {
        MenuOptions {
            cancel_pending_on_reverse: self
                .cancel_pending_on_reverse
                .unwrap_or(DEFAULT_CANCEL_PENDING_ON_REVERSE),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Theme toggle settings.
    #[serde(default)]
    pub toggle: ToggleConfig,

    /// Floating menu settings.
    #[serde(default)]
    pub menu: MenuConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toggle_size() -> Option<f32> {
    Some(DEFAULT_TOGGLE_SIZE)
}

fn default_menu_haptics() -> Option<bool> {
    Some(DEFAULT_MENU_HAPTICS)
}

fn default_cancel_pending_on_reverse() -> Option<bool> {
    Some(DEFAULT_CANCEL_PENDING_ON_REVERSE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring settings at {}: {}", path.display(), err);
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
        log::debug!("no settings at {}, using defaults", path.display());
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
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n\n\
             [toggle]\nsize = 64.0\n\n\
             [menu]\nhaptics = false\ncancel_pending_on_reverse = false\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                    theme_mode: ThemeMode::Dark,
                },
                toggle: ToggleConfig { size: Some(64.0) },
                menu: MenuConfig {
                    haptics: Some(false),
                    cancel_pending_on_reverse: Some(false),
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
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toggle]\nsize = 80.0\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.toggle.size(), ToggleSize::new(80.0));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.menu, MenuConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"System\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_toggle_size_is_clamped_on_use() {
        let config = ToggleConfig { size: Some(500.0) };
        assert_eq!(config.size().value(), MAX_TOGGLE_SIZE);
        let config = ToggleConfig { size: None };
        assert_eq!(config.size(), ToggleSize::default());
    }

    #[test]
    fn menu_options_follow_settings() {
        let menu = MenuConfig {
            haptics: None,
            cancel_pending_on_reverse: Some(false),
        };
        assert!(menu.haptics_enabled());
        assert!(!menu.options().cancel_pending_on_reverse);
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[menu]\nhaptics = \"loud\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
