//! This module handles the host's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! `load`/`save` use the platform config directory; `load_from_path` and
//! `save_to_path` take an explicit path (used by tests).
//!
//! # Examples
//!
//! ```no_run
//! use toast_usher::config;
//!
//! let mut config = config::load().unwrap_or_default();
//!
//! // Give readers six seconds instead of four.
//! config.auto_hide_delay_ms = Some(6000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::domain::activation::{ActivationSettings, FailurePolicy};
use crate::domain::diagnostics::LogCapacity;
use crate::domain::toast::{delay_bounds, AutoHideDelay, MarkerClass};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastUsher";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub auto_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub marker_class: Option<String>,
    #[serde(default)]
    pub failure_policy: Option<String>,
    #[serde(default)]
    pub log_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: Some(delay_bounds::DEFAULT_MS),
            marker_class: None,
            failure_policy: None,
            log_capacity: None,
        }
    }
}

impl Config {
    /// Returns the configured auto-hide delay, clamped to valid range.
    #[must_use]
    pub fn auto_hide_delay(&self) -> AutoHideDelay {
        self.auto_hide_delay_ms
            .map(AutoHideDelay::new)
            .unwrap_or_default()
    }

    /// Returns the configured marker class, falling back to the default token.
    #[must_use]
    pub fn marker(&self) -> MarkerClass {
        self.marker_class
            .as_deref()
            .map(MarkerClass::new)
            .unwrap_or_default()
    }

    /// Returns the configured failure policy. Unknown tokens fall back
    /// to the default policy.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
            .as_deref()
            .and_then(FailurePolicy::from_token)
            .unwrap_or_default()
    }

    /// Returns the configured event log capacity, clamped to valid range.
    #[must_use]
    pub fn log_capacity(&self) -> LogCapacity {
        self.log_capacity.map(LogCapacity::new).unwrap_or_default()
    }

    /// Builds the activation settings bundle from this configuration.
    #[must_use]
    pub fn activation_settings(&self) -> ActivationSettings {
        ActivationSettings::new(self.auto_hide_delay(), self.failure_policy())
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
            auto_hide_delay_ms: Some(2500),
            marker_class: Some("notice".to_string()),
            failure_policy: Some("abort".to_string()),
            log_capacity: Some(64),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.auto_hide_delay_ms, config.auto_hide_delay_ms);
        assert_eq!(loaded.marker_class, config.marker_class);
        assert_eq!(loaded.failure_policy, config.failure_policy);
        assert_eq!(loaded.log_capacity, config.log_capacity);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.auto_hide_delay_ms, Some(delay_bounds::DEFAULT_MS));
        assert!(loaded.marker_class.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            auto_hide_delay_ms: Some(5000),
            marker_class: None,
            failure_policy: None,
            log_capacity: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_uses_standard_delay() {
        let config = Config::default();
        assert_eq!(config.auto_hide_delay_ms, Some(delay_bounds::DEFAULT_MS));
        assert_eq!(config.auto_hide_delay().millis(), 4000);
    }

    #[test]
    fn typed_accessors_clamp_and_fall_back() {
        let config = Config {
            auto_hide_delay_ms: Some(5),
            marker_class: Some("two tokens".to_string()),
            failure_policy: Some("unknown".to_string()),
            log_capacity: Some(0),
        };

        assert_eq!(config.auto_hide_delay().millis(), delay_bounds::MIN_MS);
        assert_eq!(config.marker().as_str(), MarkerClass::DEFAULT_TOKEN);
        assert_eq!(config.failure_policy(), FailurePolicy::IsolateAndReport);
        assert!(config.log_capacity().is_min());
    }

    #[test]
    fn activation_settings_come_from_the_typed_accessors() {
        let config = Config {
            auto_hide_delay_ms: Some(1500),
            marker_class: None,
            failure_policy: Some("abort".to_string()),
            log_capacity: None,
        };

        let settings = config.activation_settings();
        assert_eq!(settings.auto_hide_delay().millis(), 1500);
        assert_eq!(settings.failure_policy(), FailurePolicy::AbortOnFirst);
    }
}
