//! Application settings.
//!
//! This is the key/value contract the filter core consumes: an enabled
//! flag, a default block interval, a default direction-change threshold, a
//! blacklist of executable names, and a map of per-application overrides.
//! Values are validated when a `ConfigSnapshot` is built from them, not
//! here; load never fails, it falls back to defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Global application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Whether wheel filtering is active at all.
    pub enabled: bool,

    /// Default block interval in seconds. Valid range is 0.05–5.0.
    pub block_interval_secs: f64,

    /// Default number of consecutive opposite-direction events required to
    /// accept a reversal. Valid range is 1–10.
    pub direction_change_threshold: u32,

    /// Executable names for which filtering is fully bypassed.
    /// Matching is case-insensitive.
    pub blacklist: Vec<String>,

    /// Per-application overrides, keyed by executable name
    /// (for example "notepad.exe").
    pub app_profiles: HashMap<String, ProfileConfig>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// A per-application interval/threshold override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Block interval in seconds for this application.
    pub interval_secs: f64,

    /// Direction-change threshold for this application.
    pub threshold: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "scrollguard=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_interval_secs: 0.3,
            direction_change_threshold: 2,
            blacklist: Vec::new(),
            app_profiles: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load settings from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save settings to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard settings file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("scrollguard").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AppConfig::default();
        assert!(config.enabled);
        assert!((config.block_interval_secs - 0.3).abs() < 1e-9);
        assert_eq!(config.direction_change_threshold, 2);
        assert!(config.blacklist.is_empty());
        assert!(config.app_profiles.is_empty());
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        // A settings file that only sets one key keeps defaults for the rest.
        let config: AppConfig = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
        assert!(!config.enabled);
        assert!((config.block_interval_secs - 0.3).abs() < 1e-9);
        assert_eq!(config.direction_change_threshold, 2);
    }

    #[test]
    fn test_save_then_load_roundtrips_through_config_dir() {
        let dir = std::env::temp_dir().join(format!("scrollguard-config-{}", std::process::id()));
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        let mut config = AppConfig::default();
        config.enabled = false;
        config.block_interval_secs = 0.45;
        config.blacklist.push("game.exe".to_string());
        config.app_profiles.insert(
            "notepad.exe".to_string(),
            ProfileConfig {
                interval_secs: 0.5,
                threshold: 3,
            },
        );

        config.save().unwrap();
        assert!(config_file_path().exists());

        let loaded = AppConfig::load();
        assert!(!loaded.enabled);
        assert!((loaded.block_interval_secs - 0.45).abs() < 1e-9);
        assert_eq!(loaded.blacklist, vec!["game.exe".to_string()]);
        assert_eq!(loaded.app_profiles["notepad.exe"].threshold, 3);

        std::env::remove_var("XDG_CONFIG_HOME");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_roundtrip_with_profiles() {
        let mut config = AppConfig::default();
        config.blacklist.push("Game.exe".to_string());
        config.app_profiles.insert(
            "notepad.exe".to_string(),
            ProfileConfig {
                interval_secs: 0.5,
                threshold: 3,
            },
        );

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.blacklist, vec!["Game.exe".to_string()]);
        assert_eq!(parsed.app_profiles["notepad.exe"].threshold, 3);
    }
}
