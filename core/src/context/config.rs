//! Timer configuration
//!
//! This module re-exports the shared settings types from combat-logout-types
//! and adds validation and persistence for [`TimerConfig`].

use std::path::Path;

use tracing::warn;

use super::error::ConfigError;
use crate::timers::grace_period_ticks;

// Re-export all shared types
pub use combat_logout_types::{Color, TimeFormat, TimerConfig, timer_colors};

/// Application name used for the platform config directory
pub const APP_NAME: &str = "combat-logout";
pub const CONFIG_NAME: &str = "config";

/// Longest grace window accepted from a config file
pub const MAX_GRACE_PERIOD_SECS: u32 = 600;

/// Extension trait for TimerConfig validation and persistence
pub trait TimerConfigExt: Sized {
    /// Load from the platform config dir, falling back to defaults on any error.
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_path(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn save_path(&self, path: &Path) -> Result<(), ConfigError>;
    fn validate(&self) -> Result<(), ConfigError>;
    /// Grace window length in game ticks
    fn grace_period_ticks(&self) -> u32;
    fn to_toml(&self) -> Result<String, ConfigError>;
}

impl TimerConfigExt for TimerConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load timer configuration, using defaults");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, CONFIG_NAME)?;
        config.validate()?;
        Ok(config)
    }

    fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = confy::load_path(path)?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn save_path(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grace_period_secs > MAX_GRACE_PERIOD_SECS {
            return Err(ConfigError::GracePeriodTooLong {
                secs: self.grace_period_secs,
                max: MAX_GRACE_PERIOD_SECS,
            });
        }
        Ok(())
    }

    fn grace_period_ticks(&self) -> u32 {
        grace_period_ticks(self.grace_period_secs)
    }

    fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = TimerConfig::load_path(&path).unwrap();
        assert_eq!(config, TimerConfig::default());
        assert_eq!(config.grace_period_ticks(), 5);
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = TimerConfig {
            restrict_to_dangerous_context: false,
            grace_period_secs: 6,
            time_format: TimeFormat::Ticks,
            sound_alert: true,
            ..TimerConfig::default()
        };
        config.save_path(&path).unwrap();

        assert_eq!(TimerConfig::load_path(&path).unwrap(), config);
    }

    #[test]
    fn unknown_time_format_loads_as_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "time_format = \"fortnights\"\n").unwrap();

        let config = TimerConfig::load_path(&path).unwrap();
        assert_eq!(config.time_format, TimeFormat::Plain);
    }

    #[test]
    fn overlong_grace_period_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "grace_period_secs = 900\n").unwrap();

        let err = TimerConfig::load_path(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GracePeriodTooLong { secs: 900, max: MAX_GRACE_PERIOD_SECS }
        ));

        let config = TimerConfig {
            grace_period_secs: 601,
            ..TimerConfig::default()
        };
        assert!(config.save_path(&path).is_err());
    }

    #[test]
    fn toml_output_names_fields() {
        let text = TimerConfig::default().to_toml().unwrap();
        assert!(text.contains("grace_period_secs = 3"));
        assert!(text.contains("time_format = \"seconds\""));
    }
}
