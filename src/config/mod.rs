//! Configuration management

use crate::domain::shared::{Result, SoundError};
use crate::domain::sound::backend::DEFAULT_REPLY_CAPACITY;
use crate::domain::sound::command::DEFAULT_ALIAS_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `MCI_SOUND__PLAYBACK__POLL_INTERVAL_MS`
pub const ENV_PREFIX: &str = "MCI_SOUND";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How often `wait_until_stopped` polls the device
    pub poll_interval_ms: u64,
    /// Prefix of the aliases given to opened devices
    pub alias_prefix: String,
    /// Reply buffer size in characters
    pub reply_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 25,
            alias_prefix: DEFAULT_ALIAS_PREFIX.to_string(),
            reply_capacity: DEFAULT_REPLY_CAPACITY,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl PlaybackConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Config {
    /// Load configuration from an optional TOML file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let config: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the playback layer cannot work with
    pub fn validate(&self) -> Result<()> {
        let playback = &self.playback;
        if playback.poll_interval_ms == 0 {
            return Err(SoundError::Config(
                "playback.poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        if playback.reply_capacity == 0 {
            return Err(SoundError::Config(
                "playback.reply_capacity must be greater than 0".to_string(),
            ));
        }
        if playback.alias_prefix.is_empty() || playback.alias_prefix.contains(char::is_whitespace) {
            return Err(SoundError::Config(format!(
                "playback.alias_prefix must be a non-empty word, got {:?}",
                playback.alias_prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Tests that call `Config::load` read the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.playback.poll_interval(), Duration::from_millis(25));
        assert_eq!(config.playback.alias_prefix, "MCISND");
        assert_eq!(config.playback.reply_capacity, 1024);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[playback]\npoll_interval_ms = 50\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.playback.poll_interval_ms, 50);
        // Unset keys keep their defaults
        assert_eq!(config.playback.alias_prefix, "MCISND");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = Config::load(Some(Path::new("/nonexistent/mci-sound.toml")));
        assert!(matches!(result, Err(SoundError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[playback]\npoll_interval_ms = 0").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(SoundError::Config(_))));
    }

    #[test]
    fn test_validate_alias_prefix() {
        let mut config = Config::default();
        config.playback.alias_prefix = "MY SND".to_string();
        assert!(config.validate().is_err());

        config.playback.alias_prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_reply_capacity() {
        let mut config = Config::default();
        config.playback.reply_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_environment_overrides() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("MCI_SOUND__PLAYBACK__POLL_INTERVAL_MS", "77");
        std::env::set_var("MCI_SOUND__PLAYBACK__ALIAS_PREFIX", "ZZ");

        let result = Config::load(None);

        std::env::remove_var("MCI_SOUND__PLAYBACK__POLL_INTERVAL_MS");
        std::env::remove_var("MCI_SOUND__PLAYBACK__ALIAS_PREFIX");

        let config = result.unwrap();
        assert_eq!(config.playback.poll_interval_ms, 77);
        assert_eq!(config.playback.alias_prefix, "ZZ");
        assert_eq!(config.playback.reply_capacity, 1024);
    }
}
