//! Play configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Pause before the opponent moves, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// Seed for the opponent's random tie-breaks. Entropy when unset.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    #[setters(into)]
    human_name: String,

    /// Name shown for the opponent.
    #[serde(default = "default_bot_name")]
    #[setters(into)]
    bot_name: String,
}

fn default_bot_delay_ms() -> u64 {
    500
}

fn default_human_name() -> String {
    "You".to_string()
}

fn default_bot_name() -> String {
    "Bot".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: default_bot_delay_ms(),
            seed: None,
            human_name: default_human_name(),
            bot_name: default_bot_name(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(bot_delay_ms = config.bot_delay_ms, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// The opponent's pacing delay.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
