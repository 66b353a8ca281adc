//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Names and log destination for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player who moves first (X).
    #[serde(default = "default_first_player_name")]
    first_player_name: String,

    /// Name of the player who moves second (O).
    #[serde(default = "default_second_player_name")]
    second_player_name: String,

    /// File the terminal front-end writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_first_player_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_second_player_name() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player_name: default_first_player_name(),
            second_player_name: default_second_player_name(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            first = %config.first_player_name,
            second = %config.second_player_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces player names with any that were given.
    #[instrument(skip(self))]
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        if let Some(first) = first {
            self.first_player_name = first;
        }
        if let Some(second) = second {
            self.second_player_name = second;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
