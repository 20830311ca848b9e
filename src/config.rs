//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name of the player holding X (moves first).
    player_x_name: String,

    /// Display name of the player holding O.
    player_o_name: String,

    /// File the terminal UI writes its log to.
    log_file: PathBuf,
}

#[instrument]
fn default_player_x_name() -> String {
    "Player X".to_string()
}

#[instrument]
fn default_player_o_name() -> String {
    "Player O".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with the given player names.
    #[instrument(skip(player_x_name, player_o_name))]
    pub fn new(player_x_name: impl Into<String>, player_o_name: impl Into<String>) -> Self {
        Self {
            player_x_name: player_x_name.into(),
            player_o_name: player_o_name.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    ///
    /// Missing fields fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            player_x = %config.player_x_name,
            player_o = %config.player_o_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces whichever names are given, keeping the rest.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_x_name: Option<String>,
        player_o_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = player_x_name {
            self.player_x_name = name;
        }
        if let Some(name) = player_o_name {
            self.player_o_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that both players have a visible name.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_x_name.trim().is_empty() {
            return Err(ConfigError::new("Player X name must not be empty".to_string()));
        }
        if self.player_o_name.trim().is_empty() {
            return Err(ConfigError::new("Player O name must not be empty".to_string()));
        }
        Ok(())
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
