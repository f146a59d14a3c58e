//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_rules::Player;
use tracing::{debug, info, instrument};

/// Display settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the player using X.
    #[serde(default = "default_x_name")]
    player_x_name: String,

    /// Name shown for the player using O.
    #[serde(default = "default_o_name")]
    player_o_name: String,
}

fn default_x_name() -> String {
    Player::X.to_string()
}

fn default_o_name() -> String {
    Player::O.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_x_name(),
            player_o_name: default_o_name(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with custom player names.
    pub fn new(player_x_name: impl Into<String>, player_o_name: impl Into<String>) -> Self {
        Self {
            player_x_name: player_x_name.into(),
            player_o_name: player_o_name.into(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(path, format!("Failed to parse config: {}", e)))?;

        info!(x = %config.player_x_name, o = %config.player_o_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path`, or returns defaults if it doesn't exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the display name for `player`.
    pub fn name_for(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }
}

/// Failure to load a configuration file.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error in {}: {} at {}:{}", path.display(), message, file, line)]
pub struct ConfigError {
    /// Config file that failed to load.
    pub path: PathBuf,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error for the config file at `path`.
    #[track_caller]
    pub fn new(path: impl Into<PathBuf>, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.into(),
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
