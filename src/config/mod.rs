//! Configuration management.
//!
//! Gridwalk reads a small TOML file with two sections:
//!
//! ```toml
//! [game]
//! grid_size = 20
//! empty_marker = "-"
//! player_marker = "x"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field has a serde default that reproduces the classic behavior
//! (20x20 grid, `-` cells, `x` player), so a missing file or an empty one is
//! fine. Values are validated on load; a malformed file or a failed
//! validation is an error at startup, not something discovered mid-game.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the game world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,
    /// Marker rendered for an empty cell.
    #[serde(default = "default_empty_marker")]
    pub empty_marker: char,
    /// Marker rendered for the player's cell.
    #[serde(default = "default_player_marker")]
    pub player_marker: char,
}

/// Logging settings; the `-v` CLI flag overrides the configured level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_grid_size() -> i32 {
    20
}

fn default_empty_marker() -> char {
    '-'
}

fn default_player_marker() -> char {
    'x'
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            empty_marker: default_empty_marker(),
            player_marker: default_player_marker(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults. A file
    /// that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Write a default configuration file, refusing to clobber an existing
    /// one.
    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            bail!("config file {} already exists", path.display());
        }
        let rendered = toml::to_string_pretty(&Config::default())?;
        std::fs::write(path, rendered)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=100).contains(&self.game.grid_size) {
            bail!(
                "game.grid_size must be between 2 and 100, got {}",
                self.game.grid_size
            );
        }
        if self.game.empty_marker == self.game.player_marker {
            bail!(
                "game.empty_marker and game.player_marker must differ, both are {:?}",
                self.game.player_marker
            );
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            bail!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS,
                self.logging.level
            );
        }
        Ok(())
    }
}
