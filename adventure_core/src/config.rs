//! Game configuration.
//!
//! Every field has a default that reproduces the reference game, so a config
//! file only needs the values it changes:
//!
//! ```toml
//! banner = "Welcome aboard!"
//! trading_post = "Orange Town"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Tunable text and rule parameters of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Printed once before the first look.
    pub banner: String,

    /// Shown by the line editor before every read.
    pub prompt: String,

    /// Printed before reading each new command (not before clarification replies).
    pub turn_prompt: String,

    /// Holding this item at the final location wins the game.
    pub win_item: String,

    /// Picking this up also triggers the win check, but does not satisfy it.
    pub win_item_alias: Option<String>,

    /// Name of the only location where traders do business.
    pub trading_post: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            banner: "Welcome to the One Piece Adventure Game!".to_string(),
            prompt: "> ".to_string(),
            turn_prompt: "What would you like to do?".to_string(),
            win_item: "One Piece".to_string(),
            win_item_alias: Some("One".to_string()),
            trading_post: "Syrup Village".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML config document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Whether picking up `name` should trigger the win check.
    pub fn triggers_win_check(&self, name: &str) -> bool {
        name == self.win_item || self.win_item_alias.as_deref() == Some(name)
    }
}
