//! World configuration, loaded from TOML.
//!
//! Every field has a default, so a partial file (or none at all) is fine:
//!
//! ```toml
//! room_capacity = 3
//! large_bag_min_capacity = 6
//! starting_bag_name = "Canvas sack"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a world configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for the adventure rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Items a room can hold.
    pub room_capacity: usize,

    /// Large bags are raised to at least this capacity.
    pub large_bag_min_capacity: usize,

    /// Name of the bag every player starts with.
    pub starting_bag_name: String,

    pub starting_bag_value: i32,

    /// Inventory size for players created through the manager.
    pub default_player_capacity: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            room_capacity: crate::DEFAULT_ROOM_CAPACITY,
            large_bag_min_capacity: 5,
            starting_bag_name: "Starting bag".to_string(),
            starting_bag_value: 1,
            default_player_capacity: 3,
        }
    }
}

impl WorldConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_capacity == 0 {
            return Err(ConfigError::Invalid(
                "room_capacity must be at least 1".to_string(),
            ));
        }
        if self.starting_bag_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "starting_bag_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
