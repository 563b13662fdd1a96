pub mod gameplay;
pub mod worldgen;

pub use gameplay::GameplayConfig;
pub use worldgen::WorldGenConfig;

use std::fs;
use std::io;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level engine settings, loadable from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chunk radius of the square kept loaded around the player.
    pub render_distance: i32,
    pub worldgen: WorldGenConfig,
    pub gameplay: GameplayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_distance: 4,
            worldgen: WorldGenConfig::default(),
            gameplay: GameplayConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads settings from a TOML file. A missing file falls back to the
    /// defaults with a warning; an unreadable or unparsable file is an
    /// error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}
