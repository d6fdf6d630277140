//! Session settings loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_core::{Color, Engine, SearchLimits};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search the settings accept.
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth must be between 1 and {MAX_DEPTH}, got {0}")]
    InvalidDepth(u8),
}

/// Who moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Classical,
    Random,
}

impl PlayerKind {
    /// A fresh engine for this player, or None for a human.
    pub fn engine(self) -> Option<Box<dyn Engine>> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Classical => Some(Box::new(ClassicalEngine::new())),
            PlayerKind::Random => Some(Box::new(RandomEngine::new())),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Classical => write!(f, "Classical Engine"),
            PlayerKind::Random => write!(f, "Random Engine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Classical,
            black: PlayerKind::Human,
        }
    }
}

impl PlayersConfig {
    pub fn for_side(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Per-move time cap in milliseconds, 0 = depth-bounded only
    pub move_time_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            move_time_ms: 0,
        }
    }
}

impl EngineConfig {
    /// Fresh limits for one search, each with its own stop signal.
    pub fn limits(&self) -> SearchLimits {
        match self.move_time_ms {
            0 => SearchLimits::depth(self.depth),
            ms => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub players: PlayersConfig,
    pub engine: EngineConfig,
}

impl PlayConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PlayConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.engine.depth) {
            return Err(ConfigError::InvalidDepth(self.engine.depth));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
