//! Game parameters and reward constants.
//!
//! Reward values are configuration consumed by the learning layer's training
//! update, not part of the engine's algorithmic contract, so they live here
//! rather than as hard-coded constants.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parameters for one game. Loadable from the same YAML format the training
/// pipeline uses; unknown fields (training sections and the like) are
/// silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells per side of the square board.
    pub board_size: i32,
    /// Walls each player starts with.
    pub num_walls: i32,
    /// Reward returned by a winning move.
    pub reward_win: f32,
    /// Reward returned by every other confirmed action. Slightly negative to
    /// penalize long games.
    pub reward_alive: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 9,
            num_walls: 10,
            reward_win: 1.0,
            reward_alive: -0.04,
        }
    }
}

impl GameConfig {
    /// Create a config with the given board geometry and default rewards.
    pub fn with_board(board_size: i32, num_walls: i32) -> Self {
        GameConfig {
            board_size,
            num_walls,
            ..GameConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.board_size >= 2,
            "board_size must be at least 2, got {}",
            self.board_size
        );
        ensure!(
            self.num_walls >= 0,
            "num_walls must be non-negative, got {}",
            self.num_walls
        );
        Ok(())
    }
}

/// Load a [`GameConfig`] from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: GameConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    config.validate()?;
    Ok(config)
}
