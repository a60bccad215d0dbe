//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as grid dimensions,
//! snake length and speed, food count and frame rate, plus the runtime
//! `GameConfig` built from them.

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::config::input::{arrow_bindings, wasd_bindings, INPUT_READ_RATE};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::types::{Color, Coordinate, Heading, KeyBindings, SnakeId};

/// Number of columns in the game grid.
pub const GRID_WIDTH: i32 = 25;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: i32 = 25;

/// Segments every snake starts with, all stacked on its start cell.
pub const SNAKE_LENGTH: usize = 5;

/// Default snake speed in moves per second.
pub const SNAKE_SPEED: u32 = 7;

/// Below this the per-move step is too coarse and snakes fold into themselves.
pub const MIN_SNAKE_SPEED: u32 = 3;

/// Frames per second of the outer loop; also the snake speed cap.
pub const FRAME_RATE: u32 = 60;

/// Food items kept on the board at any moment.
pub const FOOD_COUNT: usize = 1;

/// Starting placement and controls for one snake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSpawn {
    pub id: SnakeId,
    pub name: String,
    pub start: Coordinate,
    pub heading: Heading,
    pub color: Color,
    pub bindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub snake_length: usize,
    pub snake_speed: u32,
    pub frame_rate: u32,
    pub food_count: usize,
    pub input_read_rate: u32,
    /// First entry is used in solo mode, both in duel mode.
    pub spawns: [SnakeSpawn; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            snake_length: SNAKE_LENGTH,
            snake_speed: SNAKE_SPEED,
            frame_rate: FRAME_RATE,
            food_count: FOOD_COUNT,
            input_read_rate: INPUT_READ_RATE,
            spawns: [
                SnakeSpawn {
                    id: SnakeId(1),
                    name: "Blue".to_string(),
                    start: Coordinate::new(5, 3),
                    heading: Heading::Right,
                    color: Color::BLUE,
                    bindings: arrow_bindings(),
                },
                SnakeSpawn {
                    id: SnakeId(2),
                    name: "Red".to_string(),
                    start: Coordinate::new(GRID_HEIGHT - 5, GRID_WIDTH - 5),
                    heading: Heading::Left,
                    color: Color::RED,
                    bindings: wasd_bindings(),
                },
            ],
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check everything a round relies on. Snake speed is checked separately
    /// when it is applied to each snake.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_height, self.grid_width
            )));
        }
        if self.snake_length == 0 {
            return Err(GameError::InvalidConfig("snake length must be at least 1".into()));
        }
        if self.food_count == 0 {
            return Err(GameError::InvalidConfig("food count must be at least 1".into()));
        }
        if self.frame_rate == 0 || self.input_read_rate == 0 {
            return Err(GameError::InvalidConfig("frame and input rates must be positive".into()));
        }

        // The first snake exists in every round.
        self.check_spawns(1)
    }

    /// `validate` plus the spawn checks for a round with `players` snakes.
    /// Spawns beyond `players` are never built and are not checked.
    pub fn validate_for(&self, players: usize) -> Result<(), GameError> {
        self.validate()?;
        self.check_spawns(players)
    }

    fn check_spawns(&self, players: usize) -> Result<(), GameError> {
        let grid = Grid::new(self.grid_width, self.grid_height);
        let used = &self.spawns[..players.min(self.spawns.len())];

        for (index, spawn) in used.iter().enumerate() {
            if !grid.contains(spawn.start) {
                return Err(GameError::InvalidConfig(format!(
                    "spawn of {} at {} is outside the grid",
                    spawn.name, spawn.start
                )));
            }
            for earlier in &used[..index] {
                if earlier.id == spawn.id {
                    return Err(GameError::InvalidConfig(format!("duplicate snake id {}", spawn.id)));
                }
                if earlier.start == spawn.start {
                    return Err(GameError::InvalidConfig("snakes must start on different cells".into()));
                }
            }
        }
        Ok(())
    }
}
