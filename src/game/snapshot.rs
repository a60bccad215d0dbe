//! Read-only views of a round, handed to whatever draws the board.

use serde::Serialize;
use uuid::Uuid;

use crate::game::entities::Snake;
use crate::game::types::{Color, Coordinate, Heading, RoundOutcome, SnakeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    Setup,
    Running,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnakeView {
    pub id: SnakeId,
    pub name: String,
    pub color: Color,
    pub heading: Heading,
    /// Head first.
    pub body: Vec<Coordinate>,
}

impl From<&Snake> for SnakeView {
    fn from(snake: &Snake) -> Self {
        Self {
            id: snake.id,
            name: snake.name.clone(),
            color: snake.color,
            heading: snake.heading(),
            body: snake.body().iter().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub round_id: Uuid,
    pub tick: u64,
    pub phase: RoundPhase,
    pub grid_width: i32,
    pub grid_height: i32,
    pub snakes: Vec<SnakeView>,
    pub food: Vec<Coordinate>,
    pub outcome: Option<RoundOutcome>,
}
