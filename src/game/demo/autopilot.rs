//! Greedy autopilot.
//!
//! Picks the non-reversing heading whose next cell is free and closest to
//! the nearest food, then presses the key bound to it like a player would.

use crate::game::state::Round;
use crate::game::types::{Coordinate, Heading, InputEvent, SnakeId};

fn manhattan(a: Coordinate, b: Coordinate) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    snake: SnakeId,
}

impl Autopilot {
    pub fn new(snake: SnakeId) -> Self {
        Self { snake }
    }

    /// Best heading for the next move, or `None` if every option crashes.
    pub fn choose_heading(&self, round: &Round) -> Option<Heading> {
        let me = round.snake(self.snake)?;
        let head = me.head();
        let current = me.heading();
        let target = round.food().iter().copied().min_by_key(|food| manhattan(head, *food));

        let is_free = |cell: Coordinate| {
            round.grid().contains(cell) && !round.snakes().iter().any(|snake| snake.body().contains(cell))
        };

        Heading::ALL
            .into_iter()
            .filter(|heading| !heading.is_opposite(current))
            .filter(|heading| is_free(head + *heading))
            .min_by_key(|heading| {
                let distance = target.map_or(0, |food| manhattan(head + *heading, food));
                (distance, *heading != current)
            })
    }

    /// Key press that steers toward `choose_heading`, if one is needed.
    pub fn steer(&self, round: &Round) -> Option<InputEvent> {
        let me = round.snake(self.snake)?;
        let heading = self.choose_heading(round)?;
        if heading == me.pending_heading() {
            return None;
        }
        me.bindings.key_for(heading).cloned().map(InputEvent::KeyDown)
    }
}
