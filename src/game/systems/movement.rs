//! Snake movement system.
//!
//! This module advances every snake by one cell when its speed gate allows.

use std::time::Duration;

use crate::game::entities::Snake;

/// Advance every snake. Returns how many actually moved this tick.
pub fn move_snakes(snakes: &mut [Snake], now: Duration) -> usize {
    snakes.iter_mut().map(|snake| snake.advance(now)).filter(|moved| *moved).count()
}
