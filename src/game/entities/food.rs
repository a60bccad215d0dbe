//! Food entity logic.
//!
//! This module keeps the board stocked with food and handles pickups.

use std::collections::{BTreeSet, HashSet};

use log::{debug, warn};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::entities::snake::Snake;
use crate::game::grid::Grid;
use crate::game::types::Coordinate;

/// Active food cells. Ordered so snapshots are stable.
pub type FoodSet = BTreeSet<Coordinate>;

/// Top `food` up to `target_count` on cells not covered by any snake or
/// existing food. Each pick is uniform over the remaining free cells.
/// Returns how many items were placed; fewer than requested only when the
/// board has no room left.
pub fn spawn_if_needed<'a, R: Rng + ?Sized>(
    grid: &Grid,
    snakes: impl IntoIterator<Item = &'a Snake>,
    food: &mut FoodSet,
    target_count: usize,
    rng: &mut R,
) -> usize {
    let needed = target_count.saturating_sub(food.len());
    if needed == 0 {
        return 0;
    }

    let occupied: HashSet<Coordinate> = snakes
        .into_iter()
        .flat_map(|snake| snake.body().iter().copied())
        .collect();

    let free_cells = grid
        .cells()
        .filter(|cell| !occupied.contains(cell) && !food.contains(cell));

    let chosen = free_cells.choose_multiple(rng, needed);
    if chosen.len() < needed {
        warn!(
            "[Food] Only {} free cell(s) left, wanted {} more food item(s)",
            chosen.len(),
            needed
        );
    }

    let placed = chosen.len();
    for cell in chosen {
        debug!("[Food] Spawned food at {}", cell);
        food.insert(cell);
    }
    placed
}

/// If the snake's head is on a food cell, eat it: the cell is removed and
/// the snake grows. Returns true when a respawn is needed.
pub fn check_pickup(snake: &mut Snake, food: &mut FoodSet) -> bool {
    let head = snake.head();
    if food.remove(&head) {
        snake.grow();
        debug!("[Food] {} ate food at {}, length now {}", snake.id, head, snake.len());
        true
    } else {
        false
    }
}
