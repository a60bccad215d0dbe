//! Round rules: collision arbitration and food pickup.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::entities::{check_pickup, spawn_if_needed, FoodSet, Snake};
use crate::game::grid::Grid;
use crate::game::types::{CollisionKind, SnakeId};

/// The snake that ended the round and what it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crash {
    pub snake: SnakeId,
    pub length: usize,
    pub kind: CollisionKind,
}

/// Find the first crashed snake, visiting snakes in a fresh random order on
/// every call. Only one snake is reported even when several crashed, so the
/// shuffle is what spreads a head-to-head tie between both players.
pub fn check_collisions<R: Rng + ?Sized>(snakes: &[Snake], grid: &Grid, rng: &mut R) -> Option<Crash> {
    let mut order: Vec<usize> = (0..snakes.len()).collect();
    order.shuffle(rng);

    order.into_iter().find_map(|index| {
        let snake = &snakes[index];
        snake.collision(snakes, grid).map(|kind| Crash {
            snake: snake.id,
            length: snake.len(),
            kind,
        })
    })
}

/// Let every snake eat whatever is under its head, then restock the board.
/// Returns how many food items were eaten.
pub fn apply_food_rules<R: Rng + ?Sized>(
    snakes: &mut [Snake],
    food: &mut FoodSet,
    grid: &Grid,
    target_count: usize,
    rng: &mut R,
) -> usize {
    let mut eaten = 0;
    for snake in snakes.iter_mut() {
        if check_pickup(snake, food) {
            eaten += 1;
        }
    }
    if eaten > 0 {
        let placed = spawn_if_needed(grid, snakes.iter(), food, target_count, rng);
        debug!("[Rules] {} food eaten, {} respawned", eaten, placed);
    }
    eaten
}
