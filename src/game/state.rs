//! Round controller.
//!
//! A `Round` owns every snake and the food set for one play-through and
//! drives the per-tick sequence: input, movement, collisions, food. It moves
//! through `Setup -> Running -> Ended` and produces exactly one outcome.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::game::entities::{spawn_if_needed, FoodSet, Snake};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::snapshot::{RoundPhase, RoundSnapshot, SnakeView};
use crate::game::systems::{apply_food_rules, check_collisions, move_snakes, InputMapper};
use crate::game::types::{InputEvent, PlayerMode, RoundOutcome, SnakeId};

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Set on the tick that ends the round, and only then.
    pub outcome: Option<RoundOutcome>,
    pub food_eaten: usize,
    /// A quit event was read; acting on it is up to the caller.
    pub quit_requested: bool,
}

pub struct Round {
    pub id: Uuid,
    mode: PlayerMode,
    grid: Grid,
    food_target: usize,
    snakes: Vec<Snake>,
    food: FoodSet,
    /// Who gets credited when a given snake crashes.
    opponents: HashMap<SnakeId, SnakeId>,
    input: InputMapper,
    pending_events: VecDeque<InputEvent>,
    phase: RoundPhase,
    outcome: Option<RoundOutcome>,
    tick: u64,
    rng: StdRng,
}

impl Round {
    /// Set up a round seeded from entropy. The seed is logged so a round can
    /// be replayed with `with_seed`.
    pub fn new(config: &GameConfig, players: usize) -> Result<Self, GameError> {
        Self::with_seed(config, players, rand::random())
    }

    pub fn with_seed(config: &GameConfig, players: usize, seed: u64) -> Result<Self, GameError> {
        let mode = PlayerMode::from_count(players).ok_or(GameError::InvalidPlayerCount(players))?;
        config.validate_for(mode.player_count())?;

        let snakes = config.spawns[..mode.player_count()]
            .iter()
            .map(|spawn| Snake::spawn(spawn, config.snake_length, config.snake_speed, config.frame_rate))
            .collect::<Result<Vec<_>, _>>()?;

        let opponents: HashMap<SnakeId, SnakeId> = match mode {
            PlayerMode::Solo => HashMap::from([(snakes[0].id, snakes[0].id)]),
            PlayerMode::Duel => HashMap::from([
                (snakes[0].id, snakes[1].id),
                (snakes[1].id, snakes[0].id),
            ]),
        };

        let id = Uuid::new_v4();
        info!(
            "[Round] Setup round_id={} mode={:?} grid={}x{} seed={}",
            id, mode, config.grid_height, config.grid_width, seed
        );

        Ok(Round {
            id,
            mode,
            grid: Grid::new(config.grid_width, config.grid_height),
            food_target: config.food_count,
            snakes,
            food: FoodSet::new(),
            opponents,
            input: InputMapper::new(config.input_read_rate),
            pending_events: VecDeque::new(),
            phase: RoundPhase::Setup,
            outcome: None,
            tick: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Setup -> Running: stock the board with food and drop any input that
    /// arrived before the round began. Calling it again is a no-op.
    pub fn start(&mut self) {
        if self.phase != RoundPhase::Setup {
            return;
        }
        spawn_if_needed(&self.grid, &self.snakes, &mut self.food, self.food_target, &mut self.rng);
        self.pending_events.clear();
        self.phase = RoundPhase::Running;
        info!("[Round] Started round_id={} food={:?}", self.id, self.food);
    }

    pub fn queue_input(&mut self, event: InputEvent) {
        self.pending_events.push_back(event);
    }

    /// Run one tick at `now`, the time elapsed since the round's clock
    /// started. `now` must never go backwards.
    pub fn tick(&mut self, now: Duration) -> Result<TickReport, GameError> {
        match self.phase {
            RoundPhase::Setup => return Err(GameError::RoundNotStarted),
            RoundPhase::Ended => return Err(GameError::RoundEnded),
            RoundPhase::Running => {}
        }
        self.tick += 1;

        let read = self.input.read(now, &mut self.pending_events, &mut self.snakes);
        move_snakes(&mut self.snakes, now);

        if let Some(crash) = check_collisions(&self.snakes, &self.grid, &mut self.rng) {
            let outcome = match self.mode {
                PlayerMode::Solo => RoundOutcome::Score(crash.length),
                PlayerMode::Duel => RoundOutcome::Winner(self.opponents[&crash.snake]),
            };
            info!(
                "[Round] Ended round_id={} tick={} crashed={} kind={:?} outcome={:?}",
                self.id, self.tick, crash.snake, crash.kind, outcome
            );
            self.phase = RoundPhase::Ended;
            self.outcome = Some(outcome);
            return Ok(TickReport {
                outcome: Some(outcome),
                food_eaten: 0,
                quit_requested: read.quit_requested,
            });
        }

        let food_eaten = apply_food_rules(&mut self.snakes, &mut self.food, &self.grid, self.food_target, &mut self.rng);
        Ok(TickReport {
            outcome: None,
            food_eaten,
            quit_requested: read.quit_requested,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.iter().find(|snake| snake.id == id)
    }

    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    /// The snake credited when `id` crashes: itself in solo, the rival in duel.
    pub fn opponent_of(&self, id: SnakeId) -> Option<SnakeId> {
        self.opponents.get(&id).copied()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_id: self.id,
            tick: self.tick,
            phase: self.phase,
            grid_width: self.grid.width,
            grid_height: self.grid.height,
            snakes: self.snakes.iter().map(SnakeView::from).collect(),
            food: self.food.iter().copied().collect(),
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Coordinate, Heading, KeyCode};

    #[test]
    fn test_setup_builds_players_and_opponent_map() {
        let config = GameConfig::default();
        let solo = Round::with_seed(&config, 1, 1).expect("solo round");
        assert_eq!(solo.snakes().len(), 1);
        assert_eq!(solo.opponent_of(SnakeId(1)), Some(SnakeId(1)));
        assert_eq!(solo.phase(), RoundPhase::Setup);
        assert!(solo.food().is_empty());

        let duel = Round::with_seed(&config, 2, 1).expect("duel round");
        assert_eq!(duel.mode(), PlayerMode::Duel);
        assert_eq!(duel.opponent_of(SnakeId(1)), Some(SnakeId(2)));
        assert_eq!(duel.opponent_of(SnakeId(2)), Some(SnakeId(1)));
        let blue = duel.snake(SnakeId(1)).expect("blue");
        assert_eq!(blue.len(), 5);
        assert!(blue.body().iter().all(|c| *c == Coordinate::new(5, 3)));
    }

    #[test]
    fn test_bad_player_count_and_speed() {
        let config = GameConfig::default();
        assert!(matches!(Round::with_seed(&config, 0, 1), Err(GameError::InvalidPlayerCount(0))));
        assert!(matches!(Round::with_seed(&config, 3, 1), Err(GameError::InvalidPlayerCount(3))));

        let slow = GameConfig { snake_speed: 2, ..GameConfig::default() };
        assert!(matches!(Round::with_seed(&slow, 1, 1), Err(GameError::InvalidSpeed { .. })));
        let fast = GameConfig { snake_speed: 61, ..GameConfig::default() };
        assert!(matches!(Round::with_seed(&fast, 1, 1), Err(GameError::InvalidSpeed { .. })));
    }

    #[test]
    fn test_tick_requires_running_round() {
        let mut round = Round::with_seed(&GameConfig::default(), 1, 1).expect("round");
        assert!(matches!(round.tick(Duration::ZERO), Err(GameError::RoundNotStarted)));
        round.start();
        assert_eq!(round.phase(), RoundPhase::Running);
        assert_eq!(round.food().len(), 1);
        assert!(round.tick(Duration::ZERO).is_ok());
    }

    #[test]
    fn test_input_queued_during_setup_is_discarded() {
        let mut round = Round::with_seed(&GameConfig::default(), 1, 1).expect("round");
        round.queue_input(InputEvent::KeyDown(KeyCode::new("Down")));
        round.start();
        round.tick(Duration::from_secs(1)).expect("tick");
        assert_eq!(round.snakes()[0].heading(), Heading::Right);
    }

    #[test]
    fn test_quit_is_reported_not_acted_on() {
        let mut round = Round::with_seed(&GameConfig::default(), 1, 1).expect("round");
        round.start();
        round.queue_input(InputEvent::Quit);
        let report = round.tick(Duration::from_secs(1)).expect("tick");
        assert!(report.quit_requested);
        assert_eq!(round.phase(), RoundPhase::Running);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut round = Round::with_seed(&GameConfig::default(), 2, 4).expect("round");
        round.start();
        round.tick(Duration::from_secs(1)).expect("tick");
        let snapshot = round.snapshot();
        assert_eq!(snapshot.round_id, round.id);
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.phase, RoundPhase::Running);
        assert_eq!(snapshot.snakes.len(), 2);
        assert_eq!(snapshot.snakes[0].body[0], Coordinate::new(5, 4));
        assert_eq!(snapshot.snakes[1].body[0], Coordinate::new(20, 19));
        assert_eq!(snapshot.food.len(), 1);

        let json = serde_json::to_value(&snapshot).expect("serializable");
        assert_eq!(json["phase"], "Running");
        assert_eq!(json["snakes"][0]["name"], "Blue");
    }
}
