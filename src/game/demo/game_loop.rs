//! Headless game loop for local testing/demo.
//!
//! Paces ticks at the configured frame rate and feeds the engine the time
//! elapsed since the round started.

use std::time::Duration;

use log::{debug, info};
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::config::GameConfig;
use crate::game::demo::autopilot::Autopilot;
use crate::game::error::GameError;
use crate::game::state::Round;
use crate::game::types::{InputEvent, RoundOutcome};

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub players: usize,
    pub seed: Option<u64>,
    /// Without it snakes keep their starting heading until they crash.
    pub autopilot: bool,
    pub max_ticks: Option<u64>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            players: 1,
            seed: None,
            autopilot: true,
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEnd {
    Finished(RoundOutcome),
    Quit,
    TickLimit,
}

/// Play one round to completion. `extra_input` is drained into the round
/// every frame, ahead of the autopilot's own key presses.
pub async fn run_round(
    config: &GameConfig,
    options: &DemoOptions,
    mut extra_input: impl FnMut() -> Option<InputEvent>,
) -> Result<DemoEnd, GameError> {
    let mut round = match options.seed {
        Some(seed) => Round::with_seed(config, options.players, seed)?,
        None => Round::new(config, options.players)?,
    };
    let pilots: Vec<Autopilot> = if options.autopilot {
        round.snakes().iter().map(|snake| Autopilot::new(snake.id)).collect()
    } else {
        Vec::new()
    };

    round.start();
    let mut ticker = interval(Duration::from_secs(1) / config.frame_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let clock = Instant::now();
    let mut ticks = 0u64;

    loop {
        ticker.tick().await;

        while let Some(event) = extra_input() {
            round.queue_input(event);
        }
        for pilot in &pilots {
            if let Some(event) = pilot.steer(&round) {
                round.queue_input(event);
            }
        }

        let report = round.tick(clock.elapsed())?;
        ticks += 1;
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&round.snapshot()) {
                debug!("[Demo] {}", json);
            }
        }

        if let Some(outcome) = report.outcome {
            return Ok(DemoEnd::Finished(outcome));
        }
        if report.quit_requested {
            info!("[Demo] Quit requested, leaving round_id={}", round.id);
            return Ok(DemoEnd::Quit);
        }
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            info!("[Demo] Tick limit reached for round_id={}", round.id);
            return Ok(DemoEnd::TickLimit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_straight_line_solo_hits_wall() {
        let options = DemoOptions {
            seed: Some(42),
            autopilot: false,
            ..DemoOptions::default()
        };
        let end = run_round(&GameConfig::default(), &options, || None).await.expect("round runs");
        match end {
            DemoEnd::Finished(RoundOutcome::Score(length)) => assert!(length >= 5),
            other => panic!("unexpected end: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_event_stops_loop() {
        let options = DemoOptions {
            players: 2,
            seed: Some(1),
            ..DemoOptions::default()
        };
        let mut sent = false;
        let quit_once = move || {
            if sent {
                None
            } else {
                sent = true;
                Some(InputEvent::Quit)
            }
        };
        let end = run_round(&GameConfig::default(), &options, quit_once).await.expect("round runs");
        assert_eq!(end, DemoEnd::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_limit() {
        let options = DemoOptions {
            players: 2,
            seed: Some(3),
            max_ticks: Some(5),
            ..DemoOptions::default()
        };
        let end = run_round(&GameConfig::default(), &options, || None).await.expect("round runs");
        assert_eq!(end, DemoEnd::TickLimit);
    }

    #[tokio::test]
    async fn test_invalid_player_count_is_an_error() {
        let options = DemoOptions { players: 4, ..DemoOptions::default() };
        let result = run_round(&GameConfig::default(), &options, || None).await;
        assert!(matches!(result, Err(GameError::InvalidPlayerCount(4))));
    }
}
