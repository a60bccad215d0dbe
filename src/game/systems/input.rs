//! Input mapping system.
//!
//! Drains raw key events at a fixed rate and turns each key-down into a
//! heading request on the first snake whose bindings know that key.

use std::collections::VecDeque;
use std::time::Duration;

use log::trace;

use crate::game::entities::Snake;
use crate::game::types::InputEvent;

/// What a read produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputRead {
    /// Heading requests written to snakes.
    pub applied: usize,
    /// A quit event was seen; the engine leaves it to the caller.
    pub quit_requested: bool,
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    read_interval: Duration,
    last_read: Duration,
}

impl InputMapper {
    /// `reads_per_second` must be non-zero.
    pub fn new(reads_per_second: u32) -> Self {
        Self {
            read_interval: Duration::from_secs(1) / reads_per_second.max(1),
            last_read: Duration::ZERO,
        }
    }

    pub fn read_interval(&self) -> Duration {
        self.read_interval
    }

    /// Drain `events` into heading requests, unless the previous read was
    /// less than one read interval ago, in which case nothing is consumed.
    pub fn read(&mut self, now: Duration, events: &mut VecDeque<InputEvent>, snakes: &mut [Snake]) -> InputRead {
        if now < self.last_read + self.read_interval {
            return InputRead::default();
        }
        self.last_read = now;

        let mut read = InputRead::default();
        for event in events.drain(..) {
            match event {
                InputEvent::KeyDown(key) => {
                    let target = snakes
                        .iter_mut()
                        .find_map(|snake| snake.bindings.heading_for(&key).map(|heading| (snake, heading)));
                    if let Some((snake, heading)) = target {
                        snake.request_heading(heading);
                        read.applied += 1;
                    } else {
                        trace!("[Input] Ignored unbound key {:?}", key.as_str());
                    }
                }
                InputEvent::KeyUp(_) => {}
                InputEvent::Quit => read.quit_requested = true,
            }
        }
        read
    }
}
