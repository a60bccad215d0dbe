// Demo module for the game. Provides a frame-paced headless loop and the
// autopilot that plays it by pressing bound keys.
pub mod autopilot;
pub mod game_loop;

pub use autopilot::Autopilot;
pub use game_loop::{run_round, DemoEnd, DemoOptions};
