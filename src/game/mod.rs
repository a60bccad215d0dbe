pub mod types;
pub mod error;
pub mod grid;
pub mod state;
pub mod snapshot;

pub mod entities;
pub mod systems;
pub mod demo;

pub use error::GameError;
pub use state::{Round, TickReport};
pub use snapshot::{RoundPhase, RoundSnapshot, SnakeView};
