/// Main configuration module.
/// 
/// Re-exports submodules for gameplay and input configuration.
pub mod game;
pub mod input;

pub use game::{GameConfig, SnakeSpawn};
