//! Engine error type.
//!
//! Only configuration and lifecycle misuse can fail; running out of free
//! cells for food is not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("snake speed {speed} is outside [{min}, {max}] ticks per second")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },

    #[error("a round needs 1 or 2 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("round has not been started")]
    RoundNotStarted,

    #[error("round has already ended")]
    RoundEnded,

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
