//! Game-logic engine for one- or two-player grid Snake.
//!
//! The engine is tick driven: a caller feeds it raw key events and a
//! monotonic timestamp, and reads back snake bodies, food cells and, once,
//! the round outcome. Drawing, windowing and process exit live elsewhere.

pub mod config;
pub mod game;
