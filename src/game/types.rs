use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

use serde::{Serialize, Deserialize};

/// A grid cell, addressed as (row, column). Rows grow downwards.
///
/// Signed so a head that left the board is still representable; the wall
/// check is what rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<Heading> for Coordinate {
    type Output = Coordinate;

    fn add(self, heading: Heading) -> Coordinate {
        let (d_row, d_col) = heading.delta();
        Coordinate::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Unit vector as (row, column).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// A heading and its inverse sum to the zero vector.
    pub fn is_opposite(self, other: Heading) -> bool {
        let (a_row, a_col) = self.delta();
        let (b_row, b_col) = other.delta();
        a_row + b_row == 0 && a_col + b_col == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnakeId(pub u8);

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Presentation metadata; the engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color { r: 100, g: 175, b: 255 };
    pub const RED: Color = Color { r: 255, g: 55, b: 60 };
}

/// Opaque key identifier as delivered by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-snake table from key to heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(HashMap<KeyCode, Heading>);

impl KeyBindings {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Heading)>) -> Self {
        Self(pairs.into_iter().map(|(key, heading)| (KeyCode::new(key), heading)).collect())
    }

    pub fn heading_for(&self, key: &KeyCode) -> Option<Heading> {
        self.0.get(key).copied()
    }

    /// First key bound to `heading`, if any.
    pub fn key_for(&self, heading: Heading) -> Option<&KeyCode> {
        self.0.iter().find(|(_, h)| **h == heading).map(|(key, _)| key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw events handed to the engine by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    Solo,
    Duel,
}

impl PlayerMode {
    pub fn from_count(players: usize) -> Option<Self> {
        match players {
            1 => Some(PlayerMode::Solo),
            2 => Some(PlayerMode::Duel),
            _ => None,
        }
    }

    pub fn player_count(self) -> usize {
        match self {
            PlayerMode::Solo => 1,
            PlayerMode::Duel => 2,
        }
    }
}

/// Terminal value of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Solo: length of the snake when it crashed.
    Score(usize),
    /// Duel: the snake that did not crash.
    Winner(SnakeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Opponent,
    Wall,
    SelfBody,
}
