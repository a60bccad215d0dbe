//! Input configuration constants.
//! 
//! Rates are reads per second; key names are the opaque identifiers the
//! windowing layer puts on its key-down events.
use crate::game::types::{Heading, KeyBindings};

/// How often queued key events are drained. Fixed and independent of snake
/// speed; it keeps one queued press from being consumed across several frames.
pub const INPUT_READ_RATE: u32 = 25;

/// Arrow keys, bound to the first snake.
pub fn arrow_bindings() -> KeyBindings {
    KeyBindings::from_pairs([
        ("Up", Heading::Up),
        ("Right", Heading::Right),
        ("Down", Heading::Down),
        ("Left", Heading::Left),
    ])
}

/// WASD, bound to the second snake.
pub fn wasd_bindings() -> KeyBindings {
    KeyBindings::from_pairs([
        ("w", Heading::Up),
        ("d", Heading::Right),
        ("s", Heading::Down),
        ("a", Heading::Left),
    ])
}
