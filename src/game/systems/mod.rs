pub mod input;
pub mod movement;
pub mod rules;

pub use input::*;
pub use movement::*;
pub use rules::*;
