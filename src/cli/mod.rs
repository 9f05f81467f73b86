//! Interactive terminal game.

mod args;
mod choice;
mod game;

pub use args::*;
pub use choice::*;
pub use game::*;
