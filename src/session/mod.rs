//! Score keeping around the engine.
//!
//! [`Session`] owns the player's move history and the log of rounds, and
//! threads them through the engine one round at a time. [`ledger`] moves
//! round logs to and from disk.

pub mod ledger;
mod round;
mod session;
mod stats;

pub use round::*;
pub use session::*;
pub use stats::*;
