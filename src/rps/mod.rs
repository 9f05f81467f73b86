//! The game itself: three symbols, a cyclic dominance relation,
//! and a referee that compares two of them.
//!
//! Nothing here knows about history or prediction. The engine in
//! [`crate::predict`] only needs [`Move::counter`] from this module,
//! and the session glue only needs [`judge`].

mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
