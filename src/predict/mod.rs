//! Prediction engine.
//!
//! Two models read the player's history:
//! - [`Transitions`] maps every length-`order` window of consecutive moves
//!   to a [`Tally`] of the move that followed it, and predicts the most
//!   common follower of the current trailing [`Context`].
//! - [`frequency`] ignores context and predicts the most played symbol.
//!
//! The [`Selector`] chains them: transition evidence for the exact recent
//! context beats aggregate frequency, which beats a roll of the [`Dice`].
//! The predicted player move is then answered with its counter.
//!
//! Tables are rebuilt from the full history on every call. Histories in
//! this game are short, and a table that is never cached can never be stale.

mod context;
mod decision;
mod dice;
mod marginal;
mod selector;
mod tally;
mod transitions;

pub use context::*;
pub use decision::*;
pub use dice::*;
pub use marginal::*;
pub use selector::*;
pub use tally::*;
pub use transitions::*;
