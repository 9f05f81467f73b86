use crate::Order;
use crate::rps::Move;
use std::borrow::Borrow;

/// A run of consecutive moves used as a Markov state.
/// Two contexts are equal iff they hold the same moves in the same order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Context(Vec<Move>);

impl Context {
    /// The last `order` moves of `history`, if there are that many.
    pub fn trailing(history: &[Move], order: Order) -> Option<&[Move]> {
        history
            .len()
            .checked_sub(order)
            .map(|start| &history[start..])
    }

    pub fn order(&self) -> Order {
        self.0.len()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }
}

impl From<&[Move]> for Context {
    fn from(moves: &[Move]) -> Self {
        Self(moves.to_vec())
    }
}

impl From<Vec<Move>> for Context {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

/// Lets tables be probed with a borrowed window of history.
/// Vec and slice orderings agree, so map invariants hold.
impl Borrow<[Move]> for Context {
    fn borrow(&self) -> &[Move] {
        &self.0
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({})",
            self.0
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}
