use super::Context;
use super::Dice;
use super::Tally;
use crate::Count;
use crate::Error;
use crate::Order;
use crate::Result;
use crate::rps::Move;
use std::collections::BTreeMap;

/// Markov transition table: for every context of `order` consecutive
/// moves, how often each symbol came next.
///
/// Built by sliding a window of `order + 1` moves over the history with
/// stride 1; the first `order` moves are the key, the last is the
/// follower. A history of length `L` yields `L - order` observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transitions {
    order: Order,
    table: BTreeMap<Context, Tally>,
}

impl Transitions {
    pub fn build(history: &[Move], order: Order) -> Result<Self> {
        match order {
            0 => Err(Error::InvalidOrder(order)),
            _ => Ok(Self::tabulate(history, order)),
        }
    }

    /// Caller guarantees `order > 0`.
    pub(crate) fn tabulate(history: &[Move], order: Order) -> Self {
        debug_assert!(order > 0);
        let mut table = BTreeMap::<Context, Tally>::new();
        for window in history.windows(order + 1) {
            let (state, next) = window.split_at(order);
            match table.get_mut(state) {
                Some(tally) => tally.increment(next[0]),
                None => {
                    let mut tally = Tally::default();
                    tally.increment(next[0]);
                    table.insert(Context::from(state), tally);
                }
            }
        }
        Self { order, table }
    }

    /// Most common follower of the trailing context of `history`.
    /// `None` if the history is shorter than the order, or if that
    /// context never appeared with a follower.
    pub fn predict(&self, history: &[Move]) -> Option<Move> {
        Context::trailing(history, self.order)
            .and_then(|state| self.table.get(state))
            .and_then(Tally::argmax)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn get(&self, state: &[Move]) -> Option<&Tally> {
        self.table.get(state)
    }

    /// number of distinct contexts seen
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// number of (context, follower) pairs counted
    pub fn observations(&self) -> Count {
        self.table.values().map(Tally::total).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Context, &Tally)> {
        self.table.iter()
    }
}

/// Build a table from `history` and ask it for the next move,
/// rolling the dice when the trailing context has no followers.
/// `history` must hold at least `order` moves.
pub fn predict_by_transition<D: Dice>(
    history: &[Move],
    order: Order,
    dice: &mut D,
) -> Result<Move> {
    Ok(Transitions::build(history, order)?
        .predict(history)
        .unwrap_or_else(|| dice.roll()))
}

impl std::fmt::Display for Transitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Order: {}", self.order)?;
        for (state, tally) in self.table.iter() {
            writeln!(f, "{} -> {}", state, tally)?;
        }
        Ok(())
    }
}
