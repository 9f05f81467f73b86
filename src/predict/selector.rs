use super::Basis;
use super::Decision;
use super::Dice;
use super::Transitions;
use super::Uniform;
use super::frequency;
use crate::DEFAULT_ORDER;
use crate::Error;
use crate::Order;
use crate::Result;
use crate::rps::Move;

/// Picks the engine's move from the player's history.
///
/// Below `order` moves of history there is nothing to read, so the reply
/// is random and the transition table is never built. From there on the
/// trailing context is looked up in a freshly built [`Transitions`] table;
/// if it never occurred, the overall [`frequency`] leader is used instead.
/// The fallback is keyed on the missing context, not on whether the two
/// models disagree.
#[derive(Debug, Clone)]
pub struct Selector<D = Uniform> {
    order: Order,
    dice: D,
}

impl<D: Dice> Selector<D> {
    pub fn new(order: Order, dice: D) -> Result<Self> {
        match order {
            0 => Err(Error::InvalidOrder(order)),
            _ => Ok(Self { order, dice }),
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn decide(&mut self, history: &[Move]) -> Decision {
        let decision = if history.len() < self.order {
            Decision::random(self.dice.roll())
        } else {
            let table = Transitions::tabulate(history, self.order);
            log::trace!("{}", table);
            table
                .predict(history)
                .map(|predicted| Decision::counter(predicted, Basis::Transition))
                .or_else(|| {
                    frequency(history)
                        .map(|predicted| Decision::counter(predicted, Basis::Frequency))
                })
                .unwrap_or_else(|| Decision::random(self.dice.roll()))
        };
        log::debug!("history {:>4} | order {} | {}", history.len(), self.order, decision);
        decision
    }
}

impl Default for Selector<Uniform> {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            dice: Uniform::default(),
        }
    }
}

/// One-shot form of [`Selector::decide`].
pub fn decide_engine_move<D: Dice>(history: &[Move], order: Order, dice: D) -> Result<Move> {
    Ok(Selector::new(order, dice)?.decide(history).reply())
}
