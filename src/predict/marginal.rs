use super::Dice;
use super::Tally;
use crate::rps::Move;

/// The symbol played most often across the whole history,
/// ties broken by [`Move::ALL`] order. `None` for an empty history.
pub fn frequency(history: &[Move]) -> Option<Move> {
    Tally::from(history).argmax()
}

/// [`frequency`], with a roll of the dice standing in for no evidence.
pub fn predict_by_frequency<D: Dice>(history: &[Move], dice: &mut D) -> Move {
    frequency(history).unwrap_or_else(|| dice.roll())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::Script;

    #[test]
    fn most_common_symbol() {
        let history = [Move::Paper, Move::Rock, Move::Paper, Move::Scissors];
        assert!(frequency(&history) == Some(Move::Paper));
    }

    #[test]
    fn tie_goes_to_rock_then_scissors() {
        let history = [Move::Paper, Move::Scissors];
        assert!(frequency(&history) == Some(Move::Scissors));
        let history = [Move::Paper, Move::Rock];
        assert!(frequency(&history) == Some(Move::Rock));
    }

    #[test]
    fn empty_history_rolls() {
        let ref mut dice = Script::from(Move::Scissors);
        assert!(frequency(&[]).is_none());
        assert!(predict_by_frequency(&[], dice) == Move::Scissors);
        assert!(dice.rolls() == 1);
    }

    #[test]
    fn evidence_never_rolls() {
        let ref mut dice = Script::from(Move::Scissors);
        assert!(predict_by_frequency(&[Move::Rock], dice) == Move::Rock);
        assert!(dice.rolls() == 0);
    }

    #[test]
    fn idempotent() {
        let history = [Move::Rock, Move::Paper, Move::Paper, Move::Rock];
        assert!(frequency(&history) == frequency(&history));
    }
}
