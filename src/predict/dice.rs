use crate::Error;
use crate::rps::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of uniformly random moves for whenever the
/// engine has nothing better to go on.
pub trait Dice {
    fn roll(&mut self) -> Move;
}

/// Uniform draws from a small, seedable generator.
#[derive(Debug, Clone)]
pub struct Uniform(SmallRng);

impl Uniform {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Dice for Uniform {
    fn roll(&mut self) -> Move {
        Move::from(self.0.random_range(0..3u8))
    }
}

/// Replays a fixed sequence of moves, cycling forever.
/// Stands in for real randomness wherever output must be exact.
#[derive(Debug, Clone)]
pub struct Script {
    moves: Vec<Move>,
    cursor: usize,
}

impl Script {
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl TryFrom<Vec<Move>> for Script {
    type Error = Error;
    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        match moves.is_empty() {
            true => Err(Error::EmptyScript),
            false => Ok(Self { moves, cursor: 0 }),
        }
    }
}

impl From<Move> for Script {
    fn from(m: Move) -> Self {
        Self {
            moves: vec![m],
            cursor: 0,
        }
    }
}

impl Dice for Script {
    fn roll(&mut self) -> Move {
        let m = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        m
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> Move {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Uniform::seeded(42);
        let mut b = Uniform::seeded(42);
        for _ in 0..64 {
            assert!(a.roll() == b.roll());
        }
    }

    #[test]
    fn uniform_covers_alphabet() {
        let ref mut dice = Uniform::seeded(7);
        let rolls = (0..300).map(|_| dice.roll()).collect::<Vec<_>>();
        for m in Move::ALL {
            assert!(rolls.contains(&m), "{} never rolled", m);
        }
    }

    #[test]
    fn script_cycles() {
        let mut dice = Script::try_from(vec![Move::Paper, Move::Rock]).unwrap();
        assert!(dice.roll() == Move::Paper);
        assert!(dice.roll() == Move::Rock);
        assert!(dice.roll() == Move::Paper);
        assert!(dice.rolls() == 3);
    }

    #[test]
    fn empty_script_rejected() {
        assert!(matches!(Script::try_from(Vec::<Move>::new()), Err(Error::EmptyScript)));
    }
}
