use crate::rps::Move;

/// Which rule produced the engine's reply.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Basis {
    /// Not enough history, or no evidence at all.
    Random,
    /// Trailing context unseen; fell back to overall frequency.
    Frequency,
    /// Trailing context seen; most common follower.
    Transition,
}

/// The engine's reply for one round, and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    predicted: Option<Move>,
    reply: Move,
    basis: Basis,
}

impl Decision {
    pub fn random(reply: Move) -> Self {
        Self {
            predicted: None,
            reply,
            basis: Basis::Random,
        }
    }

    /// Answer a predicted player move with its counter.
    pub fn counter(predicted: Move, basis: Basis) -> Self {
        Self {
            predicted: Some(predicted),
            reply: predicted.counter(),
            basis,
        }
    }

    /// what we think the player will throw
    pub fn predicted(&self) -> Option<Move> {
        self.predicted
    }
    /// what the engine throws
    pub fn reply(&self) -> Move {
        self.reply
    }
    pub fn basis(&self) -> Basis {
        self.basis
    }
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Frequency => write!(f, "frequency"),
            Self::Transition => write!(f, "transition"),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.predicted {
            Some(predicted) => write!(f, "{} ({} predicts {})", self.reply, self.basis, predicted),
            None => write!(f, "{} ({})", self.reply, self.basis),
        }
    }
}
