use super::Move;

/// Result of a round from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Draw,
    Win,
    Loss,
}

impl Outcome {
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Self::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "DRAW"),
            Self::Win => write!(f, "WIN"),
            Self::Loss => write!(f, "LOSS"),
        }
    }
}

/// Compare the player's move against the engine's.
pub fn judge(player: Move, engine: Move) -> Outcome {
    if player == engine {
        Outcome::Draw
    } else if player.beats(&engine) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
