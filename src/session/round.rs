use crate::rps::Move;
use crate::rps::Outcome;
use crate::rps::judge;

/// One completed round. Field names double as the column
/// names of exported logs; `player` is what imports read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    player: Move,
    engine: Move,
    #[serde(rename = "result")]
    outcome: Outcome,
}

impl Round {
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn engine(&self) -> Move {
        self.engine
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Judges the pair on construction, so a round can never
/// disagree with its own outcome.
impl From<(Move, Move)> for Round {
    fn from((player, engine): (Move, Move)) -> Self {
        Self {
            player,
            engine,
            outcome: judge(player, engine),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "you: {:<8} engine: {:<8} result: {}",
            self.player, self.engine, self.outcome
        )
    }
}
