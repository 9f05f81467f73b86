use crate::rps::Move;

/// Everything the player can do at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Throw(Move),
    Stats,
    Save,
    Load,
    Reset,
    Quit,
}

impl Choice {
    /// menu order
    pub const ALL: [Self; 8] = [
        Self::Throw(Move::Rock),
        Self::Throw(Move::Scissors),
        Self::Throw(Move::Paper),
        Self::Stats,
        Self::Save,
        Self::Load,
        Self::Reset,
        Self::Quit,
    ];
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Throw(Move::Rock) => write!(f, "Rock"),
            Self::Throw(Move::Scissors) => write!(f, "Scissors"),
            Self::Throw(Move::Paper) => write!(f, "Paper"),
            Self::Stats => write!(f, "Show stats"),
            Self::Save => write!(f, "Save results"),
            Self::Load => write!(f, "Load history"),
            Self::Reset => write!(f, "Reset"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}
