use crate::Error;

/// One of the three hand shapes.
///
/// Discriminants fix the enumeration order used everywhere a tie has
/// to be broken: Rock, then Scissors, then Paper.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Move {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Move {
    /// every symbol, in tie-break order
    pub const ALL: [Self; 3] = [Self::Rock, Self::Scissors, Self::Paper];

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// rock > scissors > paper > rock
    pub fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }

    /// the move that beats this one
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Scissors => Self::Rock,
            Self::Paper => Self::Scissors,
        }
    }
}

impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Scissors,
            2 => Self::Paper,
            _ => panic!("Invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// Accepts English names, single letters, and the Japanese labels
/// that older round logs were written with.
impl TryFrom<&str> for Move {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "グー" => Ok(Self::Rock),
            "scissors" | "s" | "チョキ" => Ok(Self::Scissors),
            "paper" | "p" | "パー" => Ok(Self::Paper),
            _ => Err(Error::UnknownMove(s.to_string())),
        }
    }
}
impl TryFrom<String> for Move {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "rock",
                Self::Scissors => "scissors",
                Self::Paper => "paper",
            }
        )
    }
}
