use crate::Count;
use crate::rps::Move;

/// Occurrence counter with one slot per symbol.
/// All three slots always exist, zero or not.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tally([Count; 3]);

impl Tally {
    pub fn increment(&mut self, m: Move) {
        self.0[m.index()] += 1;
    }

    pub fn count(&self, m: Move) -> Count {
        self.0[m.index()]
    }

    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }

    /// Most frequent symbol. A strictly greater count is needed to displace
    /// the current leader, so ties go to whichever comes first in
    /// [`Move::ALL`]. An empty tally carries no evidence at all.
    pub fn argmax(&self) -> Option<Move> {
        match self.total() {
            0 => None,
            _ => Move::ALL
                .into_iter()
                .fold(None, |best: Option<Move>, m| match best {
                    Some(b) if self.count(m) <= self.count(b) => Some(b),
                    _ => Some(m),
                }),
        }
    }
}

impl From<[Count; 3]> for Tally {
    fn from(counts: [Count; 3]) -> Self {
        Self(counts)
    }
}

impl From<&[Move]> for Tally {
    fn from(moves: &[Move]) -> Self {
        moves.iter().copied().collect()
    }
}

impl FromIterator<Move> for Tally {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut tally, m| {
            tally.increment(m);
            tally
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Move::ALL
                .iter()
                .map(|m| format!("{}:{}", m, self.count(*m)))
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
