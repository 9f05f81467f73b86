use super::Round;
use crate::Count;
use crate::rps::Outcome;

/// Win/draw/loss totals over a round log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    wins: Count,
    draws: Count,
    losses: Count,
}

impl Stats {
    pub fn total(&self) -> Count {
        self.wins + self.draws + self.losses
    }
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn draws(&self) -> Count {
        self.draws
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn decisive(&self) -> Count {
        self.wins + self.losses
    }

    /// Player win percentage, draws excluded.
    /// `None` until at least one round was decisive.
    pub fn win_rate(&self) -> Option<f64> {
        match self.decisive() {
            0 => None,
            n => Some(100. * self.wins as f64 / n as f64),
        }
    }
}

impl<'a> FromIterator<&'a Round> for Stats {
    fn from_iter<I: IntoIterator<Item = &'a Round>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut stats, round| {
            match round.outcome() {
                Outcome::Win => stats.wins += 1,
                Outcome::Draw => stats.draws += 1,
                Outcome::Loss => stats.losses += 1,
            }
            stats
        })
    }
}

impl From<&[Round]> for Stats {
    fn from(rounds: &[Round]) -> Self {
        rounds.iter().collect()
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total games   {:>6}", self.total())?;
        writeln!(f, "wins          {:>6}", self.wins)?;
        writeln!(f, "draws         {:>6}", self.draws)?;
        writeln!(f, "losses        {:>6}", self.losses)?;
        write!(f, "win rate      {:>6.2}% (draws excluded)", self.win_rate().unwrap_or(0.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::Move::*;

    #[test]
    fn counts_by_outcome() {
        let rounds = [
            Round::from((Rock, Scissors)),
            Round::from((Rock, Paper)),
            Round::from((Paper, Paper)),
            Round::from((Scissors, Paper)),
        ];
        let stats = Stats::from(&rounds[..]);
        assert!(stats.total() == 4);
        assert!(stats.wins() == 2);
        assert!(stats.draws() == 1);
        assert!(stats.losses() == 1);
    }

    #[test]
    fn win_rate_excludes_draws() {
        let rounds = [
            Round::from((Rock, Scissors)),
            Round::from((Rock, Paper)),
            Round::from((Rock, Paper)),
            Round::from((Rock, Paper)),
            Round::from((Paper, Paper)),
        ];
        let rate = Stats::from(&rounds[..]).win_rate().unwrap();
        assert!((rate - 25.).abs() < 1e-9);
    }

    #[test]
    fn win_rate_undefined_without_decisive_rounds() {
        assert!(Stats::default().win_rate().is_none());
        let rounds = [Round::from((Rock, Rock)), Round::from((Paper, Paper))];
        assert!(Stats::from(&rounds[..]).win_rate().is_none());
        assert!(Stats::from(&rounds[..]).to_string().contains("0.00%"));
    }
}
