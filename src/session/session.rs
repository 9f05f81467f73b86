use super::Round;
use super::Stats;
use crate::predict::Dice;
use crate::predict::Selector;
use crate::rps::Move;

/// Everything that persists between rounds: the player's move history
/// and the round log. The engine only ever sees a borrowed slice of the
/// history, and only this type appends to it, strictly between rounds.
#[derive(Debug, Default, Clone)]
pub struct Session {
    history: Vec<Move>,
    rounds: Vec<Round>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn stats(&self) -> Stats {
        Stats::from(self.rounds())
    }

    /// Ask the engine for its reply, judge it against `player`,
    /// and record both. The engine decides before seeing `player`.
    pub fn play<D: Dice>(&mut self, player: Move, selector: &mut Selector<D>) -> Round {
        let decision = selector.decide(self.history());
        let round = Round::from((player, decision.reply()));
        log::info!("round {:>4} | {}", self.rounds.len() + 1, round);
        self.history.push(player);
        self.rounds.push(round);
        round
    }

    /// Append previously recorded player moves. They feed future
    /// predictions but are not rounds of this session.
    pub fn extend<I: IntoIterator<Item = Move>>(&mut self, moves: I) -> usize {
        let before = self.history.len();
        self.history.extend(moves);
        let added = self.history.len() - before;
        log::info!("imported {} moves, history now {}", added, self.history.len());
        added
    }

    pub fn reset(&mut self) {
        log::info!("resetting session after {} rounds", self.rounds.len());
        self.history.clear();
        self.rounds.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::Basis;
    use crate::predict::Script;
    use crate::predict::Uniform;
    use crate::rps::Move::*;
    use crate::rps::Outcome;

    #[test]
    fn rounds_accumulate() {
        let ref mut session = Session::new();
        let ref mut selector = Selector::new(3, Uniform::seeded(11)).unwrap();
        let ref mut player = Uniform::seeded(12);
        for n in 1..=50 {
            session.play(player.roll(), selector);
            let stats = session.stats();
            assert!(session.rounds().len() == n);
            assert!(session.history().len() == n);
            assert!(stats.total() == n);
            assert!(stats.wins() + stats.draws() + stats.losses() == n);
        }
    }

    #[test]
    fn history_tracks_player_moves() {
        let ref mut session = Session::new();
        let ref mut selector = Selector::new(3, Script::from(Rock)).unwrap();
        for m in [Paper, Scissors, Rock] {
            session.play(m, selector);
        }
        assert!(session.history() == [Paper, Scissors, Rock]);
        assert!(session.rounds().iter().map(Round::player).eq([Paper, Scissors, Rock]));
    }

    #[test]
    fn engine_decides_before_move_is_recorded() {
        // with order 3 the fourth rock is predicted from three prior rocks only
        let ref mut session = Session::new();
        session.extend([Rock, Rock, Rock, Rock]);
        let ref mut selector = Selector::new(3, Script::from(Scissors)).unwrap();
        let round = session.play(Rock, selector);
        assert!(round.engine() == Paper);
        assert!(round.outcome() == Outcome::Loss);
        assert!(selector.decide(session.history()).basis() == Basis::Transition);
    }

    #[test]
    fn imports_feed_history_not_rounds() {
        let ref mut session = Session::new();
        assert!(session.extend([Rock, Paper]) == 2);
        assert!(session.history().len() == 2);
        assert!(session.rounds().is_empty());
        assert!(session.stats().total() == 0);
    }

    #[test]
    fn reset_clears_everything() {
        let ref mut session = Session::new();
        let ref mut selector = Selector::new(3, Script::from(Rock)).unwrap();
        session.extend([Rock, Paper]);
        session.play(Paper, selector);
        session.reset();
        assert!(session.history().is_empty());
        assert!(session.rounds().is_empty());
    }
}
