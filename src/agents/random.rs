//! Uniform random baseline

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    game::Snapshot,
    ports::Agent,
    types::Move,
    utils::build_rng,
};

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent, seeded for reproducible play when `seed` is set.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            rng: build_rng(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, snapshot: &Snapshot) -> Result<Move> {
        if snapshot.terminal {
            return Err(Error::GameOver);
        }
        snapshot
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    #[test]
    fn test_only_legal_moves() {
        let snapshot = Snapshot::new(Board::from_rows(&["XOX", "O.X", "OX."]).unwrap(), Player::O);
        let mut agent = RandomAgent::new("random", Some(3));
        for _ in 0..20 {
            let mv = agent.get_move(&snapshot).unwrap();
            assert!(mv == Move::new(1, 1) || mv == Move::new(2, 2));
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let snapshot = Snapshot::new(Board::new(15).unwrap(), Player::X);
        let mut a = RandomAgent::new("a", Some(99));
        let mut b = RandomAgent::new("b", Some(99));
        for _ in 0..10 {
            assert_eq!(a.get_move(&snapshot).unwrap(), b.get_move(&snapshot).unwrap());
        }
    }

    #[test]
    fn test_full_board() {
        let snapshot = Snapshot::new(Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap(), Player::O);
        let mut agent = RandomAgent::new("random", None);
        assert!(matches!(agent.get_move(&snapshot), Err(Error::NoValidMoves)));
    }
}
