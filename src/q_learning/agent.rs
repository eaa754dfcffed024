//! Tabular Q-learning agent
//!
//! The agent keeps one [`ValueTable`] keyed by the board as seen by the
//! player to act, learns online after every move and once more at the end
//! of each episode, and persists the table through a [`TableRepository`].

use log::{debug, info};
use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    app::LearningConfig,
    game::{Outcome, Snapshot},
    ports::{Agent, TableRepository},
    q_learning::value_table::ValueTable,
    types::{CanonicalKey, Move},
    utils::build_rng,
};

/// The most recent (state, action) choice, awaiting its reward.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransition {
    pub state: CanonicalKey,
    pub action: usize,
}

/// Q-learning agent (off-policy TD control)
///
/// Selects the highest-valued legal move, falling back to a uniformly random
/// one for unseen states or with probability `exploration_rate`.
#[derive(Debug)]
pub struct LearningAgent<R: TableRepository> {
    name: String,
    board_size: usize,
    table: ValueTable,
    pending: Option<PendingTransition>,
    exploration_rate: f64,
    rng: StdRng,
    repository: R,
}

impl<R: TableRepository> LearningAgent<R> {
    /// Create an agent and load any table previously stored under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a stored table
    /// exists but cannot be read.
    pub fn new(config: LearningConfig, repository: R) -> Result<Self> {
        config.validate()?;
        let cells = config.board_size * config.board_size;
        let table = repository.load(&config.name, cells)?;
        if table.is_empty() {
            info!("{}: starting with an empty value table", config.name);
        } else {
            info!("{}: loaded {} states", config.name, table.len());
        }

        Ok(Self {
            name: config.name,
            board_size: config.board_size,
            table,
            pending: None,
            exploration_rate: config.exploration_rate,
            rng: build_rng(config.seed),
            repository,
        })
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Change the exploration rate, clamped to [0, 1]. NaN disables exploration.
    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.exploration_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
    }

    /// Highest-valued candidate, ties broken uniformly at random
    fn greedy_action(&mut self, state: &CanonicalKey, candidates: &[usize]) -> Option<usize> {
        let best = candidates
            .iter()
            .map(|&action| self.table.get(state, action))
            .reduce(f64::max)?;
        let ties: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&action| self.table.get(state, action) == best)
            .collect();
        ties.choose(&mut self.rng).copied()
    }
}

impl<R: TableRepository + Send> Agent for LearningAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, snapshot: &Snapshot) -> Result<Move> {
        if snapshot.terminal {
            return Err(Error::GameOver);
        }
        if snapshot.board.size() != self.board_size {
            return Err(Error::UnsupportedBoardSize {
                size: snapshot.board.size(),
                expected: self.board_size,
            });
        }

        let state = CanonicalKey::from_snapshot(snapshot);
        let legal: Vec<usize> = snapshot
            .legal_moves()
            .iter()
            .map(|mv| mv.index(self.board_size))
            .collect();
        if legal.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let explore = self.rng.random::<f64>() < self.exploration_rate;
        let action = if explore || !self.table.contains(&state) {
            if self.table.materialize(&state) {
                debug!("{}: new state {state}", self.name);
            }
            legal.choose(&mut self.rng).copied()
        } else {
            self.greedy_action(&state, &legal)
        }
        .ok_or(Error::NoValidMoves)?;

        self.table.update(&state, action, 0.0);
        self.pending = Some(PendingTransition { state, action });

        Ok(Move::from_index(action, self.board_size))
    }

    fn score(&mut self, outcome: Outcome) -> Result<()> {
        match self.pending.take() {
            Some(PendingTransition { state, action }) => {
                let value = self.table.update(&state, action, outcome.reward());
                debug!(
                    "{}: {outcome:?} -> Q({state}, {action}) = {value:.4}",
                    self.name
                );
            }
            None => debug!("{}: {outcome:?} reported with no pending move", self.name),
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.repository.save(&self.name, &self.table)?;
        info!("{}: saved {} states", self.name, self.table.len());
        Ok(())
    }
}
