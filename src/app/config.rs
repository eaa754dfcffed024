//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::TIC_TAC_TOE_SIZE};

/// Configuration for creating a learning agent.
///
/// # Examples
///
/// ```
/// use gomoku_agents::app::LearningConfig;
///
/// let config = LearningConfig::new("alice")
///     .with_board_size(3)
///     .with_exploration_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Agent identity, also the key of its persisted table
    pub name: String,
    /// Side length of the board the agent plays on
    pub board_size: usize,
    /// Probability of playing a random legal move instead of the best known one
    pub exploration_rate: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl LearningConfig {
    /// Create a configuration for `name` with default values:
    /// - Board size: 3 (tic-tac-toe)
    /// - Exploration rate: 0 (pure exploitation)
    /// - Seed: None (non-deterministic)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_size: TIC_TAC_TOE_SIZE,
            exploration_rate: 0.0,
            seed: None,
        }
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before an agent is built from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty name or one that
    /// is not usable as a file name component, a zero board size, or an
    /// exploration rate outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "agent name must not be empty".to_string(),
            });
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(Error::InvalidConfiguration {
                message: format!("agent name '{}' cannot be used as a file name", self.name),
            });
        }
        if self.board_size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exploration rate {} must be within [0, 1]",
                    self.exploration_rate
                ),
            });
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self::new("QPlayer")
    }
}
