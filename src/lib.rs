//! Decision-making agents for tic-tac-toe and Gomoku
//!
//! This crate provides:
//! - A rule-based tic-tac-toe player following Newell and Simon's strategy
//! - A tabular Q-learning agent whose value table persists between runs
//! - A random baseline
//! - An N-in-a-row environment and the snapshot types agents consume

pub mod adapters;
pub mod agents;
pub mod app;
pub mod error;
pub mod game;
pub mod ports;
pub mod q_learning;
pub mod types;
pub mod utils;

pub use agents::{RandomAgent, RuleBasedAgent};
pub use error::{Error, Result};
pub use game::{Board, Cell, Gomoku, Outcome, Player, Snapshot};
pub use q_learning::{LearningAgent, ValueTable};
pub use types::{CanonicalKey, Move};
