//! Board, snapshot and environment types shared by all agents

pub mod board;
pub mod gomoku;
pub mod lines;
pub mod outcome;
pub mod trial;

pub use board::{Board, Cell, Player, Snapshot};
pub use gomoku::Gomoku;
pub use lines::{LineAnalyzer, SCAN_LINES};
pub use outcome::Outcome;
pub use trial::TrialPlacement;
