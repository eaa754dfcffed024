//! Environment port - the game simulation agents play against

use crate::{Result, game::Snapshot, types::Move};

/// Owns the live board and enforces the rules.
///
/// Agents only ever see the immutable [`Snapshot`]s handed out here.
pub trait Environment {
    /// Current state of the game.
    fn snapshot(&self) -> Snapshot;

    /// Validate and play `mv` for the player to act.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended and
    /// [`crate::Error::InvalidMove`] for an occupied or off-board cell.
    fn apply_move(&mut self, mv: Move) -> Result<Snapshot>;
}
