//! Scoped hypothetical placements on a scratch board

use std::ops::Deref;

use super::{Board, Cell, Player};
use crate::types::Move;

/// A mark placed on a board for the lifetime of the guard.
///
/// The cell is reset to [`Cell::Empty`] when the guard drops, so every exit
/// path out of an evaluation leaves the board as it was.
///
/// ```
/// use gomoku_agents::game::{Board, Cell, Player, TrialPlacement};
/// use gomoku_agents::types::Move;
///
/// let mut board = Board::new(3).unwrap();
/// {
///     let trial = TrialPlacement::place(&mut board, Move::new(1, 1), Player::X);
///     assert_eq!(trial.get(1, 1), Cell::X);
/// }
/// assert_eq!(board.get(1, 1), Cell::Empty);
/// ```
pub struct TrialPlacement<'a> {
    board: &'a mut Board,
    at: Move,
}

impl<'a> TrialPlacement<'a> {
    /// Place `player`'s mark on `at`, which must be empty.
    pub fn place(board: &'a mut Board, at: Move, player: Player) -> Self {
        debug_assert_eq!(board.get(at.row, at.col), Cell::Empty);
        board.set(at.row, at.col, player.to_cell());
        TrialPlacement { board, at }
    }
}

impl Deref for TrialPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.board.set(self.at.row, self.at.col, Cell::Empty);
    }
}
