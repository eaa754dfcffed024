//! Winning line analysis for the 3x3 board

use super::{Board, Cell, Player};
use crate::types::Move;

/// The eight 3x3 lines in scan order: each row followed by the column with
/// the same index, then the main diagonal and the anti-diagonal.
pub const SCAN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Read-only line queries on a 3x3 board.
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Winning cells for `player`, one entry per line in scan order.
    ///
    /// A cell that completes two lines is listed twice, so the length of
    /// the result is the number of open threats.
    pub fn winning_moves(board: &Board, player: Player) -> Vec<Move> {
        debug_assert_eq!(board.size(), 3);
        SCAN_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(board, player, line))
            .collect()
    }

    /// First winning cell for `player` in scan order.
    pub fn first_winning_move(board: &Board, player: Player) -> Option<Move> {
        debug_assert_eq!(board.size(), 3);
        SCAN_LINES
            .iter()
            .find_map(|line| Self::winning_move_in_line(board, player, line))
    }

    /// Two of `player`'s marks and exactly one empty cell.
    fn winning_move_in_line(
        board: &Board,
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Move> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &(row, col) in line {
            match board.get(row, col) {
                Cell::Empty => {
                    if empty.is_some() {
                        return None;
                    }
                    empty = Some(Move::new(row, col));
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty } else { None }
    }
}
