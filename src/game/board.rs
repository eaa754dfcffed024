//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::Move};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Square grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardSize`] for a zero size.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidBoardSize {
                size,
                reason: "board must have at least one cell".to_string(),
            });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Build a board from one string per row.
    ///
    /// ```
    /// use gomoku_agents::game::{Board, Cell};
    ///
    /// let board = Board::from_rows(&["X.O", ".X.", "..."]).unwrap();
    /// assert_eq!(board.get(0, 2), Cell::O);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a square or contain an
    /// unknown character.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let mut board = Board::new(rows.len())?;
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != board.size {
                return Err(Error::InvalidBoardSize {
                    size: board.size,
                    reason: format!("row {row} has {} cells", chars.len()),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position: row * board.size + col,
                    context: text.to_string(),
                })?;
                board.cells[row * board.size + col] = cell;
            }
        }
        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the cell at (row, col). Panics when off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i, self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Immutable view of a game handed to agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Player,
    pub terminal: bool,
    pub winner: Option<Player>,
}

impl Snapshot {
    /// A non-terminal snapshot with `current_player` to act.
    pub fn new(board: Board, current_player: Player) -> Self {
        Snapshot {
            board,
            current_player,
            terminal: false,
            winner: None,
        }
    }

    /// Empty cells, or nothing once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.terminal {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Check that `mv` targets an empty cell of a running game.
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.terminal
            && self.board.contains(mv.row, mv.col)
            && self.board.get(mv.row, mv.col) == Cell::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_roundtrips_display() {
        let board = Board::from_rows(&["X.O", ".X.", "O.."]).unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\nO..\n");
        assert_eq!(board.count(Cell::X), 2);
        assert_eq!(board.count(Cell::O), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        assert!(Board::from_rows(&["X.O", ".X", "..."]).is_err());
        assert!(Board::from_rows(&["X.Q", "...", "..."]).is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Board::new(0),
            Err(Error::InvalidBoardSize { size: 0, .. })
        ));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(&["XXO", "O.X", "X.."]).unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![Move::new(1, 1), Move::new(2, 1), Move::new(2, 2)]
        );
    }

    #[test]
    fn test_terminal_snapshot_has_no_legal_moves() {
        let board = Board::new(3).unwrap();
        let mut snapshot = Snapshot::new(board, Player::X);
        assert_eq!(snapshot.legal_moves().len(), 9);
        assert!(snapshot.is_legal(Move::new(1, 1)));

        snapshot.terminal = true;
        assert!(snapshot.legal_moves().is_empty());
        assert!(!snapshot.is_legal(Move::new(1, 1)));
    }
}
