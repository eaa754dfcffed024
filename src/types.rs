//! Newtype wrappers for moves and learned-state keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    game::{Cell, Snapshot},
};

/// Side length of the classic tic-tac-toe board.
pub const TIC_TAC_TOE_SIZE: usize = 3;

/// A (row, col) cell targeted by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Flattened row-major index on a `size` x `size` board.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Move {
            row: index / size,
            col: index % size,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

const EMPTY: char = 'E';
const OWN: char = 'P';
const OPPONENT: char = 'R';

/// Board encoding relative to the player about to act.
///
/// Each cell becomes `E` (empty), `P` (the acting player's mark) or `R`
/// (the opponent's mark), row-major. The same physical board therefore
/// produces different keys for X and O.
///
/// ```
/// use gomoku_agents::game::{Board, Player, Snapshot};
/// use gomoku_agents::types::CanonicalKey;
///
/// let board = Board::from_rows(&["X..", ".O.", "..."]).unwrap();
/// let as_x = CanonicalKey::from_snapshot(&Snapshot::new(board.clone(), Player::X));
/// let as_o = CanonicalKey::from_snapshot(&Snapshot::new(board, Player::O));
/// assert_eq!(as_x.as_str(), "PEEEREEEE");
/// assert_eq!(as_o.as_str(), "REEEPEEEE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Encode the snapshot's board from its current player's point of view.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let own = snapshot.current_player.to_cell();
        let encoded = snapshot
            .board
            .cells()
            .iter()
            .map(|&cell| match cell {
                Cell::Empty => EMPTY,
                c if c == own => OWN,
                _ => OPPONENT,
            })
            .collect();
        CanonicalKey(encoded)
    }

    /// Parse and validate a key for a board with `cells` cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] on a length mismatch or a character
    /// outside `E`/`P`/`R`.
    pub fn parse(s: &str, cells: usize) -> Result<Self, Error> {
        let len = s.chars().count();
        if len != cells {
            return Err(Error::InvalidKey {
                key: s.to_string(),
                reason: format!("expected {cells} cells, got {len}"),
            });
        }
        if let Some(bad) = s.chars().find(|c| ![EMPTY, OWN, OPPONENT].contains(c)) {
            return Err(Error::InvalidKey {
                key: s.to_string(),
                reason: format!("unexpected character '{bad}'"),
            });
        }
        Ok(CanonicalKey(s.to_string()))
    }

    /// Key of the state reached when the acting player marks `index`.
    ///
    /// The perspective does not flip: the new mark is encoded as own.
    pub fn after(&self, index: usize) -> Self {
        let encoded = self
            .0
            .chars()
            .enumerate()
            .map(|(i, c)| if i == index { OWN } else { c })
            .collect();
        CanonicalKey(encoded)
    }

    /// Indices of the empty cells in this state.
    pub fn open_cells(&self) -> Vec<usize> {
        self.0
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == EMPTY)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells encoded by this key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
