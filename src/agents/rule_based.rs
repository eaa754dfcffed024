//! Rule-based tic-tac-toe strategy
//!
//! Implements Newell and Simon's priority list: win, block, fork, block the
//! opponent's fork, center, opposite corner, empty corner, empty side. The
//! first rule that applies decides the move.

use log::trace;

use crate::{
    Error, Result,
    game::{Board, Cell, LineAnalyzer, Player, Snapshot, TrialPlacement},
    ports::Agent,
    types::{Move, TIC_TAC_TOE_SIZE},
};

const CENTER: Move = Move::new(1, 1);
const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 2),
    Move::new(2, 0),
    Move::new(2, 2),
];
const SIDES: [Move; 4] = [
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(1, 2),
    Move::new(2, 1),
];

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Win,
    Block,
    Fork,
    BlockFork,
    Center,
    OppositeCorner,
    Corner,
    Side,
}

/// Stateless strategy for the 3x3 game.
#[derive(Debug, Clone)]
pub struct RuleBasedAgent {
    name: String,
}

impl RuleBasedAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Pick a move and report which rule chose it.
    ///
    /// # Errors
    ///
    /// Fails for terminal snapshots, full boards and boards that are not 3x3.
    pub fn decide(&self, snapshot: &Snapshot) -> Result<(Move, Tactic)> {
        if snapshot.terminal {
            return Err(Error::GameOver);
        }
        if snapshot.board.size() != TIC_TAC_TOE_SIZE {
            return Err(Error::UnsupportedBoardSize {
                size: snapshot.board.size(),
                expected: TIC_TAC_TOE_SIZE,
            });
        }

        let me = snapshot.current_player;
        let opponent = me.opponent();
        // Scratch copy for hypothetical placements; the snapshot stays untouched.
        let mut board = snapshot.board.clone();

        if let Some(mv) = LineAnalyzer::first_winning_move(&board, me) {
            return Ok((mv, Tactic::Win));
        }
        if let Some(mv) = LineAnalyzer::first_winning_move(&board, opponent) {
            return Ok((mv, Tactic::Block));
        }
        if let Some(mv) = fork_move(&mut board, me) {
            return Ok((mv, Tactic::Fork));
        }
        if let Some(mv) = fork_move(&mut board, opponent) {
            return Ok((mv, Tactic::BlockFork));
        }
        if is_open(&board, CENTER) {
            return Ok((CENTER, Tactic::Center));
        }
        if let Some(mv) = opposite_corner(&board, opponent) {
            return Ok((mv, Tactic::OppositeCorner));
        }
        if let Some(&mv) = CORNERS.iter().find(|&&mv| is_open(&board, mv)) {
            return Ok((mv, Tactic::Corner));
        }
        if let Some(&mv) = SIDES.iter().find(|&&mv| is_open(&board, mv)) {
            return Ok((mv, Tactic::Side));
        }

        Err(Error::NoValidMoves)
    }
}

fn is_open(board: &Board, mv: Move) -> bool {
    board.get(mv.row, mv.col) == Cell::Empty
}

/// First empty cell, row-major, that leaves `player` with two or more
/// winning lines.
fn fork_move(board: &mut Board, player: Player) -> Option<Move> {
    for mv in board.empty_cells() {
        let trial = TrialPlacement::place(board, mv, player);
        let threats = LineAnalyzer::winning_moves(&trial, player).len();
        if threats >= 2 {
            trace!("{player:?} forks at {mv} with {threats} threats");
            return Some(mv);
        }
    }
    None
}

/// Empty corner diagonally opposite one held by `opponent`.
fn opposite_corner(board: &Board, opponent: Player) -> Option<Move> {
    CORNERS
        .iter()
        .filter(|&&corner| board.get(corner.row, corner.col) == opponent.to_cell())
        .map(|corner| Move::new(2 - corner.row, 2 - corner.col))
        .find(|&mirror| is_open(board, mirror))
}

impl Agent for RuleBasedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, snapshot: &Snapshot) -> Result<Move> {
        let (mv, tactic) = self.decide(snapshot)?;
        trace!("{}: {tactic:?} at {mv}", self.name);
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(rows: &[&str], player: Player) -> (Move, Tactic) {
        let snapshot = Snapshot::new(Board::from_rows(rows).unwrap(), player);
        RuleBasedAgent::new("rules").decide(&snapshot).unwrap()
    }

    #[test]
    fn test_empty_board_takes_center() {
        assert_eq!(
            decide(&["...", "...", "..."], Player::X),
            (Move::new(1, 1), Tactic::Center)
        );
    }

    #[test]
    fn test_diagonal_win() {
        assert_eq!(
            decide(&["XO.", ".X.", "..."], Player::X),
            (Move::new(2, 2), Tactic::Win)
        );
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X can win on row 0 while O threatens row 1.
        assert_eq!(
            decide(&["XX.", "OO.", "..."], Player::X),
            (Move::new(0, 2), Tactic::Win)
        );
    }

    #[test]
    fn test_blocks_opponent() {
        assert_eq!(
            decide(&["OO.", ".X.", "..X"], Player::X),
            (Move::new(0, 2), Tactic::Block)
        );
    }

    #[test]
    fn test_creates_fork() {
        // X O .
        // . X .
        // . . O    -> X at (1,0) threatens row 1 and column 0
        assert_eq!(
            decide(&["XO.", ".X.", "..O"], Player::X),
            (Move::new(1, 0), Tactic::Fork)
        );
    }

    #[test]
    fn test_blocks_fork() {
        // X . .
        // . O .
        // . . X    -> (0,1) gives X one threat, (0,2) gives two, so O takes (0,2)
        assert_eq!(
            decide(&["X..", ".O.", "..X"], Player::O),
            (Move::new(0, 2), Tactic::BlockFork)
        );
    }

    #[test]
    fn test_opposite_corner() {
        assert_eq!(
            decide(&["O..", ".X.", "..."], Player::X),
            (Move::new(2, 2), Tactic::OppositeCorner)
        );
    }

    #[test]
    fn test_empty_corner_then_side() {
        assert_eq!(
            decide(&["...", ".O.", "..."], Player::X),
            (Move::new(0, 0), Tactic::Corner)
        );
        // X O X
        // . X .
        // O X O   -> corners and center taken, no threats
        assert_eq!(
            decide(&["XOX", ".X.", "OXO"], Player::O),
            (Move::new(1, 0), Tactic::Side)
        );
    }

    #[test]
    fn test_snapshot_board_untouched() {
        let snapshot = Snapshot::new(
            Board::from_rows(&["X..", ".O.", "..X"]).unwrap(),
            Player::O,
        );
        let before = snapshot.clone();
        RuleBasedAgent::new("rules").get_move(&snapshot).unwrap();
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_rejects_other_sizes_and_finished_games() {
        let mut agent = RuleBasedAgent::new("rules");
        let big = Snapshot::new(Board::new(15).unwrap(), Player::X);
        assert!(matches!(
            agent.get_move(&big),
            Err(Error::UnsupportedBoardSize { size: 15, .. })
        ));

        let mut over = Snapshot::new(Board::from_rows(&["XXX", "OO.", "..."]).unwrap(), Player::O);
        over.terminal = true;
        assert!(matches!(agent.get_move(&over), Err(Error::GameOver)));

        let full = Snapshot::new(Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap(), Player::O);
        assert!(matches!(agent.get_move(&full), Err(Error::NoValidMoves)));
    }
}
