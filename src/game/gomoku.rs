//! N-in-a-row environment used by drivers and tests

use log::debug;

use super::{Board, Cell, Player, Snapshot};
use crate::{Error, Result, ports::Environment, types::Move};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Board, turn and result bookkeeping for one game.
///
/// X moves first. A stone wins when the run through it in some direction is
/// exactly `in_row` long; longer runs do not count.
#[derive(Debug, Clone)]
pub struct Gomoku {
    board: Board,
    in_row: usize,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
}

impl Gomoku {
    pub const DEFAULT_SIZE: usize = 15;
    pub const DEFAULT_IN_ROW: usize = 5;

    /// Empty `size` x `size` game won by `in_row` stones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `in_row` is zero or does
    /// not fit on the board.
    pub fn new(size: usize, in_row: usize) -> Result<Self> {
        Self::from_position(Board::new(size)?, in_row, Player::X)
    }

    /// Classic 3x3, three in a row.
    pub fn tic_tac_toe() -> Result<Self> {
        Self::new(3, 3)
    }

    /// Resume from an arbitrary position with `next_player` to move.
    pub fn from_position(board: Board, in_row: usize, next_player: Player) -> Result<Self> {
        if in_row == 0 || in_row > board.size() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "{in_row} in a row cannot be played on a {0}x{0} board",
                    board.size()
                ),
            });
        }

        let mut game = Gomoku {
            board,
            in_row,
            current_player: next_player,
            game_over: false,
            winner: None,
        };
        game.winner = game.find_winner();
        game.game_over = game.winner.is_some() || game.board.is_full();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn in_row(&self) -> usize {
        self.in_row
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn find_winner(&self) -> Option<Player> {
        let size = self.board.size();
        (0..size * size)
            .map(|i| Move::from_index(i, size))
            .find(|&mv| self.completes_line(mv))
            .and_then(|mv| match self.board.get(mv.row, mv.col) {
                Cell::X => Some(Player::X),
                Cell::O => Some(Player::O),
                Cell::Empty => None,
            })
    }

    fn completes_line(&self, at: Move) -> bool {
        let cell = self.board.get(at.row, at.col);
        if cell == Cell::Empty {
            return false;
        }
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.run_length(at, dr, dc, cell);
            let backward = self.run_length(at, -dr, -dc, cell);
            forward + backward + 1 == self.in_row
        })
    }

    /// Matching stones after `from` in direction (dr, dc), excluding `from`.
    fn run_length(&self, from: Move, dr: isize, dc: isize, cell: Cell) -> usize {
        let size = self.board.size() as isize;
        let mut count = 0;
        let mut row = from.row as isize + dr;
        let mut col = from.col as isize + dc;
        while (0..size).contains(&row)
            && (0..size).contains(&col)
            && self.board.get(row as usize, col as usize) == cell
        {
            count += 1;
            row += dr;
            col += dc;
        }
        count
    }
}

impl Environment for Gomoku {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            terminal: self.game_over,
            winner: self.winner,
        }
    }

    fn apply_move(&mut self, mv: Move) -> Result<Snapshot> {
        if self.game_over {
            return Err(Error::GameOver);
        }
        if !self.board.contains(mv.row, mv.col) || self.board.get(mv.row, mv.col) != Cell::Empty
        {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        self.board.set(mv.row, mv.col, self.current_player.to_cell());
        if self.completes_line(mv) {
            debug!("{:?} wins with {mv}", self.current_player);
            self.game_over = true;
            self.winner = Some(self.current_player);
        } else if self.board.is_full() {
            debug!("board full, game drawn");
            self.game_over = true;
        } else {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Gomoku, moves: &[(usize, usize)]) -> Snapshot {
        let mut snapshot = game.snapshot();
        for &(row, col) in moves {
            snapshot = game.apply_move(Move::new(row, col)).unwrap();
        }
        snapshot
    }

    #[test]
    fn test_tic_tac_toe_row_win() {
        let mut game = Gomoku::tic_tac_toe().unwrap();
        let snapshot = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(snapshot.terminal);
        assert_eq!(snapshot.winner, Some(Player::X));
        assert_eq!(snapshot.current_player, Player::X);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = Gomoku::tic_tac_toe().unwrap();
        // X O X
        // X O O
        // O X X
        let snapshot = play(
            &mut game,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(snapshot.terminal);
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn test_rejects_occupied_and_finished() {
        let mut game = Gomoku::tic_tac_toe().unwrap();
        game.apply_move(Move::new(1, 1)).unwrap();
        assert!(matches!(
            game.apply_move(Move::new(1, 1)),
            Err(Error::InvalidMove { row: 1, col: 1 })
        ));
        assert!(matches!(
            game.apply_move(Move::new(3, 0)),
            Err(Error::InvalidMove { .. })
        ));
        assert_eq!(game.snapshot().current_player, Player::O);

        play(&mut game, &[(0, 0), (0, 1), (2, 2), (2, 1)]);
        assert!(game.is_over());
        assert!(matches!(
            game.apply_move(Move::new(2, 0)),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_gomoku_diagonal_five() {
        let mut game = Gomoku::new(Gomoku::DEFAULT_SIZE, Gomoku::DEFAULT_IN_ROW).unwrap();
        let mut moves = Vec::new();
        for i in 0..5 {
            moves.push((i + 3, 7 - i));
            if i < 4 {
                moves.push((0, i));
            }
        }
        let snapshot = play(&mut game, &moves);
        assert_eq!(snapshot.winner, Some(Player::X));
    }

    #[test]
    fn test_overline_does_not_win() {
        // Six X stones with a gap filled last.
        let board = Board::from_rows(&[
            "XXX.XX", "OOOO..", "......", "......", "......", "......",
        ])
        .unwrap();
        let mut game = Gomoku::from_position(board, 5, Player::X).unwrap();
        let snapshot = game.apply_move(Move::new(0, 3)).unwrap();
        assert!(!snapshot.terminal);
        assert_eq!(snapshot.current_player, Player::O);
    }

    #[test]
    fn test_from_position_detects_finished_game() {
        let board = Board::from_rows(&["XXX", "OO.", "..."]).unwrap();
        let game = Gomoku::from_position(board, 3, Player::O).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Player::X));
    }

    #[test]
    fn test_in_row_must_fit() {
        assert!(Gomoku::new(3, 4).is_err());
        assert!(Gomoku::new(3, 0).is_err());
    }
}
