//! Common test utilities: an episode driver and position enumeration.

#![allow(dead_code)]

use gomoku_agents::{
    Board, CanonicalKey, Cell, Gomoku, Outcome, Player, Result, Snapshot,
    ports::{Agent, Environment},
};

/// Play one game to the end and report the outcome to both agents.
///
/// Returns the winner, or `None` for a draw.
pub fn play_episode(
    env: &mut Gomoku,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
) -> Result<Option<Player>> {
    let mut snapshot = env.snapshot();
    while !snapshot.terminal {
        let mv = match snapshot.current_player {
            Player::X => x.get_move(&snapshot)?,
            Player::O => o.get_move(&snapshot)?,
        };
        snapshot = env.apply_move(mv)?;
    }
    x.score(Outcome::for_player(snapshot.winner, Player::X))?;
    o.score(Outcome::for_player(snapshot.winner, Player::O))?;
    Ok(snapshot.winner)
}

/// Every 3x3 position with legal piece counts that is still in play,
/// with the player to move inferred from the counts (X moves first).
pub fn open_tic_tac_toe_positions() -> Vec<Snapshot> {
    let mut positions = Vec::new();
    for code in 0..3usize.pow(9) {
        let mut board = Board::new(3).unwrap();
        let mut rest = code;
        for index in 0..9 {
            let cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            rest /= 3;
            board.set(index / 3, index % 3, cell);
        }

        let x = board.count(Cell::X);
        let o = board.count(Cell::O);
        let to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            continue;
        };

        let game = Gomoku::from_position(board, 3, to_move).unwrap();
        if !game.is_over() {
            positions.push(game.snapshot());
        }
    }
    positions
}

/// X-to-move snapshot whose canonical key is `key` (own marks as X).
pub fn snapshot_for_key(key: &CanonicalKey) -> Snapshot {
    let chars: Vec<char> = key
        .as_str()
        .chars()
        .map(|c| match c {
            'P' => 'X',
            'R' => 'O',
            _ => '.',
        })
        .collect();
    let side = key.len().isqrt();
    let rows: Vec<String> = chars.chunks(side).map(|row| row.iter().collect()).collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Snapshot::new(Board::from_rows(&rows).unwrap(), Player::X)
}
