//! Agent port - the interface every strategy exposes to a driver

use crate::{
    Result,
    game::{Outcome, Snapshot},
    types::Move,
};

/// A move-choosing strategy driven by an external turn loop.
///
/// A driver asks for a move on each turn, applies it through an
/// [`Environment`](super::Environment), reports the episode [`Outcome`]
/// once the game ends and calls [`Agent::shutdown`] once the agent is no
/// longer needed.
///
/// # Examples
///
/// ```no_run
/// use gomoku_agents::game::{Gomoku, Outcome, Player};
/// use gomoku_agents::ports::{Agent, Environment};
///
/// fn play_one<A: Agent, B: Agent>(x: &mut A, o: &mut B) -> gomoku_agents::Result<()> {
///     let mut game = Gomoku::tic_tac_toe()?;
///     let mut snapshot = game.snapshot();
///     let mut x_turn = true;
///     while !snapshot.terminal {
///         let mv = if x_turn { x.get_move(&snapshot)? } else { o.get_move(&snapshot)? };
///         snapshot = game.apply_move(mv)?;
///         x_turn = !x_turn;
///     }
///     x.score(Outcome::for_player(snapshot.winner, Player::X))?;
///     o.score(Outcome::for_player(snapshot.winner, Player::O))?;
///     Ok(())
/// }
/// ```
pub trait Agent: Send {
    /// Name identifying this agent, also used as its persistence key.
    fn name(&self) -> &str;

    /// Choose a move for the player to act in `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] for a terminal snapshot and
    /// [`crate::Error::NoValidMoves`] when no empty cell remains.
    fn get_move(&mut self, snapshot: &Snapshot) -> Result<Move>;

    /// Report the finished episode's outcome from this agent's side.
    ///
    /// The default implementation ignores it, suitable for fixed strategies.
    fn score(&mut self, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Flush any learned state. Safe to call more than once.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
