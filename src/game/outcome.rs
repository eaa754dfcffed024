//! Episode outcomes reported to agents

use serde::{Deserialize, Serialize};

use super::Player;

/// Result of a finished episode from one agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Loss,
    Win,
    Draw,
}

impl Outcome {
    /// Terminal reward fed into the value update.
    pub fn reward(self) -> f64 {
        match self {
            Outcome::Loss => -10.0,
            Outcome::Win => 10.0,
            Outcome::Draw => 5.0,
        }
    }

    /// Outcome for `me` given the game's winner (`None` for a draw).
    pub fn for_player(winner: Option<Player>, me: Player) -> Self {
        match winner {
            Some(player) if player == me => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        }
    }
}
