use core::fmt;

use rand::rngs::SmallRng;

use crate::action::Action;
use crate::state::GameState;

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Human, Player::Ai];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

/// Get the opponent of `player`.
pub fn opponent_of(player: Player) -> Player {
    player.opponent()
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

/// Source of input for one seat: a person at a keyboard, a scripted opponent,
/// anything that feeds actions into the engine's step function.
pub trait Controller {
    /// Choose the next action for `player` given the current snapshot. `Ok(None)`
    /// means the controller has nothing more to say and the session should end.
    fn next_action(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
        player: Player,
    ) -> anyhow::Result<Option<Action>>;
}
