//! Errors returned by the game engine.

use alloc::string::String;

use crate::player::Player;

/// Errors returned by engine operations. The input state is never modified
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input outside the six recognised actions.
    InvalidAction(String),
    /// Input arrived after the game was decided, under `IdlePolicy::Reject`.
    InvalidPhase,
    /// Input from the player who does not hold the turn, under `enforce_turn`.
    OutOfTurn { expected: Player, actual: Player },
    /// A hand-built fleet has a ship off the board or two ships overlapping.
    InvalidFleet,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidAction(input) => write!(f, "Unknown action: {:?}", input),
            GameError::InvalidPhase => write!(f, "The game is already over"),
            GameError::OutOfTurn { expected, actual } => write!(
                f,
                "Player {} acted out of turn, waiting on {}",
                actual, expected
            ),
            GameError::InvalidFleet => write!(f, "Fleet has a ship off the board or overlapping another"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
