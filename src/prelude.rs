//! Commonly used types and utilities for ease of import.

pub use crate::{
    new_game, opponent_of, step, Action, Controller, GameEngine, GameError, GameEvent,
    GameState, Phase, Player, RandomAi,
};

#[cfg(feature = "std")]
pub use crate::{print_player_view, render_board, CliPlayer};
