//! Snapshot of a whole game.
//!
//! A `GameState` is a plain owned value. The engine never mutates a snapshot it
//! was handed; each step clones it and returns the successor, so older
//! snapshots stay valid for history, undo and rendering.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::board::Board;
use crate::common::GameError;
use crate::config::{FLEET, FLEET_SIZE};
use crate::player::Player;
use crate::ship::{Orientation, Ship};

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    PlacingShips,
    PlacingBombs,
    /// The game is decided; `winner` is set.
    Idle,
}

/// The two boards, one per player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Boards {
    pub human: Board,
    pub ai: Board,
}

impl Index<Player> for Boards {
    type Output = Board;

    fn index(&self, player: Player) -> &Board {
        match player {
            Player::Human => &self.human,
            Player::Ai => &self.ai,
        }
    }
}

impl IndexMut<Player> for Boards {
    fn index_mut(&mut self, player: Player) -> &mut Board {
        match player {
            Player::Human => &mut self.human,
            Player::Ai => &mut self.ai,
        }
    }
}

/// Serializable overall game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    /// Whose input is accepted for gameplay.
    pub turn: Player,
    /// Set exactly when `phase` is `Idle`.
    pub winner: Option<Player>,
    pub boards: Boards,
}

impl GameState {
    /// Canonical opening position: both fleets staged, Human to move.
    pub fn new() -> Self {
        GameState {
            phase: Phase::PlacingShips,
            turn: Player::Human,
            winner: None,
            boards: Boards::default(),
        }
    }

    /// Start directly in the bombing phase with both fleets already placed.
    ///
    /// Each array gives `(x, y, orientation)` for the standard fleet in size
    /// order. Fails with `InvalidFleet` if a ship leaves the board or two ships
    /// of the same fleet overlap.
    pub fn with_fleets(
        human: [(i32, i32, Orientation); FLEET_SIZE],
        ai: [(i32, i32, Orientation); FLEET_SIZE],
    ) -> Result<Self, GameError> {
        Ok(GameState {
            phase: Phase::PlacingBombs,
            turn: Player::Human,
            winner: None,
            boards: Boards {
                human: Board::placed(build_fleet(&human)?),
                ai: Board::placed(build_fleet(&ai)?),
            },
        })
    }

    /// Read-only view of `player`'s board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player]
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Idle
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn build_fleet(layout: &[(i32, i32, Orientation); FLEET_SIZE]) -> Result<Vec<Ship>, GameError> {
    let mut ships: Vec<Ship> = Vec::with_capacity(FLEET_SIZE);
    for (def, &(x, y, orientation)) in FLEET.iter().zip(layout.iter()) {
        let ship = Ship::new(*def, orientation, x, y);
        if ship.clone().clamped() != ship || ships.iter().any(|s| s.overlaps(&ship)) {
            return Err(GameError::InvalidFleet);
        }
        ships.push(ship);
    }
    Ok(ships)
}
