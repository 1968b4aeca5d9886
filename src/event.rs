use alloc::string::String;

use crate::player::Player;

/// Notable things that happened during one step, in the order they occurred.
/// Returned next to the new state so hosts can log or display them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ShipPlaced { player: Player, id: String },
    /// Confirm was pressed while the hot ship overlapped a placed one.
    PlacementRejected { player: Player, id: String },
    BombDropped { player: Player, x: i32, y: i32, hit: bool },
    /// Confirm was pressed on a cell the player had already bombed.
    BombRejected { player: Player, x: i32, y: i32 },
    ShipHit { owner: Player, id: String },
    ShipSunk { owner: Player, id: String },
    TurnPassed { to: Player },
    /// Both fleets are placed.
    BombingStarted,
    GameWon { winner: Player },
}
