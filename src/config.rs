use crate::ship::ShipType;

/// Width and height of each player's grid. Coordinates are 1-indexed.
pub const BOARD_SIZE: i32 = 10;
pub const FLEET_SIZE: usize = 4;
pub const FLEET: [ShipType; FLEET_SIZE] = [
    ShipType::new("Ship2", 2),
    ShipType::new("Ship3", 3),
    ShipType::new("Ship4", 4),
    ShipType::new("Ship5", 5),
];

/// Cell where every unplaced ship waits before the player moves it.
pub const STAGING_POSITION: (i32, i32) = (3, 3);

/// Cell the hot bomb starts at, and returns to after each drop.
pub const DEFAULT_BOMB_POSITION: (i32, i32) = (4, 4);

/// What the engine does with input after the game has been decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum IdlePolicy {
    /// Return the finished state unchanged.
    #[default]
    Ignore,
    /// Fail with `GameError::InvalidPhase`.
    Reject,
}

/// Runtime validation policy for a `GameEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Reject input from the player who does not hold the turn.
    pub enforce_turn: bool,
    pub idle_policy: IdlePolicy,
}

impl EngineConfig {
    /// Strict server-side validation: out-of-turn and post-game input fail.
    pub const fn strict() -> Self {
        Self {
            enforce_turn: true,
            idle_policy: IdlePolicy::Reject,
        }
    }
}
