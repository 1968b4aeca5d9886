use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;

/// Every input the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Flip the hot ship's orientation. Does nothing to a bomb.
    Rotate,
    /// Commit the hot ship or bomb at its current cell.
    Confirm,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Left,
        Action::Right,
        Action::Down,
        Action::Up,
        Action::Rotate,
        Action::Confirm,
    ];

    /// Map a key name to an action. Accepts browser-style key names
    /// (`ArrowUp`, `Enter`, `r`) plus `w`/`a`/`s`/`d`; an empty string is Enter.
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Action::Up),
            "ArrowDown" | "s" | "S" => Some(Action::Down),
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "R" | "r" => Some(Action::Rotate),
            "Enter" | "" => Some(Action::Confirm),
            _ => None,
        }
    }

    /// Grid delta (dx, dy) for a movement action; y grows downwards.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Action::Up => Some((0, -1)),
            Action::Down => Some((0, 1)),
            Action::Left => Some((-1, 0)),
            Action::Right => Some((1, 0)),
            Action::Rotate | Action::Confirm => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Rotate => "rotate",
            Action::Confirm => "confirm",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = GameError;

    /// Parse a canonical action name, ignoring ASCII case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::InvalidAction(trimmed.to_string()))
    }
}
