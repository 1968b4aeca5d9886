use crate::config::{BOARD_SIZE, DEFAULT_BOMB_POSITION};
use crate::geometry::clamp_axis;

/// A single attack cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Bomb {
    x: i32,
    y: i32,
    hit: bool,
    overlapping: bool,
}

impl Bomb {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            hit: false,
            overlapping: false,
        }
    }

    /// Fresh hot bomb at the default cell.
    pub fn staged() -> Self {
        let (x, y) = DEFAULT_BOMB_POSITION;
        Bomb::new(x, y)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Whether the bomb landed on a ship.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Whether this bomb, while hot, sits on a cell already bombed by its owner.
    pub fn is_overlapping(&self) -> bool {
        self.overlapping
    }

    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Pull the bomb back onto the board.
    pub fn clamped(mut self) -> Self {
        self.x = clamp_axis(self.x, 1, BOARD_SIZE);
        self.y = clamp_axis(self.y, 1, BOARD_SIZE);
        self
    }

    pub(crate) fn mark_hit(&mut self) {
        self.hit = true;
    }

    pub(crate) fn set_overlapping(&mut self, overlapping: bool) {
        self.overlapping = overlapping;
    }
}
