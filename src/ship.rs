//! Ship definitions, placement geometry and hit accounting.

use alloc::string::String;
use core::fmt;

use crate::bomb::Bomb;
use crate::config::{BOARD_SIZE, STAGING_POSITION};
use crate::geometry::{clamp_axis, BoundingBox};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Footprint extends along x.
    Horizontal,
    /// Footprint extends along y.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: u8,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: u8) -> Self {
        Self { name, length }
    }

    /// Ship's name, used as its id within a fleet.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> u8 {
        self.length
    }
}

/// A ship with its top-left cell, orientation and damage.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: String,
    size: u8,
    x: i32,
    y: i32,
    orientation: Orientation,
    overlapping: bool,
    hits: u8,
    sunken: bool,
}

impl Ship {
    /// Build an undamaged ship of `ship_type` with its top-left cell at (`x`, `y`).
    /// The position is taken as given; bounds are only enforced by [`Ship::clamped`].
    pub fn new(ship_type: ShipType, orientation: Orientation, x: i32, y: i32) -> Self {
        Ship {
            id: String::from(ship_type.name()),
            size: ship_type.length(),
            x,
            y,
            orientation,
            overlapping: false,
            hits: 0,
            sunken: false,
        }
    }

    /// A ship waiting in the staging cell, horizontal.
    pub fn staged(ship_type: ShipType) -> Self {
        let (x, y) = STAGING_POSITION;
        Ship::new(ship_type, Orientation::Horizontal, x, y)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Top-left cell (x, y).
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// Whether this ship, while hot, collides with an already placed ship.
    pub fn is_overlapping(&self) -> bool {
        self.overlapping
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunken
    }

    /// Cells covered by the ship.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::strip(self.x, self.y, i32::from(self.size), self.is_horizontal())
    }

    /// Two ships overlap when their bounding boxes intersect.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.bbox().intersects(&other.bbox())
    }

    /// Shift the ship without any bounds check.
    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotate(&mut self) {
        self.orientation = self.orientation.rotated();
    }

    /// Pull the ship back onto the board so its whole footprint fits.
    pub fn clamped(mut self) -> Self {
        let far = BOARD_SIZE - i32::from(self.size) + 1;
        let (max_x, max_y) = match self.orientation {
            Orientation::Horizontal => (far, BOARD_SIZE),
            Orientation::Vertical => (BOARD_SIZE, far),
        };
        self.x = clamp_axis(self.x, 1, max_x);
        self.y = clamp_axis(self.y, 1, max_y);
        self
    }

    /// Recompute the overlap marker against the ships already placed.
    pub fn mark_overlapping(&mut self, placed: &[Ship]) {
        self.overlapping = placed.iter().any(|s| s.overlaps(self));
    }

    /// Register `bomb` against this ship. Returns `true` if the bomb lands inside
    /// the footprint, in which case `hits` grows by one. Each bomb must be applied
    /// at most once per ship.
    pub fn register_hit(&mut self, bomb: &Bomb) -> bool {
        let (x, y) = bomb.position();
        let hit = self.bbox().contains(x, y);
        if hit {
            self.hits = self.hits.saturating_add(1);
        }
        if self.hits == self.size {
            self.sunken = true;
        }
        hit
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{}, overlapping: {}, sunken: {} }}",
            self.id,
            self.x,
            self.y,
            self.orientation,
            self.hits,
            self.size,
            self.overlapping,
            self.sunken,
        )
    }
}
