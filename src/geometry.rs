//! Axis-aligned box helpers shared by ship placement and bombing.
//!
//! Boxes are inclusive on all four edges and carry no notion of board bounds,
//! so a box may extend past the grid or into negative coordinates.

/// Inclusive rectangle `[x1, x2] × [y1, y2]` covering a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    /// Box of a straight `length`-cell strip starting at (`x`, `y`).
    pub fn strip(x: i32, y: i32, length: i32, horizontal: bool) -> Self {
        let extent = length - 1;
        Self {
            x1: x,
            y1: y,
            x2: x + if horizontal { extent } else { 0 },
            y2: y + if horizontal { 0 } else { extent },
        }
    }

    /// Returns `true` if the two boxes share at least one cell.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Returns `true` if (`x`, `y`) lies inside the box, edges included.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }
}

/// Clamp a single coordinate into `[lo, hi]`.
#[inline]
pub fn clamp_axis(value: i32, lo: i32, hi: i32) -> i32 {
    value.max(lo).min(hi)
}
