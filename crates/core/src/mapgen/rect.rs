//! Axis-aligned room rectangles.

use crate::types::Pos;

/// Room bounds. `x2`/`y2` are the far wall, so a room built from `w × h` spans `w + 1` tiles
/// including both border walls and carves the `(w - 1) × (h - 1)` interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RoomRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Inclusive on every edge: rooms sharing a border row or column intersect.
    pub fn intersects(self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x1 && pos.x <= self.x2 && pos.y >= self.y1 && pos.y <= self.y2
    }

    pub fn interior(self) -> impl Iterator<Item = Pos> {
        let (x1, x2) = (self.x1 + 1, self.x2);
        ((self.y1 + 1)..self.y2).flat_map(move |y| (x1..x2).map(move |x| Pos { y, x }))
    }
}
