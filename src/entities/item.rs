use std::f64::consts::TAU;

use crate::board;
use crate::geometry::{BoundingBox, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Heart,
    Shell,
}

impl ItemKind {
    /// Bounding box size for this kind, in board pixels.
    pub fn box_size(&self) -> (f64, f64) {
        match self {
            ItemKind::Heart => (45.0, 45.0),
            ItemKind::Shell => (54.0, 54.0),
        }
    }

    /// (left, top) box offset from the sprite position.
    pub fn box_offset(&self) -> (f64, f64) {
        match self {
            ItemKind::Heart => (30.0, 70.0),
            ItemKind::Shell => (26.0, 64.0),
        }
    }
}

/// A collectible that bobs in place until the player picks it up.
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Vec2,
    /// Immutable anchor the oscillation is centered on.
    pub start_position: Vec2,
    /// Oscillation accumulator in radians.
    pub phase: f64,
}

impl Item {
    pub fn new(kind: ItemKind, col: u32, row: u32) -> Self {
        let (x, y) = board::tile_to_pixels(col, row);
        let position = Vec2::new(x, y);
        Self {
            kind,
            position,
            start_position: position,
            phase: 0.0,
        }
    }

    /// Advances the bobbing motion.
    ///
    /// The phase step is a fixed 0.05 radians per tick, deliberately not
    /// scaled by `dt` to keep parity with the reference board behavior.
    pub fn update(&mut self, _dt: f64) {
        self.phase += 0.05;
        self.position = Vec2::new(
            self.start_position.x + self.phase.cos() / 4.0,
            self.start_position.y + self.phase.sin() / 4.0,
        );

        // One full cycle: snap home so the item never drifts
        if self.phase >= TAU {
            self.phase = 0.0;
            self.position = self.start_position;
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let (left, top) = self.kind.box_offset();
        let (width, height) = self.kind.box_size();
        BoundingBox::at(self.position, left, top, width, height)
    }
}
