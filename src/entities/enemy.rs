use crate::board;
use crate::geometry::{BoundingBox, Vec2};

/// A shark patrolling one row of the board, left to right, wrapping around.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    /// Units (board pixels) per second.
    pub speed: f64,
    /// Latched result of this tick's overlap test against the player.
    /// Movement is frozen while true; this is not a cooldown.
    pub is_colliding: bool,
}

impl Enemy {
    /// Spawns one tile off the left edge of the board in the given row.
    pub fn new(row: u32, speed: f64) -> Self {
        Self {
            position: Vec2::new(-board::TILE_WIDTH, row as f64 * board::TILE_HEIGHT),
            speed,
            is_colliding: false,
        }
    }

    /// Advances horizontal motion and handles the right-edge wrap.
    ///
    /// The wrap re-enters at `-TILE_WIDTH + dt*speed` rather than a fixed
    /// point so the apparent speed stays continuous across the seam.
    pub fn advance(&mut self, dt: f64) {
        if !self.is_colliding {
            self.position.x += dt * self.speed;
        }

        if self.position.x > board::BOARD_WIDTH {
            self.position.x = -board::TILE_WIDTH + dt * self.speed;
        }
    }

    /// Latches the per-tick collision flag from a fresh overlap test.
    pub fn check_player(&mut self, player_box: &BoundingBox) -> bool {
        self.is_colliding = self.bounding_box().intersects(player_box);
        self.is_colliding
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::at(
            self.position,
            board::ENEMY_LEFT_OFFSET,
            board::ENEMY_TOP_OFFSET,
            board::ENEMY_WIDTH,
            board::ENEMY_HEIGHT,
        )
    }

    /// Sprite selection is cosmetic; the hit variant shows while overlapping.
    pub fn sprite_lines(&self) -> Vec<&'static str> {
        if self.is_colliding {
            vec!["  ______  ", "><XXXX((*>"]
        } else {
            vec!["  ______  ", "><((((((*>"]
        }
    }
}
