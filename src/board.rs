//! Board geometry constants and the item layout table.
//!
//! All values are in board pixels and must not change: the bounding box sizes,
//! offsets, and movement clamps are tuned against each other.

use crate::entities::ItemKind;

pub const BOARD_WIDTH: f64 = 505.0;
pub const BOARD_HEIGHT: f64 = 606.0;
pub const TILE_WIDTH: f64 = 101.0;
pub const TILE_HEIGHT: f64 = 83.0;

pub const NUM_COLS: usize = 5;
pub const NUM_ROWS: usize = 6;

pub const ENEMY_WIDTH: f64 = 101.0;
pub const ENEMY_HEIGHT: f64 = 48.0;
pub const ENEMY_LEFT_OFFSET: f64 = 0.0;
pub const ENEMY_TOP_OFFSET: f64 = 72.0;

pub const PLAYER_WIDTH: f64 = 82.0;
pub const PLAYER_HEIGHT: f64 = 88.0;
pub const PLAYER_LEFT_OFFSET: f64 = 10.0;
pub const PLAYER_TOP_OFFSET: f64 = 51.0;

/// Player spawn tile: 5th column, 6th row.
pub const PLAYER_SPAWN_COL: u32 = 4;
pub const PLAYER_SPAWN_ROW: u32 = 5;

/// Literal board-edge clamps for player movement.
pub const PLAYER_MIN_X: f64 = 0.0;
pub const PLAYER_MAX_X: f64 = BOARD_WIDTH - TILE_WIDTH;
pub const PLAYER_MIN_Y: f64 = -8.0;
pub const PLAYER_MAX_Y: f64 = 432.0;

/// Fixed item placement: (kind, column, row). Collecting all five shells wins
/// the game; hearts add lives.
pub const ITEM_LAYOUT: [(ItemKind, u32, u32); 7] = [
    (ItemKind::Heart, 2, 2),
    (ItemKind::Heart, 4, 3),
    (ItemKind::Shell, 1, 0),
    (ItemKind::Shell, 3, 1),
    (ItemKind::Shell, 0, 2),
    (ItemKind::Shell, 3, 3),
    (ItemKind::Shell, 1, 4),
];

/// Number of enemy lanes spawned per game; rows 1-4 of the board.
pub const ENEMY_COUNT: usize = 4;

/// Converts a (column, row) tile coordinate to board pixels.
pub fn tile_to_pixels(col: u32, row: u32) -> (f64, f64) {
    (col as f64 * TILE_WIDTH, row as f64 * TILE_HEIGHT)
}
