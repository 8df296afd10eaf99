use crate::board;
use crate::entities::ItemKind;
use crate::geometry::{BoundingBox, Vec2};

/// Which sprite variant the player is currently showing. Variants other than
/// `Start` are transient and fall back once `display_expiry` passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Start,
    Hit,
    Item,
    Life,
}

/// The diver the arrow keys steer around the board.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub start_position: Vec2,
    /// Movement rate snapshot, refreshed to `dt * 4` every tick. Movement
    /// commands arriving between ticks use the last snapshot.
    pub rate: f64,
    /// Movement lock set by enemy contact, cleared by the delayed respawn.
    pub hit: bool,
    pub lives: u32,
    pub shells: u32,
    pub display_state: DisplayState,
    /// Absolute timestamp (seconds) after which the sprite falls back to Start.
    pub display_expiry: f64,
}

impl Player {
    pub fn new() -> Self {
        let (x, y) = board::tile_to_pixels(board::PLAYER_SPAWN_COL, board::PLAYER_SPAWN_ROW);
        let start_position = Vec2::new(x, y);
        Self {
            position: start_position,
            start_position,
            rate: 0.0,
            hit: false,
            lives: 1,
            shells: 0,
            display_state: DisplayState::Start,
            display_expiry: 0.0,
        }
    }

    /// Per-tick refresh: snapshot the movement rate for commands that arrive
    /// before the next tick.
    pub fn update(&mut self, dt: f64) {
        self.rate = dt * 4.0;
    }

    pub fn move_left(&mut self) {
        if !self.hit {
            self.position.x -= self.rate * board::TILE_WIDTH;
            self.clamp();
        }
    }

    pub fn move_right(&mut self) {
        if !self.hit {
            self.position.x += self.rate * board::TILE_WIDTH;
            self.clamp();
        }
    }

    pub fn move_up(&mut self) {
        if !self.hit {
            self.position.y -= self.rate * board::TILE_HEIGHT;
            self.clamp();
        }
    }

    pub fn move_down(&mut self) {
        if !self.hit {
            self.position.y += self.rate * board::TILE_HEIGHT;
            self.clamp();
        }
    }

    fn clamp(&mut self) {
        self.position.x = self.position.x.clamp(board::PLAYER_MIN_X, board::PLAYER_MAX_X);
        self.position.y = self.position.y.clamp(board::PLAYER_MIN_Y, board::PLAYER_MAX_Y);
    }

    /// Enemy-contact reaction: locks movement, spends a life, shows the hit
    /// sprite for 1.1 seconds. The caller schedules the delayed respawn.
    pub fn got_hit(&mut self, now: f64) {
        self.display_state = DisplayState::Hit;
        self.display_expiry = now + 1.1;
        self.hit = true;
        self.lives = self.lives.saturating_sub(1);
    }

    /// Applies a collected item and flashes the matching sprite for 1 second.
    pub fn got_item(&mut self, kind: ItemKind, now: f64) {
        match kind {
            ItemKind::Shell => {
                self.shells += 1;
                self.display_state = DisplayState::Item;
            }
            ItemKind::Heart => {
                self.lives += 1;
                self.display_state = DisplayState::Life;
            }
        }
        self.display_expiry = now + 1.0;
    }

    /// Snaps back to the spawn tile and clears the hit lock.
    pub fn respawn(&mut self) {
        self.position = self.start_position;
        self.hit = false;
        self.display_state = DisplayState::Start;
        self.display_expiry = 0.0;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::at(
            self.position,
            board::PLAYER_LEFT_OFFSET,
            board::PLAYER_TOP_OFFSET,
            board::PLAYER_WIDTH,
            board::PLAYER_HEIGHT,
        )
    }

    /// Resolves the sprite for this frame; transient variants expire against
    /// the explicit `now` so rendering stays deterministic in tests.
    pub fn sprite_lines(&self, now: f64) -> Vec<&'static str> {
        let active = self.display_expiry > now;
        match self.display_state {
            DisplayState::Hit if active => vec![" .-. ", "(x_x)", " '-' "],
            DisplayState::Item if active => vec![" .-. ", "(o,o)", " '@' "],
            DisplayState::Life if active => vec![" .-. ", "(o,o)", " '+' "],
            _ => vec![" .-. ", "(o_o)", " '-' "],
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
