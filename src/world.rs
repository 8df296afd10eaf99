use rand::Rng;

use crate::board;
use crate::entities::{Enemy, Item, Player};
use crate::input::Command;

/// One-shot deferred mutations scheduled by the hit/game-over protocol.
///
/// There is deliberately no way to cancel a scheduled effect: a pending hit
/// release or world rebuild always fires, matching the reference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingEffect {
    /// Fires 1.1s after enemy contact: respawn the player, and if the last
    /// life was spent, enter the game-over freeze.
    ReleaseHit,
    /// Fires 3s into the game-over freeze: rebuild a fresh game.
    RebuildWorld,
}

/// The whole game board: entities, flags, and the pending-effect queue.
///
/// All timing flows through the explicit `now` argument (seconds on a
/// monotonic clock), so tests can step time without sleeping.
pub struct World {
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    /// All five shells collected; board frozen until Confirm.
    pub won: bool,
    /// Game-over freeze; clears itself after the 3s rebuild delay.
    pub over: bool,
    pub easy_mode: bool,
    pub debug_overlay: bool,
    pending: Vec<(f64, PendingEffect)>,
}

impl World {
    pub fn new(easy_mode: bool) -> Self {
        let mut world = Self {
            items: Vec::new(),
            enemies: Vec::new(),
            player: Player::new(),
            won: false,
            over: false,
            easy_mode,
            debug_overlay: false,
            pending: Vec::new(),
        };
        world.new_game();
        world
    }

    /// Rebuilds the board: items from the fixed layout, a fresh player at
    /// spawn, and four enemy lanes with randomized speeds.
    ///
    /// Easy mode empties the first lane (speed 0) and slows the last one to
    /// 50; hard mode leaves all four speeds in [100, 300].
    pub fn new_game(&mut self) {
        self.items.clear();
        self.enemies.clear();

        for (kind, col, row) in board::ITEM_LAYOUT {
            self.items.push(Item::new(kind, col, row));
        }

        self.player = Player::new();

        let mut rng = rand::rng();
        for lane in 0..board::ENEMY_COUNT {
            let mut speed = rng.random_range(100.0..=300.0);
            if self.easy_mode && lane == 0 {
                speed = 0.0;
            }
            if self.easy_mode && lane == board::ENEMY_COUNT - 1 {
                speed = 50.0;
            }
            self.enemies.push(Enemy::new((lane + 1) as u32, speed));
        }
    }

    /// Advances the simulation one frame.
    ///
    /// Due deferred effects run first; entity updates are suspended while the
    /// board is frozen (game over or won), which is exactly how the 3s
    /// rebuild timer gets its chance to fire.
    pub fn tick(&mut self, dt: f64, now: f64) {
        self.drain_effects(now);

        if self.over || self.won {
            return;
        }

        self.player.update(dt);
        self.collect_items(now);

        for item in &mut self.items {
            item.update(dt);
        }

        let player_box = self.player.bounding_box();
        for enemy in &mut self.enemies {
            enemy.advance(dt);

            // Fresh contact only: the hit lock suppresses re-triggering
            // while the overlap persists
            if enemy.check_player(&player_box) && !self.player.hit {
                self.player.got_hit(now);
                self.pending.push((now + 1.1, PendingEffect::ReleaseHit));
            }
        }

        if self.player.shells >= 5 {
            self.enter_won();
        }
    }

    /// Applies a single input command. Commands outside the set are a no-op
    /// by construction; Confirm only acts on the win screen.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Stop => {}
            Command::Left => self.player.move_left(),
            Command::Right => self.player.move_right(),
            Command::Up => self.player.move_up(),
            Command::Down => self.player.move_down(),
            Command::Confirm => {
                if self.won {
                    self.won = false;
                    self.new_game();
                }
            }
        }
    }

    /// Difficulty writes always reset the current game.
    pub fn set_difficulty(&mut self, easy_mode: bool) {
        self.easy_mode = easy_mode;
        self.won = false;
        self.over = false;
        self.new_game();
    }

    /// Rendering-only toggle.
    pub fn toggle_debug(&mut self) {
        self.debug_overlay = !self.debug_overlay;
    }

    /// Scans active items against the player box, removing every strict
    /// overlap. Reverse index iteration keeps removal stable: no item is
    /// skipped or processed twice.
    fn collect_items(&mut self, now: f64) {
        let player_box = self.player.bounding_box();
        for i in (0..self.items.len()).rev() {
            if self.items[i].bounding_box().intersects(&player_box) {
                let item = self.items.remove(i);
                self.player.got_item(item.kind, now);
            }
        }
    }

    fn enter_won(&mut self) {
        self.won = true;
        self.items.clear();
        self.enemies.clear();
        // Winning resets the option toggles to their defaults
        self.easy_mode = true;
        self.debug_overlay = false;
    }

    fn drain_effects(&mut self, now: f64) {
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].0 <= now {
                let (_, effect) = self.pending.remove(i);
                self.apply_effect(effect, now);
            } else {
                i += 1;
            }
        }
    }

    fn apply_effect(&mut self, effect: PendingEffect, now: f64) {
        match effect {
            PendingEffect::ReleaseHit => {
                self.player.respawn();

                if self.player.lives == 0 {
                    // Full reset path: freeze the board behind the game-over
                    // overlay, then rebuild from scratch after 3 seconds
                    self.player.lives = 1;
                    self.player.shells = 0;
                    self.over = true;
                    self.items.clear();
                    self.enemies.clear();
                    self.pending.push((now + 3.0, PendingEffect::RebuildWorld));
                }
            }
            PendingEffect::RebuildWorld => {
                self.over = false;
                self.new_game();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemKind;
    use crate::geometry::Vec2;

    const DT: f64 = 0.016;

    /// Parks a zero-speed enemy on top of the player's spawn tile.
    fn overlap_player(world: &mut World) {
        world.enemies[0].speed = 0.0;
        world.enemies[0].position = Vec2::new(400.0, 415.0);
    }

    #[test]
    fn test_new_game_builds_the_full_board() {
        let world = World::new(false);
        assert_eq!(world.items.len(), 7);
        assert_eq!(world.enemies.len(), 4);
        assert_eq!(world.player.lives, 1);
        assert!(!world.won);
        assert!(!world.over);
    }

    #[test]
    fn test_hard_mode_speeds_are_all_random() {
        let world = World::new(false);
        for enemy in &world.enemies {
            assert!((100.0..=300.0).contains(&enemy.speed));
        }
    }

    #[test]
    fn test_easy_mode_empties_one_lane_and_slows_another() {
        let world = World::new(true);
        assert_eq!(world.enemies[0].speed, 0.0);
        assert_eq!(world.enemies[3].speed, 50.0);
        assert!((100.0..=300.0).contains(&world.enemies[1].speed));
        assert!((100.0..=300.0).contains(&world.enemies[2].speed));
    }

    #[test]
    fn test_enemies_spawn_in_rows_1_through_4() {
        let world = World::new(false);
        let rows: Vec<f64> = world.enemies.iter().map(|e| e.position.y).collect();
        assert_eq!(rows, vec![83.0, 166.0, 249.0, 332.0]);
        for enemy in &world.enemies {
            assert_eq!(enemy.position.x, -board::TILE_WIDTH);
        }
    }

    #[test]
    fn test_persistent_overlap_spends_exactly_one_life() {
        let mut world = World::new(false);
        world.player.lives = 3;
        overlap_player(&mut world);

        world.tick(DT, 0.0);
        assert_eq!(world.player.lives, 2);
        assert!(world.player.hit);

        // Overlap persists for several more ticks: no re-decrement
        world.tick(DT, 0.1);
        world.tick(DT, 0.2);
        assert_eq!(world.player.lives, 2);
    }

    #[test]
    fn test_hit_release_respawns_after_the_delay() {
        let mut world = World::new(false);
        world.player.lives = 2;
        overlap_player(&mut world);

        world.tick(DT, 0.0);
        world.tick(DT, 1.0);
        assert!(world.player.hit);

        // Past the 1.1s release: unlocked and back at spawn. The enemy is
        // moved off first so the respawn does not land in a fresh collision.
        world.enemies[0].position = Vec2::new(-101.0, 83.0);
        world.tick(DT, 1.2);
        assert!(!world.player.hit);
        assert_eq!(world.player.position, world.player.start_position);
        assert!(!world.over);
        assert_eq!(world.player.lives, 1);
    }

    #[test]
    fn test_last_life_runs_the_full_game_over_protocol() {
        let mut world = World::new(false);
        assert_eq!(world.player.lives, 1);
        overlap_player(&mut world);

        world.tick(DT, 0.0);
        assert_eq!(world.player.lives, 0);
        assert!(world.player.hit);

        // 1.1s later: respawn sees zero lives and freezes the board
        world.tick(DT, 1.2);
        assert!(world.over);
        assert!(world.items.is_empty());
        assert!(world.enemies.is_empty());

        // Frozen: ticks do nothing while the overlay shows
        world.tick(DT, 2.0);
        assert!(world.over);

        // 3s after the freeze started: a brand-new game exists
        world.tick(DT, 4.3);
        assert!(!world.over);
        assert_eq!(world.player.lives, 1);
        assert_eq!(world.player.shells, 0);
        assert_eq!(world.enemies.len(), 4);
        assert_eq!(world.items.len(), 7);
    }

    #[test]
    fn test_item_pickup_removes_item_and_counts_it() {
        let mut world = World::new(true);
        // Stand on the shell at column 1, row 4
        world.player.position = Vec2::new(101.0, 332.0);

        world.tick(DT, 0.0);
        assert_eq!(world.player.shells, 1);
        assert_eq!(world.items.len(), 6);

        // Second tick on the same spot collects nothing further
        world.tick(DT, 0.1);
        assert_eq!(world.player.shells, 1);
        assert_eq!(world.items.len(), 6);
    }

    #[test]
    fn test_pickup_scan_handles_adjacent_removals() {
        let mut world = World::new(true);
        // Stack two items directly under the player
        for item in &mut world.items {
            item.position = Vec2::new(101.0, 332.0);
            item.start_position = item.position;
        }
        world.items.truncate(2);
        world.items[0].kind = ItemKind::Shell;
        world.items[1].kind = ItemKind::Heart;
        world.player.position = Vec2::new(101.0, 332.0);

        world.tick(DT, 0.0);
        assert!(world.items.is_empty());
        assert_eq!(world.player.shells, 1);
        assert_eq!(world.player.lives, 2);
    }

    #[test]
    fn test_five_shells_wins_exactly_once() {
        let mut world = World::new(false);
        world.player.shells = 5;

        world.tick(DT, 0.0);
        assert!(world.won);
        assert!(world.items.is_empty());
        assert!(world.enemies.is_empty());

        // Frozen while won
        world.tick(DT, 0.1);
        assert!(world.won);

        // Confirm restores a fresh board
        world.handle_command(Command::Confirm);
        assert!(!world.won);
        assert_eq!(world.player.shells, 0);
        assert_eq!(world.player.lives, 1);
        assert_eq!(world.items.len(), 7);
        assert_eq!(world.enemies.len(), 4);
    }

    #[test]
    fn test_confirm_outside_win_screen_is_a_noop() {
        let mut world = World::new(false);
        world.player.shells = 3;
        world.handle_command(Command::Confirm);
        assert_eq!(world.player.shells, 3);
        assert_eq!(world.items.len(), 7);
    }

    #[test]
    fn test_stop_command_does_nothing() {
        let mut world = World::new(false);
        world.tick(DT, 0.0);
        let before = world.player.position;
        world.handle_command(Command::Stop);
        assert_eq!(world.player.position, before);
    }

    #[test]
    fn test_difficulty_write_resets_the_game() {
        let mut world = World::new(false);
        world.player.shells = 2;
        world.set_difficulty(true);
        assert!(world.easy_mode);
        assert_eq!(world.player.shells, 0);
        assert_eq!(world.enemies[0].speed, 0.0);
    }

    #[test]
    fn test_debug_toggle_touches_nothing_but_the_flag() {
        let mut world = World::new(false);
        let items_before = world.items.len();
        world.toggle_debug();
        assert!(world.debug_overlay);
        assert_eq!(world.items.len(), items_before);
        world.toggle_debug();
        assert!(!world.debug_overlay);
    }

    #[test]
    fn test_tick_with_empty_collections_is_safe() {
        let mut world = World::new(false);
        world.items.clear();
        world.enemies.clear();
        world.tick(DT, 0.0);
        world.tick(0.0, 0.1);
        assert!(world.player.position.x.is_finite());
        assert!(world.player.position.y.is_finite());
    }

    #[test]
    fn test_zero_dt_tick_moves_nothing() {
        let mut world = World::new(false);
        let enemy_xs: Vec<f64> = world.enemies.iter().map(|e| e.position.x).collect();
        world.tick(0.0, 0.0);
        let after: Vec<f64> = world.enemies.iter().map(|e| e.position.x).collect();
        assert_eq!(enemy_xs, after);
        assert_eq!(world.player.position, world.player.start_position);
    }
}
