use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::world::World;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    world: World,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// Monotonic time origin for the simulation clock
    start_time: Instant,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`]. Games start in easy mode, debug
    /// overlay off, matching the default toggle positions.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            running: true,
            world: World::new(true),
            last_frame_time: now,
            fps: 0,
            start_time: now,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    ///
    /// One iteration is one tick: draw the frame, apply this frame's input,
    /// then advance the world by the measured delta. Input lands between
    /// ticks, never during one.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Frame delta and simulation clock
            let frame_start = Instant::now();
            let dt = frame_start
                .duration_since(self.last_frame_time)
                .as_secs_f64();
            self.last_frame_time = frame_start;
            if dt > 0.0 {
                self.fps = (1.0 / dt) as u32;
            }
            let now = self.start_time.elapsed().as_secs_f64();

            // Render the frame
            terminal.draw(|frame| {
                let view = RenderView {
                    player: &self.world.player,
                    items: &self.world.items,
                    enemies: &self.world.enemies,
                    won: self.world.won,
                    over: self.world.over,
                    easy_mode: self.world.easy_mode,
                    debug_overlay: self.world.debug_overlay,
                    now,
                    fps: self.fps,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and apply this frame's actions
            self.input_manager.poll_events()?;
            for action in self.input_manager.get_actions() {
                self.process_action(action);
            }

            // Advance the simulation
            self.world.tick(dt, now);

            // Small sleep to cap the frame rate and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(8));
        }
        Ok(())
    }

    fn process_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => {
                self.running = false;
            }
            InputAction::SetDifficulty { easy } => {
                self.world.set_difficulty(easy);
            }
            InputAction::ToggleDebug => {
                self.world.toggle_debug();
            }
            InputAction::Play(command) => {
                self.world.handle_command(command);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
