use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// The discrete command set the player consumes. Raw keys outside the map
/// produce nothing, which makes unknown input a no-op by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stop,
    Left,
    Right,
    Up,
    Down,
    Confirm,
}

/// Everything the app can be asked to do in one frame: game commands plus the
/// two UI toggles and quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Play(Command),
    SetDifficulty { easy: bool },
    ToggleDebug,
    Quit,
}

/// Tracks directional keys that are currently held down.
#[derive(Debug, Default)]
struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

/// Polls terminal events and translates them into [`InputAction`]s.
///
/// A held arrow key emits its movement command every frame; releasing it maps
/// to `Stop`, so movement halts the moment the key comes up.
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains all pending terminal events without blocking.
    /// Call once per frame, before `get_actions`.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize is picked up from the frame area on render
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        // Quit keys work in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match key_event.code {
            KeyCode::Left => {
                self.key_state.left = true;
                self.key_state.right = false;
            }
            KeyCode::Right => {
                self.key_state.right = true;
                self.key_state.left = false;
            }
            KeyCode::Up => {
                self.key_state.up = true;
                self.key_state.down = false;
            }
            KeyCode::Down => {
                self.key_state.down = true;
                self.key_state.up = false;
            }
            KeyCode::Char(' ') => {
                self.oneshot_actions
                    .push(InputAction::Play(Command::Confirm));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.oneshot_actions
                    .push(InputAction::SetDifficulty { easy: true });
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.oneshot_actions
                    .push(InputAction::SetDifficulty { easy: false });
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.oneshot_actions.push(InputAction::ToggleDebug);
            }
            _ => {}
        }
    }

    /// Key-up on a directional key always maps to Stop.
    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.key_state.left = false;
                self.oneshot_actions.push(InputAction::Play(Command::Stop));
            }
            KeyCode::Right => {
                self.key_state.right = false;
                self.oneshot_actions.push(InputAction::Play(Command::Stop));
            }
            KeyCode::Up => {
                self.key_state.up = false;
                self.oneshot_actions.push(InputAction::Play(Command::Stop));
            }
            KeyCode::Down => {
                self.key_state.down = false;
                self.oneshot_actions.push(InputAction::Play(Command::Stop));
            }
            _ => {}
        }
    }

    /// Returns this frame's actions: one-shots first, then one movement
    /// command per held directional key.
    pub fn get_actions(&self) -> Vec<InputAction> {
        let mut actions = Vec::new();
        actions.extend_from_slice(&self.oneshot_actions);

        if self.key_state.left {
            actions.push(InputAction::Play(Command::Left));
        }
        if self.key_state.right {
            actions.push(InputAction::Play(Command::Right));
        }
        if self.key_state.up {
            actions.push(InputAction::Play(Command::Up));
        }
        if self.key_state.down {
            actions.push(InputAction::Play(Command::Down));
        }

        actions
    }
}
