use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::board;
use crate::entities::{Enemy, Item, ItemKind, Player};
use crate::geometry::BoundingBox;

/// How many terminal cells one board tile occupies.
const CELLS_PER_TILE_X: u16 = 10;
const CELLS_PER_TILE_Y: u16 = 4;
const GRID_WIDTH: u16 = board::NUM_COLS as u16 * CELLS_PER_TILE_X;
const GRID_HEIGHT: u16 = board::NUM_ROWS as u16 * CELLS_PER_TILE_Y;

/// View struct that holds all game state needed for rendering.
///
/// Time is an explicit input: sprite variants expire against `now`, never
/// against a wall clock read inside render.
pub struct RenderView<'a> {
    pub player: &'a Player,
    pub items: &'a [Item],
    pub enemies: &'a [Enemy],
    pub won: bool,
    pub over: bool,
    pub easy_mode: bool,
    pub debug_overlay: bool,
    pub now: f64,
    pub fps: u32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game.
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        if view.won {
            self.render_won(frame, view);
        } else if view.over {
            self.render_game_over(frame, view);
        } else {
            self.render_game(frame, view);
        }
    }

    /// Renders the live board: row stripes, items, enemies, player, HUD.
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let game_area = self.board_area(frame, view.area);

        // Row stripes in place of the tile images: rock rows top and
        // bottom, open water in between
        let buffer = frame.buffer_mut();
        for row in 0..board::NUM_ROWS as u16 {
            let bg = if row == 0 || row == board::NUM_ROWS as u16 - 1 {
                Color::DarkGray
            } else {
                Color::Black
            };
            let stripe = Rect {
                x: game_area.x,
                y: game_area.y + row * CELLS_PER_TILE_Y,
                width: game_area.width,
                height: CELLS_PER_TILE_Y,
            }
            .intersection(game_area);
            buffer.set_style(stripe, Style::default().bg(bg));
        }

        // Items: one glyph near the middle of the tile they bob around
        for item in view.items {
            let (glyph, color) = match item.kind {
                ItemKind::Heart => ("<3", Color::Magenta),
                ItemKind::Shell => ("@", Color::Cyan),
            };
            let cx = to_cell_x(item.position.x) + CELLS_PER_TILE_X as i32 / 2 - 1;
            let cy = to_cell_y(item.position.y) + 3;
            draw_clipped(buffer, game_area, cx, cy, glyph, Style::default().fg(color).add_modifier(Modifier::BOLD));
        }

        // Enemies: sharks swim through the lower half of their lane
        for enemy in view.enemies {
            let style = if enemy.is_colliding {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
            };
            let cx = to_cell_x(enemy.position.x);
            let cy = to_cell_y(enemy.position.y) + 2;
            for (i, sprite_line) in enemy.sprite_lines().iter().enumerate() {
                draw_clipped(buffer, game_area, cx, cy + i as i32, sprite_line, style);
            }
        }

        // Player
        let player_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let px = to_cell_x(view.player.position.x) + 2;
        let py = to_cell_y(view.player.position.y) + 2;
        for (i, sprite_line) in view.player.sprite_lines(view.now).iter().enumerate() {
            draw_clipped(buffer, game_area, px, py + i as i32, sprite_line, player_style);
        }

        // Debug overlay: tint every bounding box with its inspection color
        if view.debug_overlay {
            for item in view.items {
                tint_box(buffer, game_area, &item.bounding_box(), Color::Blue);
            }
            for enemy in view.enemies {
                tint_box(buffer, game_area, &enemy.bounding_box(), Color::Green);
            }
            tint_box(buffer, game_area, &view.player.bounding_box(), Color::Yellow);
        }

        self.render_hud(frame, view);
    }

    /// Bordered, centered board block; returns its inner drawing area.
    fn board_area(&self, frame: &mut Frame, area: Rect) -> Rect {
        let outer = Rect {
            x: area.x + area.width.saturating_sub(GRID_WIDTH + 2) / 2,
            y: area.y + area.height.saturating_sub(GRID_HEIGHT + 2) / 2,
            width: (GRID_WIDTH + 2).min(area.width),
            height: (GRID_HEIGHT + 2).min(area.height),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        inner
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let stats = Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.player.lives),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Shells: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/5", view.player.shells),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                if view.easy_mode { "easy" } else { "hard" },
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Debug: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                if view.debug_overlay { "on" } else { "off" },
                Style::default().fg(Color::White),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default().fg(Color::White),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[Arrows: Move] [Space: Confirm] [E/H: Easy/Hard] [B: Debug] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the frozen game-over overlay shown during the 3s rebuild delay.
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_area = self.board_area(frame, view.area);
        frame
            .buffer_mut()
            .set_style(game_area, Style::default().bg(Color::Rgb(252, 154, 36)));

        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(""),
            Line::from("GAME OVER").centered().white().bold(),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            game_area,
        );

        self.render_hud(frame, view);
    }

    /// Renders the win screen; only a Confirm command leaves it.
    fn render_won(&self, frame: &mut Frame, view: &RenderView) {
        let game_area = self.board_area(frame, view.area);
        frame
            .buffer_mut()
            .set_style(game_area, Style::default().bg(Color::White));

        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from("You are a Winner!!!").centered().black().bold(),
            Line::from(""),
            Line::from(""),
            Line::from("PRESS SPACE TO PLAY AGAIN").centered().black(),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            game_area,
        );

        self.render_hud(frame, view);
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_cell_x(px: f64) -> i32 {
    (px / board::TILE_WIDTH * CELLS_PER_TILE_X as f64).round() as i32
}

fn to_cell_y(px: f64) -> i32 {
    (px / board::TILE_HEIGHT * CELLS_PER_TILE_Y as f64).round() as i32
}

/// Writes one line of ASCII sprite text, clipped to the board area. Entities
/// can be partially (or wholly) off-board while wrapping.
fn draw_clipped(
    buffer: &mut ratatui::buffer::Buffer,
    area: Rect,
    cell_x: i32,
    cell_y: i32,
    text: &str,
    style: Style,
) {
    if cell_y < 0 || cell_y >= area.height as i32 {
        return;
    }
    let width = area.width as i32;
    for (i, ch) in text.chars().enumerate() {
        let cx = cell_x + i as i32;
        if cx < 0 || cx >= width || ch == ' ' {
            continue;
        }
        buffer.set_string(
            area.x + cx as u16,
            area.y + cell_y as u16,
            ch.to_string(),
            style,
        );
    }
}

/// Background-tints the cells covered by a bounding box (debug overlay).
fn tint_box(buffer: &mut ratatui::buffer::Buffer, area: Rect, bbox: &BoundingBox, color: Color) {
    let left = to_cell_x(bbox.left).max(0);
    let top = to_cell_y(bbox.top).max(0);
    let right = to_cell_x(bbox.right).min(area.width as i32);
    let bottom = to_cell_y(bbox.bottom).min(area.height as i32);
    if left >= right || top >= bottom {
        return;
    }
    let rect = Rect {
        x: area.x + left as u16,
        y: area.y + top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    }
    .intersection(area);
    buffer.set_style(rect, Style::default().bg(color));
}
