//! GameView: lays a [`Scene`] out on a [`Screen`].
//!
//! Pure, no I/O. The main board sits in a single-line frame with each cell
//! two columns wide; score, speed and the preview go in a panel to its right
//! when the viewport leaves room for one.

use crate::core::Grid;
use crate::scene::Scene;
use crate::screen::{Screen, Tile, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Narrowest side panel worth drawing.
const PANEL_MIN_WIDTH: u16 = 10;

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Where things go for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left corner of the frame.
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: Option<u16>,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Framed size of the main board, in terminal cells.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (grid.columns() * self.cell_w + 2, grid.rows() + 2)
    }

    fn layout(&self, grid: &Grid, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size(grid);
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let panel_start = frame_x + frame_w + 2;
        let panel_x = (viewport.width.saturating_sub(panel_start) >= PANEL_MIN_WIDTH)
            .then_some(panel_start);
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x,
        }
    }

    /// Draw `scene` into `screen`, resizing it to `viewport`.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, screen: &mut Screen) {
        screen.reset(viewport.width, viewport.height);
        let layout = self.layout(&scene.grid, viewport);

        draw_frame(screen, layout);
        self.draw_board(screen, &scene.grid, layout.frame_x + 1, layout.frame_y + 1);
        if let Some(x) = layout.panel_x {
            self.draw_panel(screen, scene, x, layout.frame_y);
        }

        let banner: &[&str] = if scene.game_over {
            &["GAME OVER", "R RESTART"]
        } else if !scene.started {
            &["ENTER START"]
        } else {
            &[]
        };
        for (line, text) in banner.iter().enumerate() {
            let width = text.chars().count() as u16;
            let x = layout.frame_x + layout.frame_w.saturating_sub(width) / 2;
            let y = layout.frame_y + layout.frame_h / 2 + line as u16;
            screen.text(x, y, text, Tone::Banner);
        }
    }

    pub fn render(&self, scene: &Scene, viewport: Viewport) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut screen);
        screen
    }

    fn draw_board(&self, screen: &mut Screen, grid: &Grid, x: u16, y: u16) {
        for cell in grid.cells() {
            let cell_x = x + (cell.col_id as u16 - 1) * self.cell_w;
            let cell_y = y + cell.row_id as u16 - 1;
            screen.span(cell_x, cell_y, self.cell_w, Tile::board(cell));
        }
    }

    fn draw_panel(&self, screen: &mut Screen, scene: &Scene, x: u16, y: u16) {
        screen.text(x, y, "SCORE", Tone::Label);
        screen.number(x, y + 1, scene.score, Tone::Value);

        screen.text(x, y + 3, "SPEED", Tone::Label);
        let digits = screen.number(x, y + 4, scene.speed_ms, Tone::Value);
        screen.text(x + digits + 1, y + 4, "ms", Tone::Muted);

        screen.text(x, y + 6, "NEXT", Tone::Label);
        self.draw_board(screen, &scene.preview, x, y + 7);
    }
}

fn draw_frame(screen: &mut Screen, layout: Layout) {
    let Layout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
        ..
    } = layout;
    if w < 2 || h < 2 {
        return;
    }
    let edge = |ch| Tile::Text {
        ch,
        tone: Tone::Frame,
    };
    let (right, bottom) = (x + w - 1, y + h - 1);

    screen.span(x + 1, y, w - 2, edge('─'));
    screen.span(x + 1, bottom, w - 2, edge('─'));
    for row in y + 1..bottom {
        screen.put(x, row, edge('│'));
        screen.put(right, row, edge('│'));
    }
    screen.put(x, y, edge('┌'));
    screen.put(right, y, edge('┐'));
    screen.put(x, bottom, edge('└'));
    screen.put(right, bottom, edge('┘'));
}
