//! TerminalRenderer: writes a [`Screen`] to the real terminal with crossterm.
//!
//! Board colors become terminal colors here. After the first frame each row
//! only rewrites the span between its first and last changed tile.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::screen::{Screen, Tile, Tone};
use crate::types::Color;

/// Terminal background behind the board and under `Transparent` cells.
pub const BACKGROUND: style::Color = style::Color::Rgb { r: 0, g: 0, b: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: style::Color,
    bg: style::Color,
    bold: bool,
}

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
        Color::Transparent => BACKGROUND,
    }
}

fn gray(level: u8) -> style::Color {
    style::Color::Rgb {
        r: level,
        g: level,
        b: level,
    }
}

fn pen(tile: Tile) -> Pen {
    match tile {
        Tile::Blank => Pen {
            fg: BACKGROUND,
            bg: BACKGROUND,
            bold: false,
        },
        Tile::Board { color, occupied } => {
            let color = terminal_color(color);
            Pen {
                fg: color,
                bg: color,
                bold: occupied,
            }
        }
        Tile::Text { tone, .. } => {
            let (fg, bold) = match tone {
                Tone::Frame => (gray(200), false),
                Tone::Label => (gray(220), true),
                Tone::Value => (gray(200), false),
                Tone::Muted => (gray(130), false),
                Tone::Banner => (gray(255), true),
            };
            Pen {
                fg,
                bg: BACKGROUND,
                bold,
            }
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call when `enter` failed halfway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next frame.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), screen, &mut self.buf)?;
        self.flush()?;

        if let Some(last) = self.last.as_mut() {
            last.clone_from(screen);
        } else {
            self.last = Some(screen.clone());
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out`. Without a previous frame of the same size the
/// terminal is cleared and every row is written.
pub fn encode_frame(prev: Option<&Screen>, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Pen> = None;
    for y in 0..next.height() {
        let Some((from, to)) = dirty_span(prev, next, y) else {
            continue;
        };
        out.queue(cursor::MoveTo(from, y))?;
        for x in from..=to {
            let tile = next.get(x, y).unwrap_or_default();
            let wanted = pen(tile);
            if current != Some(wanted) {
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(SetColors(Colors::new(wanted.fg, wanted.bg)))?;
                if wanted.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                current = Some(wanted);
            }
            out.queue(Print(tile.ch()))?;
        }
    }

    if current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// First and last changed column of row `y`, inclusive.
fn dirty_span(prev: Option<&Screen>, next: &Screen, y: u16) -> Option<(u16, u16)> {
    let last = next.width().checked_sub(1)?;
    let Some(prev) = prev else {
        return Some((0, last));
    };
    let changed = |x: &u16| prev.get(*x, y) != next.get(*x, y);
    let from = (0..=last).find(changed)?;
    let to = (from..=last).rev().find(changed)?;
    Some((from, to))
}
