//! Screen: what each terminal position shows, in board terms.
//!
//! Board positions keep the game [`Color`] of the cell they show and text keeps
//! a [`Tone`]. Nothing here knows terminal colors; the renderer resolves them
//! when a frame is encoded, which is also where `Transparent` preview cells
//! pick up the screen background.

use crate::types::{Cell, Color};

/// Text roles, mapped to terminal colors by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Frame,
    Label,
    Value,
    Muted,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Blank,
    /// One terminal column of a board cell.
    Board { color: Color, occupied: bool },
    Text { ch: char, tone: Tone },
}

impl Tile {
    pub fn board(cell: &Cell) -> Self {
        Tile::Board {
            color: cell.color,
            occupied: cell.occupied,
        }
    }

    pub fn ch(&self) -> char {
        match *self {
            Tile::Board { occupied: true, .. } => '█',
            Tile::Blank | Tile::Board { .. } => ' ',
            Tile::Text { ch, .. } => ch,
        }
    }
}

/// Row-major tiles for the whole viewport.
#[derive(Debug, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl Clone for Screen {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
        }
    }

    // The renderer keeps last frame's screen and copies into it every frame.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.tiles.clone_from(&source.tiles);
    }
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize to `width` x `height` and blank every tile.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.tiles.clear();
        self.tiles
            .resize(width as usize * height as usize, Tile::Blank);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Tile> {
        self.offset(x, y).map(|i| self.tiles[i])
    }

    /// Positions off the screen are ignored.
    pub fn put(&mut self, x: u16, y: u16, tile: Tile) {
        if let Some(i) = self.offset(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// `width` copies of `tile` starting at `(x, y)`.
    pub fn span(&mut self, x: u16, y: u16, width: u16, tile: Tile) {
        for dx in 0..width {
            self.put(x.saturating_add(dx), y, tile);
        }
    }

    /// Write `text` left to right; returns the number of columns used.
    pub fn text(&mut self, x: u16, y: u16, text: &str, tone: Tone) -> u16 {
        let mut used = 0;
        for ch in text.chars() {
            self.put(x.saturating_add(used), y, Tile::Text { ch, tone });
            used += 1;
        }
        used
    }

    /// Decimal `value`; returns the number of digits written.
    pub fn number(&mut self, x: u16, y: u16, value: u32, tone: Tone) -> u16 {
        let digits = value.checked_ilog10().unwrap_or(0) + 1;
        for i in 0..digits {
            let place = 10u32.pow(digits - 1 - i);
            let digit = (value / place % 10) as u8;
            let tile = Tile::Text {
                ch: char::from(b'0' + digit),
                tone,
            };
            self.put(x.saturating_add(i as u16), y, tile);
        }
        digits as u16
    }

    /// Characters of row `y`.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|tile| tile.ch())
            .collect()
    }
}
