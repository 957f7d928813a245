//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It follows the engine's state
//! streams, lays the latest scene out on a screen of board-aware tiles, and
//! writes that screen to the terminal, rewriting only what changed.
//!
//! - [`scene`]: latest published grid, preview, score, speed and game-over values
//! - [`screen`]: tiles that keep the game's colors until encode time
//! - [`game_view`]: pure scene-to-screen layout (2 columns per board cell)
//! - [`renderer`]: crossterm output, colors resolved per frame

pub mod game_view;
pub mod renderer;
pub mod scene;
pub mod screen;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer, BACKGROUND};
pub use scene::{Scene, SceneFeed};
pub use screen::{Screen, Tile, Tone};
