//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] values. The
//! engine receives them through `Engine::apply`; nothing here touches game
//! state.

pub mod map;

pub use stackfall_types as types;

pub use map::{handle_key_event, should_quit};
