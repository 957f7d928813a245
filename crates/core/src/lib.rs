//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the transactional state stores the
//! rules run on. It has **no dependencies** on terminal I/O, so it can be
//! driven by the terminal front end, by tests, or headless:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Transactional**: every logical step is published as one value per store
//! - **Observable**: every store can be subscribed to at any time
//!
//! # Module Structure
//!
//! - [`store`]: single-value store with immediate and queued (batched) updates
//! - [`grid`]: fully populated board projection (20×11 main, 4×3 preview)
//! - [`piece`]: tetromino instances and the ordered active/settled piece list
//! - [`spawn`]: spawn geometry and preview framing
//! - [`rotation`]: pivot-anchored orientation tables
//! - [`awareness`]: boundary and collision checks for candidate moves
//! - [`movement`]: per-movement legality policies
//! - [`line_clear`]: row completion, collapse and scoring
//! - [`speed`]: score-driven difficulty ramp
//! - [`gravity`]: turns elapsed time into gravity ticks
//! - [`rng`]: weighted piece type and palette selection
//! - [`config`]: engine configuration and its validation
//! - [`engine`]: the game engine tying everything together
//!
//! # Game Rules
//!
//! - **Weighted randomizer**: piece types are drawn from a 21-entry list where
//!   T and L appear most often
//! - **Movement**: left/right/down by one slot, rotation by 90° around the pivot
//!   cell (no wall kicks)
//! - **Locking**: a piece locks as soon as it cannot move down
//! - **Scoring**: `100 × columns × rows²` per lock
//! - **Speed**: the gravity interval drops from 1000ms to 150ms as the score grows
//! - **Game over**: a piece on row 1 that overlaps settled cells
//!
//! # Example
//!
//! ```
//! use stackfall_core::{Engine, EngineConfig};
//! use stackfall_types::GameCommand;
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(12345)).unwrap();
//! let score = engine.score_stream();
//!
//! engine.apply(GameCommand::Start);
//! engine.apply(GameCommand::MoveLeft);
//! engine.apply(GameCommand::Rotate);
//!
//! // one gravity step per second at the starting speed
//! assert_eq!(engine.advance(1000), 1);
//! assert_eq!(score.latest(), Some(0));
//! assert!(!engine.is_game_over());
//! ```
//!
//! # Timing
//!
//! Gravity is driven by [`Engine::advance`](engine::Engine::advance), called
//! every frame with the elapsed milliseconds. Every speed publication restarts
//! the interval.

pub mod awareness;
pub mod config;
pub mod engine;
pub mod gravity;
pub mod grid;
pub mod line_clear;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod spawn;
pub mod speed;
pub mod store;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use awareness::{generate_piece_awareness, Awareness, Bounds};
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, Phase};
pub use gravity::GravityClock;
pub use grid::Grid;
pub use line_clear::{clear_completed_rows, score_for_rows, LineClear};
pub use movement::{MoveOutcome, Movement};
pub use piece::{Piece, Pieces};
pub use rng::{PieceRandomizer, SimpleRng};
pub use rotation::rotated;
pub use spawn::{preview_projection, spawn_piece};
pub use speed::{RampPolicy, SpeedBracket};
pub use store::{StateStream, Store, TryNext};
