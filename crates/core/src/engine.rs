//! Game engine - owns every store and enforces the rules
//!
//! The engine keeps seven [`Store`]s (main grid, preview grid, pieces, next
//! piece, game-over flag, score and speed) and is the only thing that mutates
//! them. Renderers and input layers subscribe to the streams and invoke
//! commands; they never touch the stores directly.
//!
//! # Board-update cycle
//!
//! Every pieces publication is followed by a projection (clear the previous
//! cells, paint the new ones, commit the grid once) and a game-over check,
//! unless the game is already over.
//!
//! # Lock-and-advance
//!
//! 1. Completed rows are removed and scored; score and speed publish first.
//! 2. The collapsed pieces are committed (board-update cycle).
//! 3. The next piece is promoted, the preview is reset and refilled.
//! 4. The promoted pieces are committed (board-update cycle).

use tracing::{debug, info, trace};

use crate::awareness::{generate_piece_awareness, Bounds};
use crate::config::{ConfigError, EngineConfig};
use crate::gravity::GravityClock;
use crate::grid::Grid;
use crate::line_clear::{clear_completed_rows, score_for_rows};
use crate::movement::{MoveOutcome, Movement};
use crate::piece::{Piece, Pieces};
use crate::rng::PieceRandomizer;
use crate::spawn::{preview_projection, spawn_piece};
use crate::speed::apply_ramp;
use crate::store::{StateStream, Store};
use crate::types::{Cell, GameCommand, BASE_SPEED_MS};

/// Engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, waiting for `start_game`.
    Idle,
    Running,
    /// Torn down; every command is ignored.
    Stopped,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    grid: Store<Grid>,
    preview: Store<Grid>,
    pieces: Store<Pieces>,
    next_piece: Store<Piece>,
    game_over: Store<bool>,
    score: Store<u32>,
    speed: Store<u32>,
    randomizer: PieceRandomizer,
    phase: Phase,
    gravity: Option<GravityClock>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut randomizer = PieceRandomizer::new(config.seed);
        let piece_type = randomizer.piece_type();
        let color = randomizer.color(&config.palette);
        let next_piece = spawn_piece(piece_type, color);

        Ok(Self {
            grid: Store::new(Grid::filled(config.rows, config.columns, config.grid_color)),
            preview: Store::new(Grid::filled(
                config.preview_rows,
                config.preview_columns,
                config.preview_color,
            )),
            pieces: Store::new(Pieces::default()),
            next_piece: Store::new(next_piece),
            game_over: Store::new(false),
            score: Store::new(0),
            speed: Store::new(BASE_SPEED_MS),
            randomizer,
            phase: Phase::Idle,
            gravity: None,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        self.grid.get()
    }

    pub fn preview(&self) -> &Grid {
        self.preview.get()
    }

    pub fn pieces(&self) -> &Pieces {
        self.pieces.get()
    }

    pub fn next_piece(&self) -> &Piece {
        self.next_piece.get()
    }

    pub fn score(&self) -> u32 {
        *self.score.get()
    }

    /// Current gravity interval in milliseconds.
    pub fn speed(&self) -> u32 {
        *self.speed.get()
    }

    pub fn is_game_over(&self) -> bool {
        *self.game_over.get()
    }

    // Streams replay the current value first, then every later publication.

    pub fn grid_stream(&mut self) -> StateStream<Grid> {
        self.grid.subscribe()
    }

    pub fn preview_stream(&mut self) -> StateStream<Grid> {
        self.preview.subscribe()
    }

    pub fn pieces_stream(&mut self) -> StateStream<Pieces> {
        self.pieces.subscribe()
    }

    pub fn score_stream(&mut self) -> StateStream<u32> {
        self.score.subscribe()
    }

    pub fn game_over_stream(&mut self) -> StateStream<bool> {
        self.game_over.subscribe()
    }

    pub fn speed_stream(&mut self) -> StateStream<u32> {
        self.speed.subscribe()
    }

    /// Reset every store and start the gravity clock.
    ///
    /// Only an idle engine starts; use [`Engine::reset_game`] to restart.
    pub fn start_game(&mut self) {
        match self.phase {
            Phase::Idle => {}
            Phase::Running => {
                debug!("start ignored, game already running");
                return;
            }
            Phase::Stopped => return,
        }

        self.reinitialize();
        self.gravity = Some(GravityClock::new(self.speed.subscribe()));
        self.phase = Phase::Running;
        info!(seed = self.config.seed, ramp = self.config.ramp.as_str(), "game started");
    }

    /// Reinitialize every store. The only way to leave game over.
    pub fn reset_game(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.reinitialize();
        info!("game reset");
    }

    pub fn rotate_piece(&mut self) {
        self.run_movement(Movement::Rotate);
    }

    pub fn move_piece_left(&mut self) {
        self.run_movement(Movement::Left);
    }

    pub fn move_piece_right(&mut self) {
        self.run_movement(Movement::Right);
    }

    pub fn move_piece_down(&mut self) {
        self.run_movement(Movement::Down);
    }

    /// Dispatch a command value to the matching operation.
    pub fn apply(&mut self, command: GameCommand) {
        trace!(command = command.as_str(), "command");
        match command {
            GameCommand::Start => self.start_game(),
            GameCommand::Reset => self.reset_game(),
            GameCommand::Rotate => self.rotate_piece(),
            GameCommand::MoveLeft => self.move_piece_left(),
            GameCommand::MoveRight => self.move_piece_right(),
            GameCommand::MoveDown => self.move_piece_down(),
        }
    }

    /// Feed elapsed wall time to the gravity clock; returns the number of
    /// gravity steps taken.
    ///
    /// A step that changes the speed restarts the interval, so any ticks still
    /// owed at the old speed are dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.accepts_commands() {
            return 0;
        }
        let due = match self.gravity.as_mut() {
            Some(clock) => clock.advance(elapsed_ms),
            None => return 0,
        };

        let mut steps = 0;
        for _ in 0..due {
            if self.is_game_over() {
                break;
            }
            let speed_version = self.speed.version();
            self.move_piece_down();
            steps += 1;
            if self.speed.version() != speed_version {
                if let Some(clock) = self.gravity.as_mut() {
                    clock.resync();
                }
                break;
            }
        }
        steps
    }

    /// Stop gravity and close every stream. Later commands are ignored.
    pub fn shutdown(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        if let Some(mut clock) = self.gravity.take() {
            clock.stop();
        }
        self.grid.close();
        self.preview.close();
        self.pieces.close();
        self.next_piece.close();
        self.game_over.close();
        self.score.close();
        self.speed.close();
        self.phase = Phase::Stopped;
        info!(score = self.score(), "engine shut down");
    }

    /// Replace the piece list and run a board-update cycle.
    ///
    /// Meant for puzzle setups and tests; index 0 becomes the active piece.
    pub fn load_pieces(&mut self, pieces: Pieces) {
        if !self.accepts_commands() {
            return;
        }
        let previous = self.pieces.get().clone();
        self.pieces.add_to_queue(move |_| pieces);
        self.commit_pieces(&previous);
    }

    /// Replace the queued next piece and redraw the preview.
    pub fn load_next_piece(&mut self, piece: Piece) {
        if self.phase != Phase::Running {
            return;
        }
        let (rows, columns, color) = (
            self.config.preview_rows,
            self.config.preview_columns,
            self.config.preview_color,
        );
        self.preview.update(|_| Grid::filled(rows, columns, color));
        self.next_piece.update(|_| piece);
        self.project_preview();
    }

    fn accepts_commands(&self) -> bool {
        self.phase == Phase::Running && !self.is_game_over()
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            rows: self.config.rows,
            columns: self.config.columns,
        }
    }

    fn generate_piece(&mut self) -> Piece {
        let piece_type = self.randomizer.piece_type();
        let color = self.randomizer.color(&self.config.palette);
        spawn_piece(piece_type, color)
    }

    fn reinitialize(&mut self) {
        let config = &self.config;
        let (rows, columns, grid_color) = (config.rows, config.columns, config.grid_color);
        let (preview_rows, preview_columns, preview_color) =
            (config.preview_rows, config.preview_columns, config.preview_color);

        self.grid.update(|_| Grid::filled(rows, columns, grid_color));
        self.preview
            .update(|_| Grid::filled(preview_rows, preview_columns, preview_color));

        let next = self.generate_piece();
        self.next_piece.update(|_| next);
        self.project_preview();

        let active = self.generate_piece();
        self.pieces.update(|_| Pieces::single(active));

        self.score.update(|_| 0);
        self.evaluate_speed();
        self.game_over.update(|_| false);

        self.project(&Pieces::default());
        self.check_game_over();
    }

    fn run_movement(&mut self, movement: Movement) {
        if !self.accepts_commands() {
            return;
        }

        let previous = self.pieces.get().clone();
        let Some(awareness) =
            generate_piece_awareness(&previous, self.bounds(), |piece| movement.transform(piece))
        else {
            return;
        };

        match movement.policy(&awareness) {
            MoveOutcome::Apply => {
                let candidate = awareness.candidate;
                self.pieces.add_to_queue(move |pieces| pieces.with_active(candidate));
            }
            MoveOutcome::Blocked => {
                trace!(movement = movement.as_str(), "move blocked");
            }
            MoveOutcome::LockAndAdvance => {
                debug!(movement = movement.as_str(), "lock and advance");
                self.clear_rows();
                self.switch_to_next_piece();
                let promoted_from = self.pieces.get().clone();
                self.commit_pieces(&promoted_from);
                return;
            }
        }
        self.commit_pieces(&previous);
    }

    /// Remove completed rows, score them, then commit the collapsed pieces.
    fn clear_rows(&mut self) {
        let previous = self.pieces.get().clone();
        let cleared = clear_completed_rows(&previous, self.config.columns);

        if cleared.cleared_count() > 0 {
            let points = score_for_rows(cleared.cleared_count(), self.config.columns);
            self.score.update(|score| score.saturating_add(points));
            self.evaluate_speed();
            info!(
                rows = ?cleared.flagged_rows,
                points,
                score = self.score(),
                "rows cleared"
            );

            let pieces = cleared.pieces;
            self.pieces.add_to_queue(move |_| pieces);
        }
        self.commit_pieces(&previous);
    }

    /// Queue the promotion of the next piece and refill the preview.
    fn switch_to_next_piece(&mut self) {
        let next = self.next_piece.get().clone();
        debug!(
            piece_type = next.piece_type().map(|t| t.as_str()),
            rotation = next.rotation().degrees(),
            "promoting next piece"
        );
        self.pieces.add_to_queue(move |pieces| pieces.with_promoted(next));

        let (rows, columns, color) = (
            self.config.preview_rows,
            self.config.preview_columns,
            self.config.preview_color,
        );
        self.preview.update(|_| Grid::filled(rows, columns, color));

        let fresh = self.generate_piece();
        self.next_piece.update(|_| fresh);
        self.project_preview();
    }

    fn evaluate_speed(&mut self) {
        let before = self.speed();
        let score = self.score();
        apply_ramp(&mut self.speed, self.config.ramp, &self.config.brackets, score);
        if self.speed() != before {
            debug!(from = before, to = self.speed(), "speed changed");
        }
    }

    /// Publish queued piece edits, then run the board-update cycle.
    fn commit_pieces(&mut self, previous: &Pieces) {
        self.pieces.process_queue();
        if self.is_game_over() {
            return;
        }
        self.project(previous);
        self.check_game_over();
    }

    /// Clear every cell of `previous`, paint every current cell, commit once.
    fn project(&mut self, previous: &Pieces) {
        let background = self.config.grid_color;
        for cell in previous.all_cells() {
            let cleared = cell.cleared(background);
            self.grid.add_to_queue(move |grid| grid.with_cell(cleared));
        }
        let painted: Vec<Cell> = self.pieces.get().all_cells().copied().collect();
        for cell in painted {
            self.grid.add_to_queue(move |grid| grid.with_cell(cell));
        }
        self.grid.process_queue();
    }

    fn project_preview(&mut self) {
        let shown = preview_projection(self.next_piece.get());
        for &cell in shown.cells() {
            self.preview.add_to_queue(move |grid| grid.with_cell(cell));
        }
        self.preview.process_queue();
    }

    /// A piece sitting on row 1 that already overlaps settled cells ends the game.
    fn check_game_over(&mut self) {
        let Some(awareness) =
            generate_piece_awareness(self.pieces.get(), self.bounds(), |piece| piece.clone())
        else {
            return;
        };
        let on_top_row = awareness
            .active
            .pivot()
            .is_some_and(|pivot| pivot.row_id == 1);

        if on_top_row && awareness.will_hit_another_piece {
            self.game_over.update(|_| true);
            let (rows, columns, color) =
                (self.config.rows, self.config.columns, self.config.game_over_color);
            self.grid.update(|_| Grid::filled(rows, columns, color));
            info!(score = self.score(), "game over");
        }
    }
}
