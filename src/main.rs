//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, installs file logging, then runs
//! the engine under a crossterm poll loop: key presses become engine commands,
//! elapsed time feeds the gravity clock, and the renderer redraws whenever a
//! published stream changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use stackfall::core::Engine;
use stackfall::input::{handle_key_event, should_quit};
use stackfall::term::{GameView, SceneFeed, Screen, TerminalRenderer, Viewport};
use stackfall::types::GameCommand;
use stackfall::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _log_guard = logging::init(config.log_path.as_deref())?;

    let mut engine = Engine::new(config.engine_config())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut engine, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    engine.shutdown();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, config: &AppConfig) -> Result<()> {
    let mut feed = SceneFeed::subscribe(engine);
    engine.start_game();
    feed.set_started(true);

    let view = GameView::default();
    let mut screen = Screen::new(0, 0);
    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        dirty |= feed.sync();
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(feed.scene(), Viewport::new(w, h), &mut screen);
            term.draw(&screen)?;
            dirty = false;
        }

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit requested");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        // the engine is started above, Enter restarts after game over
                        Some(GameCommand::Start) if engine.is_game_over() => {
                            engine.apply(GameCommand::Reset)
                        }
                        Some(command) => engine.apply(command),
                        None => {}
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            engine.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
