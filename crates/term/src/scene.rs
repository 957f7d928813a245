//! Scene: the latest published engine state, as seen by the renderer.
//!
//! The renderer never reads engine stores directly. It follows the published
//! streams and keeps the newest value of each.

use crate::core::{Engine, Grid, StateStream};

/// Everything one frame needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub grid: Grid,
    pub preview: Grid,
    pub score: u32,
    pub speed_ms: u32,
    pub game_over: bool,
    pub started: bool,
}

/// Scene kept current from the engine's state streams.
pub struct SceneFeed {
    grid: StateStream<Grid>,
    preview: StateStream<Grid>,
    score: StateStream<u32>,
    speed: StateStream<u32>,
    game_over: StateStream<bool>,
    scene: Scene,
}

impl SceneFeed {
    pub fn subscribe(engine: &mut Engine) -> Self {
        let scene = Scene {
            grid: engine.grid().clone(),
            preview: engine.preview().clone(),
            score: engine.score(),
            speed_ms: engine.speed(),
            game_over: engine.is_game_over(),
            started: false,
        };
        let mut feed = Self {
            grid: engine.grid_stream(),
            preview: engine.preview_stream(),
            score: engine.score_stream(),
            speed: engine.speed_stream(),
            game_over: engine.game_over_stream(),
            scene,
        };
        feed.sync();
        feed
    }

    /// Pull pending publications; returns true when anything arrived.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        if let Some(grid) = self.grid.latest() {
            self.scene.grid = grid;
            changed = true;
        }
        if let Some(preview) = self.preview.latest() {
            self.scene.preview = preview;
            changed = true;
        }
        if let Some(score) = self.score.latest() {
            self.scene.score = score;
            changed = true;
        }
        if let Some(speed_ms) = self.speed.latest() {
            self.scene.speed_ms = speed_ms;
            changed = true;
        }
        if let Some(game_over) = self.game_over.latest() {
            self.scene.game_over = game_over;
            changed = true;
        }
        changed
    }

    pub fn set_started(&mut self, started: bool) {
        self.scene.started = started;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    #[test]
    fn test_feed_follows_engine() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(3)).unwrap();
        let mut feed = SceneFeed::subscribe(&mut engine);
        assert!(!feed.sync());
        assert_eq!(feed.scene().grid.occupied_count(), 0);

        engine.start_game();
        assert!(feed.sync());
        assert_eq!(feed.scene().grid.occupied_count(), 4);
        assert_eq!(feed.scene().preview.occupied_count(), 4);
        assert_eq!(feed.scene().speed_ms, 1000);
        assert!(!feed.scene().game_over);
    }
}
