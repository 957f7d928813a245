//! Application configuration, layered from environment variables over defaults.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `STACKFALL_SEED` | piece sequence seed (u32) | derived from the clock |
//! | `STACKFALL_RAMP` | `bracketed` or `queued` | `bracketed` |
//! | `STACKFALL_LOG_PATH` | log file path | logging disabled |
//! | `STACKFALL_FRAME_MS` | input poll / redraw interval | 16 |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{EngineConfig, RampPolicy};
use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub ramp: RampPolicy,
    pub log_path: Option<PathBuf>,
    pub frame_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            ramp: RampPolicy::default(),
            log_path: None,
            frame_ms: FRAME_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse(&lookup, "STACKFALL_SEED") {
            config.seed = seed;
        }
        if let Some(ramp) = lookup("STACKFALL_RAMP").and_then(|s| RampPolicy::from_str(s.trim())) {
            config.ramp = ramp;
        }
        config.log_path = lookup("STACKFALL_LOG_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        if let Some(frame_ms) = parse::<u32>(&lookup, "STACKFALL_FRAME_MS").filter(|ms| *ms > 0) {
            config.frame_ms = frame_ms;
        }

        config
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_seed(self.seed)
            .with_ramp(self.ramp)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STACKFALL_SEED", "42"),
            ("STACKFALL_RAMP", "queued"),
            ("STACKFALL_LOG_PATH", "/tmp/stackfall.log"),
            ("STACKFALL_FRAME_MS", "33"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.ramp, RampPolicy::QueuedThresholds);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/stackfall.log")));
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.engine_config().seed, 42);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STACKFALL_RAMP", "turbo"),
            ("STACKFALL_FRAME_MS", "0"),
            ("STACKFALL_LOG_PATH", "  "),
        ]));
        assert_eq!(config.ramp, RampPolicy::Bracketed);
        assert_eq!(config.frame_ms, FRAME_MS);
        assert_eq!(config.log_path, None);
    }
}
