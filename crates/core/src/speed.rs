//! Difficulty ramp - gravity interval as a function of score
//!
//! Two policies are available:
//!
//! - [`RampPolicy::Bracketed`] looks the score up in an ordered bracket table
//!   and stops at the first match.
//! - [`RampPolicy::QueuedThresholds`] queues a speed for *every* threshold the
//!   score satisfies and lets the last queued one win, exactly as the classic
//!   implementation of this game did.
//!
//! For every score the two agree on the committed speed; they differ only in
//! how many writes are staged. Both publish exactly once per evaluation.

use crate::store::Store;
use crate::types::BASE_SPEED_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPolicy {
    #[default]
    Bracketed,
    QueuedThresholds,
}

impl RampPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bracketed" => Some(RampPolicy::Bracketed),
            "queued" | "queued-thresholds" => Some(RampPolicy::QueuedThresholds),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RampPolicy::Bracketed => "bracketed",
            RampPolicy::QueuedThresholds => "queued",
        }
    }
}

/// One bracket: scores at or above `min_score` use `speed_ms`.
/// `None` keeps whatever speed is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBracket {
    pub min_score: u32,
    pub speed_ms: Option<u32>,
}

/// Brackets ordered by descending `min_score`; the last one must start at 0.
pub const DEFAULT_BRACKETS: [SpeedBracket; 6] = [
    SpeedBracket { min_score: 30_000, speed_ms: Some(150) },
    SpeedBracket { min_score: 15_000, speed_ms: None },
    SpeedBracket { min_score: 10_000, speed_ms: Some(250) },
    SpeedBracket { min_score: 7_500, speed_ms: Some(500) },
    SpeedBracket { min_score: 5_000, speed_ms: Some(750) },
    SpeedBracket { min_score: 0, speed_ms: Some(BASE_SPEED_MS) },
];

/// First matching bracket for `score`.
pub fn bracket_speed(brackets: &[SpeedBracket], score: u32) -> Option<u32> {
    brackets
        .iter()
        .find(|bracket| score >= bracket.min_score)
        .and_then(|bracket| bracket.speed_ms)
}

/// Every threshold the score satisfies, in evaluation order.
pub fn matching_thresholds(score: u32) -> Vec<u32> {
    let mut speeds = Vec::new();
    if score >= 30_000 {
        speeds.push(150);
    }
    if score < 15_000 {
        speeds.push(250);
    }
    if score < 10_000 {
        speeds.push(500);
    }
    if score < 7_500 {
        speeds.push(750);
    }
    if score < 5_000 {
        speeds.push(1000);
    }
    speeds
}

/// Re-evaluate the gravity interval after a score publication.
pub fn apply_ramp(
    speed: &mut Store<u32>,
    policy: RampPolicy,
    brackets: &[SpeedBracket],
    score: u32,
) {
    match policy {
        RampPolicy::Bracketed => {
            if let Some(ms) = bracket_speed(brackets, score) {
                speed.add_to_queue(move |_| ms);
            }
        }
        RampPolicy::QueuedThresholds => {
            for ms in matching_thresholds(score) {
                speed.add_to_queue(move |_| ms);
            }
        }
    }
    speed.process_queue();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed(policy: RampPolicy, start: u32, score: u32) -> (u32, u64) {
        let mut store = Store::new(start);
        let before = store.version();
        apply_ramp(&mut store, policy, &DEFAULT_BRACKETS, score);
        (*store.get(), store.version() - before)
    }

    #[test]
    fn test_bracket_lookup() {
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 0), Some(1000));
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 4_999), Some(1000));
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 5_000), Some(750));
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 7_500), Some(500));
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 10_000), Some(250));
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 20_000), None);
        assert_eq!(bracket_speed(&DEFAULT_BRACKETS, 30_000), Some(150));
    }

    #[test]
    fn test_queued_thresholds_last_one_wins() {
        assert_eq!(matching_thresholds(0), vec![250, 500, 750, 1000]);
        assert_eq!(matching_thresholds(6_000), vec![250, 500, 750]);
        assert_eq!(matching_thresholds(20_000), Vec::<u32>::new());
        assert_eq!(matching_thresholds(31_000), vec![150]);
    }

    #[test]
    fn test_policies_commit_the_same_speed() {
        let scores = [0, 1_100, 4_999, 5_000, 7_499, 7_500, 9_999, 10_000, 14_999, 15_000, 29_999, 30_000, 99_000];
        for score in scores {
            for start in [1000, 250] {
                assert_eq!(
                    committed(RampPolicy::Bracketed, start, score).0,
                    committed(RampPolicy::QueuedThresholds, start, score).0,
                    "score {score} start {start}"
                );
            }
        }
    }

    #[test]
    fn test_gap_bracket_holds_speed_and_still_publishes() {
        for policy in [RampPolicy::Bracketed, RampPolicy::QueuedThresholds] {
            assert_eq!(committed(policy, 250, 20_000), (250, 1));
            assert_eq!(committed(policy, 1000, 0), (1000, 1));
        }
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(RampPolicy::from_str("queued"), Some(RampPolicy::QueuedThresholds));
        assert_eq!(RampPolicy::from_str("Bracketed"), Some(RampPolicy::Bracketed));
        assert_eq!(RampPolicy::from_str("fast"), None);
    }
}
