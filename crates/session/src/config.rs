//! Session configuration read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{CLEAR_DURATION, MAX_FRAME_DT, MOVE_DURATION, SPAWN_DURATION};

/// Tunables for one play session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Fixed seed for the first game and every restart; wall clock when `None`
    pub seed: Option<u32>,
    /// Turn animation phase durations in seconds
    pub move_secs: f32,
    pub clear_secs: f32,
    pub spawn_secs: f32,
    /// Upper bound for one frame's dt, in seconds
    pub max_frame_dt: f32,
    /// JSON-lines turn log destination
    pub turn_log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            move_secs: MOVE_DURATION,
            clear_secs: CLEAR_DURATION,
            spawn_secs: SPAWN_DURATION,
            max_frame_dt: MAX_FRAME_DT,
            turn_log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from `LINES_*` environment variables. Unset or unparsable values
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("LINES_SEED").and_then(|s| s.trim().parse::<u32>().ok());

        let millis = |key: &str, fallback: f32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&ms| ms > 0)
                .map(|ms| ms as f32 / 1000.0)
                .unwrap_or(fallback)
        };

        let turn_log_path = lookup("LINES_TURN_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            move_secs: millis("LINES_MOVE_MS", defaults.move_secs),
            clear_secs: millis("LINES_CLEAR_MS", defaults.clear_secs),
            spawn_secs: millis("LINES_SPAWN_MS", defaults.spawn_secs),
            max_frame_dt: millis("LINES_MAX_FRAME_MS", defaults.max_frame_dt),
            turn_log_path,
        }
    }

    /// Seed for a new game: the configured one, or the current time.
    pub fn game_seed(&self) -> u32 {
        self.seed.unwrap_or_else(wall_clock_seed)
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = SessionConfig::from_lookup(|_| None);
        assert_eq!(cfg, SessionConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("LINES_SEED", "42"),
            ("LINES_MOVE_MS", "500"),
            ("LINES_CLEAR_MS", " 250 "),
            ("LINES_SPAWN_MS", "100"),
            ("LINES_MAX_FRAME_MS", "50"),
            ("LINES_TURN_LOG_PATH", "/tmp/lines.jsonl"),
        ]));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.game_seed(), 42);
        assert_eq!(cfg.move_secs, 0.5);
        assert_eq!(cfg.clear_secs, 0.25);
        assert_eq!(cfg.spawn_secs, 0.1);
        assert_eq!(cfg.max_frame_dt, 0.05);
        assert_eq!(cfg.turn_log_path.as_deref(), Some("/tmp/lines.jsonl"));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = SessionConfig::from_lookup(lookup_from(&[
            ("LINES_SEED", "-3"),
            ("LINES_MOVE_MS", "0"),
            ("LINES_CLEAR_MS", "fast"),
            ("LINES_TURN_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.move_secs, MOVE_DURATION);
        assert_eq!(cfg.clear_secs, CLEAR_DURATION);
        assert_eq!(cfg.turn_log_path, None);
    }
}
