//! Headless simulator configuration
//!
//! Read from environment variables:
//!
//! - `LUMINES_SEED`: restart seed (default: 1)
//! - `LUMINES_FRAMES`: number of frames to simulate (default: 3600)
//! - `LUMINES_FRAME_MS`: milliseconds per frame (default: 16)
//! - `LUMINES_TIME_LIMIT_MS`: play time after which the game finishes (default: 60000, 0 disables)
//! - `LUMINES_NAME`: name submitted when the game finishes (default: none)
//! - `LUMINES_LOG`: `error`, `warn`, `info`, `debug` or `trace` (default: info)
//! - `LUMINES_DUMP_LOG`: set to "1" or "true" to print the event log as JSON

use std::env;

use log::LevelFilter;

use crate::types::TICK_MS;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub seed: u32,
    pub frames: u32,
    pub frame_ms: u32,
    pub time_limit_ms: Option<u64>,
    pub name: Option<String>,
    pub log_level: LevelFilter,
    pub dump_log: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frames: 3600,
            frame_ms: TICK_MS,
            time_limit_ms: Some(60_000),
            name: None,
            log_level: LevelFilter::Info,
            dump_log: false,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("LUMINES_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let frames = lookup("LUMINES_FRAMES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frames);

        let frame_ms = lookup("LUMINES_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let time_limit_ms = match lookup("LUMINES_TIME_LIMIT_MS").and_then(|s| s.trim().parse().ok()) {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => defaults.time_limit_ms,
        };

        let name = lookup("LUMINES_NAME")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("LUMINES_LOG")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        let dump_log = lookup("LUMINES_DUMP_LOG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            frames,
            frame_ms,
            time_limit_ms,
            name,
            log_level,
            dump_log,
        }
    }
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
    fn test_defaults_when_unset() {
        let config = SimConfig::from_lookup(lookup(&[]));
        assert_eq!(config.seed, 1);
        assert_eq!(config.frame_ms, 16);
        assert_eq!(config.time_limit_ms, Some(60_000));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.name.is_none());
        assert!(!config.dump_log);
    }

    #[test]
    fn test_reads_values() {
        let config = SimConfig::from_lookup(lookup(&[
            ("LUMINES_SEED", "42"),
            ("LUMINES_FRAMES", "10"),
            ("LUMINES_FRAME_MS", "33"),
            ("LUMINES_TIME_LIMIT_MS", "0"),
            ("LUMINES_NAME", "  amy "),
            ("LUMINES_LOG", "debug"),
            ("LUMINES_DUMP_LOG", "TRUE"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.frames, 10);
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.time_limit_ms, None);
        assert_eq!(config.name.as_deref(), Some("amy"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.dump_log);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SimConfig::from_lookup(lookup(&[
            ("LUMINES_SEED", "abc"),
            ("LUMINES_FRAME_MS", "0"),
            ("LUMINES_NAME", "   "),
            ("LUMINES_LOG", "loud"),
        ]));
        assert_eq!(config.seed, 1);
        assert_eq!(config.frame_ms, 16);
        assert!(config.name.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
