//! Replay module - deterministic event log
//!
//! A game is fully determined by the seed of its restart source and the ordered
//! events dispatched to it. [`Recorder`] captures both while a game runs;
//! [`EventLog::replay`] rebuilds the final snapshot from them.
//!
//! The log is plain serde data. Writing it anywhere is up to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::Event;
use crate::game_state::Game;
use crate::rng::SeededPieceSource;
use crate::snapshot::GameSnapshot;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("event log is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("replay diverged after {events} events (score {expected} recorded, {actual} replayed)")]
    Diverged {
        events: usize,
        expected: u32,
        actual: u32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub seed: u32,
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild the snapshot the recorded game ended with
    pub fn replay(&self) -> GameSnapshot {
        let mut game = Game::with_seed(self.seed);
        for event in &self.events {
            game.dispatch(event);
        }
        game.into_snapshot()
    }

    /// Replay and compare against a recorded snapshot
    pub fn verify(&self, expected: &GameSnapshot) -> Result<(), ReplayError> {
        let actual = self.replay();
        if &actual == expected {
            return Ok(());
        }
        Err(ReplayError::Diverged {
            events: self.events.len(),
            expected: expected.score,
            actual: actual.score,
        })
    }
}

/// A seeded game that logs every event it is given
#[derive(Debug, Clone)]
pub struct Recorder {
    game: Game<SeededPieceSource>,
    log: EventLog,
}

impl Recorder {
    /// Start recording a fresh game. The log opens with a `Restart`.
    pub fn new(seed: u32) -> Self {
        let mut recorder = Self {
            game: Game::with_seed(seed),
            log: EventLog::new(seed),
        };
        recorder.dispatch(Event::Restart);
        recorder
    }

    /// Apply and record an event. Inert events are recorded too.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let changed = self.game.dispatch(&event);
        self.log.events.push(event);
        changed
    }

    pub fn game(&self) -> &Game<SeededPieceSource> {
        &self.game
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        self.game.snapshot()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_log(self) -> EventLog {
        self.log
    }
}
