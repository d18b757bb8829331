//! Game state module - the lifecycle state machine and transition function
//!
//! [`reduce`] is the whole simulation: given a snapshot and one event it returns
//! the next snapshot. It never fails; events that do not apply in the current
//! phase return the snapshot unchanged. [`Game`] owns the snapshot and the piece
//! source that `Restart` draws from.

use log::{debug, trace};

use crate::detached::advance_all;
use crate::event::Event;
use crate::falling::FallingPiece;
use crate::rng::{PieceSource, SeededPieceSource};
use crate::scan::apply_scan;
use crate::snapshot::GameSnapshot;
use crate::types::GamePhase;

/// Apply one event to a snapshot
pub fn reduce<S: PieceSource>(state: &GameSnapshot, event: &Event, source: &mut S) -> GameSnapshot {
    match event {
        Event::Restart => GameSnapshot::fresh(source, state.now),
        Event::Pause => GameSnapshot {
            paused: !state.paused,
            ..state.clone()
        },
        Event::Tick { now, elapsed } => {
            if !state.playable() {
                return state.clone();
            }
            GameSnapshot {
                now: *now,
                game_time: state.game_time.saturating_add(*elapsed as u64),
                scan_line: state.scan_line.advanced(*elapsed),
                current: state.current.advanced(*elapsed),
                detached: advance_all(&state.detached, *elapsed),
                ..state.clone()
            }
        }
        Event::NextPiece { next } => {
            let [head, second, third] = state.queue;
            GameSnapshot {
                current: FallingPiece::spawn(head),
                queue: [second, third, *next],
                ..state.clone()
            }
        }
        Event::Scan { scanned, end } => {
            let (tally, score) = apply_scan(state.scanned, state.score, scanned, *end);
            GameSnapshot {
                scanned: tally,
                score,
                ..state.clone()
            }
        }
        Event::UpdateDetached { detached } => GameSnapshot {
            detached: detached.clone(),
            ..state.clone()
        },
        Event::UpdateGrid { grid } => GameSnapshot {
            grid: *grid,
            ..state.clone()
        },
        Event::Drop => match state.current.drop_fast() {
            Some(current) if state.playable() => GameSnapshot {
                current,
                ..state.clone()
            },
            _ => state.clone(),
        },
        Event::Suspend => with_phase(state, GamePhase::Playing, GamePhase::Paused),
        Event::Resume => with_phase(state, GamePhase::Paused, GamePhase::Playing),
        Event::GameOver => end_with(state, GamePhase::GameOver),
        Event::Finish => end_with(state, GamePhase::Finished),
        Event::Unknown => state.clone(),
    }
}

fn with_phase(state: &GameSnapshot, from: GamePhase, to: GamePhase) -> GameSnapshot {
    if state.game_state != from {
        return state.clone();
    }
    GameSnapshot {
        game_state: to,
        ..state.clone()
    }
}

fn end_with(state: &GameSnapshot, phase: GamePhase) -> GameSnapshot {
    if state.game_state.is_terminal() {
        return state.clone();
    }
    GameSnapshot {
        game_state: phase,
        ..state.clone()
    }
}

/// Owner of the live snapshot
#[derive(Debug, Clone)]
pub struct Game<S = SeededPieceSource> {
    snapshot: GameSnapshot,
    source: S,
}

impl Game<SeededPieceSource> {
    /// Create a new game whose restarts draw from a seeded source
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SeededPieceSource::new(seed))
    }
}

impl<S: PieceSource> Game<S> {
    pub fn new(mut source: S) -> Self {
        let snapshot = GameSnapshot::fresh(&mut source, 0);
        Self { snapshot, source }
    }

    /// Apply an event. Returns true if the snapshot changed.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let next = reduce(&self.snapshot, event, &mut self.source);

        if next.game_state != self.snapshot.game_state {
            debug!(
                "{}: {} -> {} (score {})",
                event.as_str(),
                self.snapshot.game_state.as_str(),
                next.game_state.as_str(),
                next.score
            );
        } else if let Event::Tick { now, elapsed } = event {
            trace!("tick now={} elapsed={}", now, elapsed);
        }

        if next == self.snapshot {
            if matches!(event, Event::Unknown) {
                debug!("ignoring unknown event");
            }
            return false;
        }

        self.snapshot = next;
        true
    }

    /// Shorthand for dispatching a tick
    pub fn tick(&mut self, now: u64, elapsed: u32) -> bool {
        self.dispatch(&Event::Tick { now, elapsed })
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> GameSnapshot {
        self.snapshot
    }

    pub fn phase(&self) -> GamePhase {
        self.snapshot.game_state
    }

    pub fn paused(&self) -> bool {
        self.snapshot.paused
    }

    pub fn score(&self) -> u32 {
        self.snapshot.score
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl Default for Game<SeededPieceSource> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
