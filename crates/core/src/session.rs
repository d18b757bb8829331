//! Session - frame driver around a recorded game
//!
//! Bridges a [`Clock`] to `Tick` events and feeds new pieces from a second seeded
//! source. The `paused` flag is honored here: while it is set, frames keep the
//! clock bookkeeping current but dispatch no tick, so physics resumes without a
//! jump once the flag is cleared.

use crate::clock::Clock;
use crate::event::Event;
use crate::replay::{EventLog, Recorder};
use crate::rng::{PieceSource, SeededPieceSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::submission::{SubmissionGate, SubmitError};
use crate::types::GamePhase;

pub struct Session<C: Clock> {
    recorder: Recorder,
    feed: SeededPieceSource,
    clock: C,
    last_frame_ms: u64,
    gate: SubmissionGate,
}

impl<C: Clock> Session<C> {
    pub fn new(seed: u32, clock: C) -> Self {
        // Derived so the feed never replays the restart sequence
        let feed_seed = SimpleRng::new(seed ^ 0x9e37_79b9).next_u32();
        let last_frame_ms = clock.now_ms();

        Self {
            recorder: Recorder::new(seed),
            feed: SeededPieceSource::new(feed_seed),
            clock,
            last_frame_ms,
            gate: SubmissionGate::new(),
        }
    }

    /// Apply an event, keeping the log and submission gate in step
    pub fn dispatch(&mut self, event: Event) -> bool {
        let prev = self.phase();
        let changed = self.recorder.dispatch(event);
        self.gate.observe(prev, self.phase());
        changed
    }

    /// Read the clock and tick by the time since the previous frame.
    /// Returns true if the snapshot changed.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now;

        if self.recorder.snapshot().paused {
            return false;
        }

        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.dispatch(Event::Tick { now, elapsed })
    }

    /// Draw the next queued piece and promote the queue head
    pub fn next_piece(&mut self) -> bool {
        let next = self.feed.generate();
        self.dispatch(Event::NextPiece { next })
    }

    pub fn restart(&mut self) -> bool {
        self.dispatch(Event::Restart)
    }

    pub fn submit(&mut self, name: &str) -> Result<String, SubmitError> {
        self.gate.submit(name)
    }

    pub fn can_submit(&self) -> bool {
        self.gate.can_submit()
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        self.recorder.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.recorder.snapshot().game_state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn log(&self) -> &EventLog {
        self.recorder.log()
    }

    pub fn into_log(self) -> EventLog {
        self.recorder.into_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_frame_ticks_by_clock_delta() {
        let clock = ManualClock::new(1000);
        let mut session = Session::new(1, &clock);

        clock.advance(16);
        assert!(session.frame());
        assert_eq!(session.snapshot().now, 1016);
        assert_eq!(session.snapshot().game_time, 16);

        clock.advance(34);
        session.frame();
        assert_eq!(session.snapshot().game_time, 50);
    }

    #[test]
    fn test_paused_flag_halts_physics_without_jump() {
        let clock = ManualClock::new(0);
        let mut session = Session::new(1, &clock);

        session.dispatch(Event::Pause);
        clock.advance(500);
        assert!(!session.frame());
        assert_eq!(session.snapshot().game_time, 0);

        session.dispatch(Event::Pause);
        clock.advance(16);
        session.frame();
        assert_eq!(session.snapshot().game_time, 16);
    }

    #[test]
    fn test_next_piece_feeds_queue() {
        let clock = ManualClock::new(0);
        let mut session = Session::new(9, &clock);
        let queue = session.snapshot().queue;

        assert!(session.next_piece());
        let s = session.snapshot();
        assert_eq!(s.current.blocks, queue[0]);
        assert_eq!(s.queue[0], queue[1]);
        assert_eq!(s.queue[1], queue[2]);
    }

    #[test]
    fn test_finish_opens_submission_once() {
        let clock = ManualClock::new(0);
        let mut session = Session::new(1, &clock);
        assert!(!session.can_submit());

        session.dispatch(Event::Finish);
        assert!(session.can_submit());
        assert_eq!(session.submit("amy"), Ok("amy".to_string()));

        session.dispatch(Event::Finish);
        assert!(!session.can_submit());

        session.restart();
        session.dispatch(Event::Finish);
        assert!(session.can_submit());
    }

    #[test]
    fn test_session_log_replays() {
        let clock = ManualClock::new(0);
        let mut session = Session::new(77, &clock);
        for _ in 0..10 {
            clock.advance(16);
            session.frame();
        }
        session.next_piece();
        session.dispatch(Event::Drop);
        clock.advance(100);
        session.frame();

        let expected = session.snapshot().clone();
        assert_eq!(session.into_log().replay(), expected);
    }
}
