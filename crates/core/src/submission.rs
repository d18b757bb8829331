//! Score submission gate
//!
//! A finished game may submit one name to the leaderboard. The gate opens on the
//! transition into `Finished` and closes after a successful submission or when
//! the game leaves `Finished` (restart). Observing `Finished -> Finished` does
//! not reopen it.

use log::debug;
use thiserror::Error;

use crate::types::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no finished game is waiting for a name")]
    NotEligible,
    #[error("name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    armed: bool,
    error: bool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observed phase change (`prev` may equal `next`)
    pub fn observe(&mut self, prev: GamePhase, next: GamePhase) {
        if next == GamePhase::Finished {
            if prev != GamePhase::Finished {
                debug!("game finished, name submission open");
                self.armed = true;
                self.error = false;
            }
        } else {
            self.armed = false;
            self.error = false;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.armed
    }

    /// Last submission was rejected for an empty name
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Accept a name. On success the gate closes and the trimmed name is returned.
    pub fn submit(&mut self, name: &str) -> Result<String, SubmitError> {
        if !self.armed {
            return Err(SubmitError::NotEligible);
        }
        let name = name.trim();
        if name.is_empty() {
            self.error = true;
            return Err(SubmitError::EmptyName);
        }
        self.armed = false;
        self.error = false;
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_until_finish() {
        let mut gate = SubmissionGate::new();
        assert!(!gate.can_submit());
        assert_eq!(gate.submit("amy"), Err(SubmitError::NotEligible));

        gate.observe(GamePhase::Playing, GamePhase::GameOver);
        assert!(!gate.can_submit());
    }

    #[test]
    fn test_opens_once_per_finish() {
        let mut gate = SubmissionGate::new();
        gate.observe(GamePhase::Playing, GamePhase::Finished);
        assert!(gate.can_submit());

        assert_eq!(gate.submit("  amy "), Ok("amy".to_string()));
        assert!(!gate.can_submit());

        // Staying finished does not reopen
        gate.observe(GamePhase::Finished, GamePhase::Finished);
        assert!(!gate.can_submit());
        assert_eq!(gate.submit("amy"), Err(SubmitError::NotEligible));
    }

    #[test]
    fn test_empty_name_keeps_gate_open() {
        let mut gate = SubmissionGate::new();
        gate.observe(GamePhase::Paused, GamePhase::Finished);

        assert_eq!(gate.submit("   "), Err(SubmitError::EmptyName));
        assert!(gate.has_error());
        assert!(gate.can_submit());

        assert!(gate.submit("bo").is_ok());
        assert!(!gate.has_error());
    }

    #[test]
    fn test_restart_closes_gate() {
        let mut gate = SubmissionGate::new();
        gate.observe(GamePhase::Playing, GamePhase::Finished);
        gate.observe(GamePhase::Finished, GamePhase::Playing);
        assert!(!gate.can_submit());

        gate.observe(GamePhase::Playing, GamePhase::Finished);
        assert!(gate.can_submit());
    }
}
