//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the Lumines game rules as a transition function over an
//! owned snapshot. It has **zero dependencies** on rendering, input or I/O:
//!
//! - **Deterministic**: same seed and same events produce the same snapshot
//! - **Replayable**: every dispatched event can be logged and replayed
//! - **Inert by default**: events that do not apply leave the snapshot unchanged
//!
//! # Module Structure
//!
//! - [`game_state`]: lifecycle state machine, [`reduce`] and the owning [`Game`]
//! - [`grid`]: 16x10 placed-block matrix, replaced wholesale
//! - [`falling`]: the falling piece and the shared gravity advance
//! - [`scan`]: scan line sweep and the two-phase score tally
//! - [`detached`]: cleared blocks still falling
//! - [`rng`]: seeded piece generation
//! - [`clock`], [`session`]: frame driving from an injected clock
//! - [`replay`]: event log and replay
//! - [`submission`]: leaderboard name gate for finished games
//!
//! Collision detection and grid merging are not here. A collaborator watches
//! `current` and `grid` after each tick and reports its decisions back as
//! `UpdateGrid`, `UpdateDetached` and `Scan` events.
//!
//! # Example
//!
//! ```
//! use lumines_core::{Event, Game, GamePhase};
//!
//! let mut game = Game::with_seed(12345);
//! game.dispatch(&Event::Restart);
//!
//! game.tick(16, 16);
//! game.dispatch(&Event::Scan { scanned: vec![], end: true });
//!
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.snapshot().queue.len(), 3);
//! ```

pub mod clock;
pub mod detached;
pub mod event;
pub mod falling;
pub mod game_state;
pub mod grid;
pub mod replay;
pub mod rng;
pub mod scan;
pub mod session;
pub mod snapshot;
pub mod submission;

pub use lumines_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use event::Event;
pub use falling::FallingPiece;
pub use game_state::{reduce, Game};
pub use grid::{Grid, GridError};
pub use replay::{EventLog, Recorder, ReplayError};
pub use rng::{PieceSource, SeededPieceSource, SimpleRng};
pub use scan::ScanLine;
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use submission::{SubmissionGate, SubmitError};
pub use types::{Color, GamePhase, Piece};
