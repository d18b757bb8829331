//! Events accepted by the transition function
//!
//! Events serialize as internally tagged JSON objects, e.g.
//! `{"type":"tick","now":1016,"elapsed":16}`. A tag this build does not know
//! decodes to [`Event::Unknown`], which every transition treats as inert.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{DetachedBlock, Piece, ScannedBlock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Replace the snapshot with a fresh game
    Restart,
    /// Toggle the `paused` flag
    Pause,
    /// Advance physics by `elapsed` milliseconds; `now` is the frame timestamp
    Tick { now: u64, elapsed: u32 },
    /// Promote the queue head to the falling piece and enqueue `next`
    NextPiece { next: Piece },
    /// Scan report from the match collaborator
    Scan {
        #[serde(default)]
        scanned: Vec<ScannedBlock>,
        end: bool,
    },
    UpdateDetached { detached: Vec<DetachedBlock> },
    UpdateGrid { grid: Grid },
    /// Commit the falling piece to a fast drop
    Drop,
    /// Playing -> Paused
    Suspend,
    /// Paused -> Playing
    Resume,
    GameOver,
    Finish,
    #[serde(other)]
    Unknown,
}

impl Event {
    /// Short tag used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Restart => "restart",
            Event::Pause => "pause",
            Event::Tick { .. } => "tick",
            Event::NextPiece { .. } => "next_piece",
            Event::Scan { .. } => "scan",
            Event::UpdateDetached { .. } => "update_detached",
            Event::UpdateGrid { .. } => "update_grid",
            Event::Drop => "drop",
            Event::Suspend => "suspend",
            Event::Resume => "resume",
            Event::GameOver => "game_over",
            Event::Finish => "finish",
            Event::Unknown => "unknown",
        }
    }
}
