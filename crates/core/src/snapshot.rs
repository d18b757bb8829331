use serde::{Deserialize, Serialize};

use crate::falling::FallingPiece;
use crate::grid::Grid;
use crate::rng::PieceSource;
use crate::scan::ScanLine;
use crate::types::{DetachedBlock, GamePhase, Piece, QUEUE_LEN};

/// Everything a renderer or collaborator needs to observe a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Timestamp of the last applied tick
    pub now: u64,
    pub game_state: GamePhase,
    /// Toggled by `Pause`; orthogonal to `game_state`
    pub paused: bool,
    /// Milliseconds of play (sum of applied tick `elapsed`)
    pub game_time: u64,
    pub score: u32,
    /// Head blocks tallied in the sweep in progress
    pub scanned: u32,
    pub scan_line: ScanLine,
    pub queue: [Piece; QUEUE_LEN],
    pub grid: Grid,
    pub current: FallingPiece,
    pub detached: Vec<DetachedBlock>,
}

impl GameSnapshot {
    /// A new game: three queued pieces, then the falling one
    pub fn fresh<S: PieceSource>(source: &mut S, now: u64) -> Self {
        let queue = [source.generate(), source.generate(), source.generate()];
        let current = FallingPiece::spawn(source.generate());

        Self {
            now,
            game_state: GamePhase::Playing,
            paused: false,
            game_time: 0,
            score: 0,
            scanned: 0,
            scan_line: ScanLine::new(),
            queue,
            grid: Grid::new(),
            current,
            detached: Vec::new(),
        }
    }

    /// Physics advances on tick
    pub fn playable(&self) -> bool {
        self.game_state == GamePhase::Playing
    }

    /// Name submission is open for this phase
    pub fn finished(&self) -> bool {
        self.game_state == GamePhase::Finished
    }
}
