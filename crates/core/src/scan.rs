//! Scan line module - the sweeping probe and its two-phase score tally
//!
//! The line moves left to right across the grid and wraps at the right edge.
//! While a sweep is in progress the match collaborator reports crossed regions
//! with `Scan { end: false }` events; head blocks are added to a running tally.
//! The sweep-completion event (`end: true`) commits the tally accumulated
//! *before* it to the score and resets the tally. Heads carried by the
//! completion event itself are not counted.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{ScannedBlock, GRID_COLUMNS, SCAN_LINE_MEDIUM};

const WIDTH: f64 = GRID_COLUMNS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanLine {
    pub x: f64,
    pub speed: f64,
}

impl ScanLine {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            speed: SCAN_LINE_MEDIUM,
        }
    }

    /// Position after `elapsed_ms`, wrapped into `[0, GRID_COLUMNS)`
    pub fn next_x(&self, elapsed_ms: u32) -> f64 {
        let x = self.x + self.speed.max(0.0) * elapsed_ms as f64;
        x.rem_euclid(WIDTH)
    }

    pub fn advanced(&self, elapsed_ms: u32) -> Self {
        Self {
            x: self.next_x(elapsed_ms),
            ..*self
        }
    }

    /// Columns whose left edge the line reaches during the next `elapsed_ms`,
    /// in the order they are crossed. Column 0 is reported when the line wraps.
    ///
    /// At most one full sweep is reported per call.
    pub fn crossed_columns(&self, elapsed_ms: u32) -> ArrayVec<u8, { GRID_COLUMNS as usize }> {
        let mut out = ArrayVec::new();
        let start = self.x;
        let end = start + self.speed.max(0.0) * elapsed_ms as f64;

        let mut edge = start.floor() + 1.0;
        while edge <= end && !out.is_full() {
            out.push(edge.rem_euclid(WIDTH) as u8);
            edge += 1.0;
        }
        out
    }

    /// True when the next advance wraps past the right edge
    pub fn wraps(&self, elapsed_ms: u32) -> bool {
        self.x + self.speed.max(0.0) * elapsed_ms as f64 >= WIDTH
    }
}

impl Default for ScanLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of head blocks in a scan report
pub fn count_heads(scanned: &[ScannedBlock]) -> u32 {
    scanned.iter().filter(|block| block.head).count() as u32
}

/// Result of applying one scan report: `(scanned, score)`
///
/// Additions saturate so the score never decreases.
pub fn apply_scan(scanned: u32, score: u32, report: &[ScannedBlock], end: bool) -> (u32, u32) {
    if end {
        (0, score.saturating_add(scanned))
    } else {
        (scanned.saturating_add(count_heads(report)), score)
    }
}
