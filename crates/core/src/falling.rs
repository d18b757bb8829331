//! Falling piece module - the player-controlled piece under gravity

use serde::{Deserialize, Serialize};

use crate::types::{Piece, DROP_FAST, DROP_SLOW, PIECE_FLOOR, SPAWN_X, SPAWN_Y};

/// Advance a vertical position by `speed * elapsed`, never past `floor`.
///
/// Monotonically non-decreasing in `elapsed`. A position already below the floor
/// is left where it is rather than pulled back up.
#[inline]
pub fn advance_y(y: f64, speed: f64, elapsed_ms: u32, floor: f64) -> f64 {
    let next = y + speed.max(0.0) * elapsed_ms as f64;
    if y >= floor {
        y
    } else {
        next.min(floor)
    }
}

/// The piece currently descending the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingPiece {
    pub x: f64,
    pub y: f64,
    pub blocks: Piece,
    /// Player committed the piece to a fast drop
    pub dropped: bool,
    pub speed: f64,
}

impl FallingPiece {
    /// Create a piece at the spawn position with base gravity
    pub fn spawn(blocks: Piece) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            blocks,
            dropped: false,
            speed: DROP_SLOW,
        }
    }

    /// Position after `elapsed_ms` of gravity
    pub fn advanced(&self, elapsed_ms: u32) -> Self {
        Self {
            y: advance_y(self.y, self.speed, elapsed_ms, PIECE_FLOOR),
            ..*self
        }
    }

    /// Commit the piece to a fast drop. Returns None if it was already dropped.
    pub fn drop_fast(&self) -> Option<Self> {
        if self.dropped {
            return None;
        }
        Some(Self {
            dropped: true,
            speed: DROP_FAST,
            ..*self
        })
    }

    /// Resting on the grid bottom
    pub fn is_grounded(&self) -> bool {
        self.y >= PIECE_FLOOR
    }

    /// Grid row the top edge currently overlaps
    pub fn row(&self) -> i8 {
        self.y.floor() as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn piece() -> Piece {
        Piece::solid(Color::Light)
    }

    #[test]
    fn test_spawn() {
        let p = FallingPiece::spawn(piece());
        assert_eq!(p.x, SPAWN_X);
        assert_eq!(p.y, SPAWN_Y);
        assert!(!p.dropped);
        assert_eq!(p.speed, DROP_SLOW);
        assert_eq!(p.blocks, piece());
    }

    #[test]
    fn test_advance_scales_with_elapsed() {
        let p = FallingPiece::spawn(piece());
        let a = p.advanced(100);
        let b = p.advanced(200);

        assert!((a.y - 0.2).abs() < 1e-9);
        assert!((b.y - 0.4).abs() < 1e-9);
        assert_eq!(a.x, p.x);
        assert_eq!(a.speed, p.speed);
        assert!(!a.dropped);
    }

    #[test]
    fn test_advance_zero_elapsed_is_identity() {
        let p = FallingPiece::spawn(piece());
        assert_eq!(p.advanced(0), p);
    }

    #[test]
    fn test_advance_clamps_at_floor() {
        let p = FallingPiece::spawn(piece());
        let landed = p.advanced(60_000);
        assert_eq!(landed.y, PIECE_FLOOR);
        assert!(landed.is_grounded());
        assert_eq!(landed.advanced(16).y, PIECE_FLOOR);
    }

    #[test]
    fn test_advance_y_monotonic() {
        let mut last = 0.0;
        for elapsed in (0..5000).step_by(250) {
            let y = advance_y(1.0, 0.003, elapsed, 9.0);
            assert!(y >= last);
            last = y;
        }
    }

    #[test]
    fn test_advance_y_negative_speed_does_not_rise() {
        assert_eq!(advance_y(3.0, -1.0, 100, 9.0), 3.0);
    }

    #[test]
    fn test_drop_fast() {
        let p = FallingPiece::spawn(piece());
        let dropped = p.drop_fast().unwrap();
        assert!(dropped.dropped);
        assert_eq!(dropped.speed, DROP_FAST);
        assert_eq!(dropped.y, p.y);

        assert!(dropped.drop_fast().is_none());
    }

    #[test]
    fn test_row() {
        let mut p = FallingPiece::spawn(piece());
        p.y = 3.75;
        assert_eq!(p.row(), 3);
    }
}
