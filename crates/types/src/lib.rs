//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental value types used by the simulation core,
//! the replay log and the headless driver. Everything here is plain data with
//! serde derives so it can travel through the event log unchanged.
//!
//! # Grid Dimensions
//!
//! The Lumines playfield is wider than it is tall:
//!
//! - **Columns**: 16 (indexed 0-15, left to right)
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Spawn position**: (7, 0), the top-left cell of the 2x2 piece
//!
//! # Units
//!
//! Positions are continuous and measured in cells. Times are milliseconds.
//! Speeds are therefore cells per millisecond:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval for headless drivers |
//! | `DROP_SLOW` | 0.002 | Gravity for a freshly spawned piece (2 cells/s) |
//! | `DROP_FAST` | 0.04 | Gravity after the player commits a drop |
//! | `DETACHED_FALL` | 0.02 | Default fall speed for detached blocks |
//! | `SCAN_LINE_MEDIUM` | 0.004 | One full sweep of 16 columns in 4 seconds |
//!
//! # Examples
//!
//! ```
//! use lumines_types::{Color, GamePhase, Piece, GRID_COLUMNS, GRID_ROWS};
//!
//! let piece = Piece::new([[Color::Light, Color::Dark], [Color::Dark, Color::Light]]);
//! assert_eq!(piece.get(0, 1), Color::Dark);
//!
//! assert_eq!(GamePhase::from_str("finished"), Some(GamePhase::Finished));
//! assert_eq!(GRID_COLUMNS, 16);
//! assert_eq!(GRID_ROWS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Grid width in cells (16 columns)
pub const GRID_COLUMNS: u8 = 16;

/// Grid height in cells (10 rows)
pub const GRID_ROWS: u8 = 10;

/// Frame interval in milliseconds for fixed-step drivers (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of upcoming pieces kept in the queue
pub const QUEUE_LEN: usize = 3;

/// Spawn column of a new falling piece (left edge of the 2x2)
pub const SPAWN_X: f64 = 7.0;

/// Spawn row of a new falling piece (top edge of the 2x2)
pub const SPAWN_Y: f64 = 0.0;

/// Base gravity for a falling piece, in cells per millisecond
pub const DROP_SLOW: f64 = 0.002;

/// Gravity after a committed drop, in cells per millisecond
pub const DROP_FAST: f64 = 0.04;

/// Default fall speed for detached blocks, in cells per millisecond
pub const DETACHED_FALL: f64 = 0.02;

/// Scan line speed, in cells per millisecond
pub const SCAN_LINE_MEDIUM: f64 = 0.004;

/// Lowest `y` a falling piece can reach (its top edge rests on the bottom row pair)
pub const PIECE_FLOOR: f64 = (GRID_ROWS - 2) as f64;

/// Lowest `y` a single detached block can reach
pub const BLOCK_FLOOR: f64 = (GRID_ROWS - 1) as f64;

/// The two block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lumines_types::Color;
    ///
    /// assert_eq!(Color::from_str("LIGHT"), Some(Color::Light));
    /// assert_eq!(Color::from_str("dark"), Some(Color::Dark));
    /// assert_eq!(Color::from_str("red"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Color::Light),
            "dark" => Some(Color::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell holding a placed block
pub type Cell = Option<Color>;

/// A 2x2 piece, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    cells: [[Color; 2]; 2],
}

impl Piece {
    pub fn new(cells: [[Color; 2]; 2]) -> Self {
        Self { cells }
    }

    /// A piece whose four cells share one color
    pub fn solid(color: Color) -> Self {
        Self {
            cells: [[color; 2]; 2],
        }
    }

    /// Color at `(row, col)`, both in `0..2`
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    pub fn cells(&self) -> &[[Color; 2]; 2] {
        &self.cells
    }

    /// Number of cells with the given color
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == color).count()
    }
}

/// Lifecycle phase of a game
///
/// Only `Playing` advances physics. `GameOver` and `Finished` are left only
/// through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Playing,
    Paused,
    GameOver,
    Finished,
}

impl GamePhase {
    /// Parse phase from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "playing" => Some(GamePhase::Playing),
            "paused" => Some(GamePhase::Paused),
            "gameover" | "game_over" => Some(GamePhase::GameOver),
            "finished" => Some(GamePhase::Finished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
            GamePhase::Finished => "finished",
        }
    }

    /// Terminal phases ignore everything except a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Finished)
    }
}

/// A grid block reported by the match collaborator when the scan line crosses it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScannedBlock {
    pub x: u8,
    pub y: u8,
    pub color: Color,
    /// Leading block of a matched region; only heads count toward the tally
    #[serde(default)]
    pub head: bool,
}

/// A block removed from the grid that is still falling before it disappears
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetachedBlock {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub speed: f64,
    #[serde(default)]
    pub head: bool,
}

impl DetachedBlock {
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            speed: DETACHED_FALL,
            head: false,
        }
    }
}
