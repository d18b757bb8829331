//! Grid module - the placed-block matrix
//!
//! The grid is a 16x10 matrix where each cell is empty or holds a colored block.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..15 (left to right), y ranges 0..9 (top to bottom)
//!
//! The simulation core never edits a grid it owns: the merge collaborator builds a
//! new value (with [`Grid::set`] on its own copy) and hands it over whole through
//! an `UpdateGrid` event.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cell, GRID_COLUMNS, GRID_ROWS};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = GRID_COLUMNS as usize * GRID_ROWS as usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid needs {expected} cells, got {actual}")]
    WrongSize { expected: usize, actual: usize },
}

/// The placed-block matrix - 16 columns x 10 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Cell>", try_from = "Vec<Cell>")]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_COLUMNS as i8 || y < 0 || y >= GRID_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (GRID_COLUMNS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_COLUMNS
    }

    pub fn height(&self) -> u8 {
        GRID_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// True when no cell holds a block
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// One column, top to bottom. Empty for an out-of-range column.
    pub fn column(&self, x: u8) -> ArrayVec<Cell, { GRID_ROWS as usize }> {
        let mut out = ArrayVec::new();
        if x >= GRID_COLUMNS {
            return out;
        }
        for y in 0..GRID_ROWS as usize {
            out.push(self.cells[y * GRID_COLUMNS as usize + x as usize]);
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid from row-major rows
    pub fn from_rows(rows: [[Cell; GRID_COLUMNS as usize]; GRID_ROWS as usize]) -> Self {
        let mut cells = [None; GRID_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let start = y * GRID_COLUMNS as usize;
            cells[start..start + GRID_COLUMNS as usize].copy_from_slice(row);
        }
        Self { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for Vec<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells.to_vec()
    }
}

impl TryFrom<Vec<Cell>> for Grid {
    type Error = GridError;

    fn try_from(value: Vec<Cell>) -> Result<Self, Self::Error> {
        let cells: [Cell; GRID_SIZE] =
            value
                .try_into()
                .map_err(|rejected: Vec<Cell>| GridError::WrongSize {
                    expected: GRID_SIZE,
                    actual: rejected.len(),
                })?;
        Ok(Self { cells })
    }
}
