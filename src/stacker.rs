//! Stand-in merge collaborator for headless runs
//!
//! The simulation core leaves locking, matching and clearing to the host. This
//! module is the smallest host that exercises the full event contract:
//!
//! - a falling piece lands on the pair of adjacent columns with the most room
//!   (as if a player had steered it there) and its cells stack column by column
//! - every single-colored 2x2 square is a match; its top-left cell is the head
//! - when the scan line leaves a column, matched cells in it are reported with
//!   a `Scan` event; when the line wraps, the sweep ends and every reported cell
//!   is cleared, the columns compact and the cleared cells fall away as detached
//!   blocks

use lumines_core::grid::GRID_SIZE;
use lumines_core::{Event, GameSnapshot, Grid};

use crate::types::{
    Cell, DetachedBlock, ScannedBlock, BLOCK_FLOOR, GRID_COLUMNS, GRID_ROWS,
};

const COLUMNS: usize = GRID_COLUMNS as usize;
const ROWS: usize = GRID_ROWS as usize;

/// What happened to the falling piece this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Landing {
    /// The piece was merged into this grid
    Locked(Grid),
    /// No column pair had room for the piece
    Overflow,
}

#[derive(Debug, Clone)]
pub struct Stacker {
    /// Cells reported to the scan tally during the sweep in progress
    reported: [bool; GRID_SIZE],
}

impl Default for Stacker {
    fn default() -> Self {
        Self::new()
    }
}

impl Stacker {
    pub fn new() -> Self {
        Self {
            reported: [false; GRID_SIZE],
        }
    }

    /// Lock the falling piece once it reaches the top of its target stack
    pub fn land(&self, snapshot: &GameSnapshot) -> Option<Landing> {
        let grid = &snapshot.grid;
        let Some(column) = best_pair(grid) else {
            return Some(Landing::Overflow);
        };

        let rest = stack_top(grid, column).min(stack_top(grid, column + 1));
        let landing_y = (rest - 2) as f64;
        if snapshot.current.y < landing_y && !snapshot.current.is_grounded() {
            return None;
        }

        let mut next = *grid;
        let blocks = snapshot.current.blocks;
        for col in 0..2 {
            let x = column + col;
            // Bottom cell first so the piece keeps its orientation
            for row in (0..2).rev() {
                let y = stack_top(&next, x) - 1;
                next.set(x as i8, y as i8, Some(blocks.get(row, col)));
            }
        }
        Some(Landing::Locked(next))
    }

    /// Events for a scan line that crossed the left edges in `crossed`
    pub fn sweep(&mut self, grid: &Grid, crossed: &[u8]) -> Vec<Event> {
        let mut events = Vec::new();
        let matched = matched_cells(grid);

        for &edge in crossed {
            let done = (edge as usize + COLUMNS - 1) % COLUMNS;
            let mut scanned = Vec::new();
            for y in 0..ROWS {
                let idx = y * COLUMNS + done;
                if !matched[idx] || self.reported[idx] {
                    continue;
                }
                if let Some(Some(color)) = grid.get(done as i8, y as i8) {
                    self.reported[idx] = true;
                    scanned.push(ScannedBlock {
                        x: done as u8,
                        y: y as u8,
                        color,
                        head: is_head(grid, done, y),
                    });
                }
            }
            if !scanned.is_empty() {
                events.push(Event::Scan {
                    scanned,
                    end: false,
                });
            }

            if edge == 0 {
                events.push(Event::Scan {
                    scanned: Vec::new(),
                    end: true,
                });
                events.extend(self.clear(grid));
            }
        }
        events
    }

    /// Empty the detached collection once every block has landed
    pub fn settle(&self, detached: &[DetachedBlock]) -> Option<Event> {
        if detached.is_empty() || detached.iter().any(|b| b.y < BLOCK_FLOOR) {
            return None;
        }
        Some(Event::UpdateDetached {
            detached: Vec::new(),
        })
    }

    fn clear(&mut self, grid: &Grid) -> Vec<Event> {
        let reported = std::mem::replace(&mut self.reported, [false; GRID_SIZE]);
        if !reported.iter().any(|&r| r) {
            return Vec::new();
        }

        let mut detached = Vec::new();
        let mut rows = [[None; COLUMNS]; ROWS];
        for x in 0..COLUMNS {
            let mut kept: Vec<Cell> = Vec::with_capacity(ROWS);
            for y in (0..ROWS).rev() {
                let cell = grid.get(x as i8, y as i8).flatten();
                let Some(color) = cell else {
                    continue;
                };
                if reported[y * COLUMNS + x] {
                    detached.push(DetachedBlock {
                        head: is_head(grid, x, y),
                        ..DetachedBlock::new(x as f64, y as f64, color)
                    });
                } else {
                    kept.push(Some(color));
                }
            }
            for (i, cell) in kept.into_iter().enumerate() {
                rows[ROWS - 1 - i][x] = cell;
            }
        }

        vec![
            Event::UpdateGrid {
                grid: Grid::from_rows(rows),
            },
            Event::UpdateDetached { detached },
        ]
    }
}

/// Row index of the highest block in a column (ROWS when empty)
fn stack_top(grid: &Grid, x: usize) -> usize {
    grid.column(x as u8)
        .iter()
        .position(|cell| cell.is_some())
        .unwrap_or(ROWS)
}

/// Left column of the adjacent pair with the most free rows, if any has two
fn best_pair(grid: &Grid) -> Option<usize> {
    (0..COLUMNS - 1)
        .map(|x| (x, stack_top(grid, x).min(stack_top(grid, x + 1))))
        .filter(|&(_, room)| room >= 2)
        .max_by_key(|&(x, room)| (room, std::cmp::Reverse(x)))
        .map(|(x, _)| x)
}

/// Top-left cell of a single-colored 2x2 square
fn is_head(grid: &Grid, x: usize, y: usize) -> bool {
    if x + 1 >= COLUMNS || y + 1 >= ROWS {
        return false;
    }
    let Some(Some(color)) = grid.get(x as i8, y as i8) else {
        return false;
    };
    [(1, 0), (0, 1), (1, 1)]
        .iter()
        .all(|&(dx, dy)| grid.get((x + dx) as i8, (y + dy) as i8) == Some(Some(color)))
}

/// Every cell that belongs to at least one single-colored 2x2 square
fn matched_cells(grid: &Grid) -> [bool; GRID_SIZE] {
    let mut out = [false; GRID_SIZE];
    for y in 0..ROWS - 1 {
        for x in 0..COLUMNS - 1 {
            if is_head(grid, x, y) {
                for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    out[(y + dy) * COLUMNS + x + dx] = true;
                }
            }
        }
    }
    out
}
