//! Conway's rule

use super::grid::{Cell, Grid};

/// Live cells among the 8 neighbors (edges are dead, no wraparound)
pub fn live_neighbors(grid: &Grid, col: i64, row: i64) -> u8 {
    let mut count = 0;
    for dc in -1..=1 {
        for dr in -1..=1 {
            if (dc, dr) != (0, 0) && grid.is_alive(col + dc, row + dr) {
                count += 1;
            }
        }
    }
    count
}

/// Fate of one cell given its live neighbor count
#[inline]
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, n) if n < 2 || n > 3 => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (cell, _) => cell,
    }
}

/// Compute the next generation. Every count reads `grid`, never the result.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for (col, row, cell) in grid.iter() {
        let (col, row) = (col as i64, row as i64);
        next.set(col, row, next_state(cell, live_neighbors(grid, col, row)));
    }
    next
}
