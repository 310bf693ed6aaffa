//! Fixed-size cell grid

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// COLS×ROWS grid stored column-major. No wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// Grid with the given `(col, row)` cells alive (out-of-range ones ignored)
    pub fn with_alive(cols: usize, rows: usize, alive: &[(i64, i64)]) -> Self {
        let mut grid = Self::new(cols, rows);
        for &(col, row) in alive {
            grid.set(col, row, Cell::Alive);
        }
        grid
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        let in_range =
            col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows;
        in_range.then(|| col as usize * self.rows + row as usize)
    }

    /// Cell at `(col, row)`, `None` outside the grid
    pub fn get(&self, col: i64, row: i64) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Alive check that treats out-of-range as dead
    #[inline]
    pub fn is_alive(&self, col: i64, row: i64) -> bool {
        self.get(col, row).is_some_and(Cell::is_alive)
    }

    /// Write a cell. Out-of-range writes are ignored; returns whether it landed.
    pub fn set(&mut self, col: i64, row: i64, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Set the 3x3 block centered on `(col, row)` alive, clipping at the edges.
    /// Nothing is written unless the center itself is inside the grid.
    pub fn stamp(&mut self, col: i64, row: i64) -> bool {
        if self.index(col, row).is_none() {
            return false;
        }
        for dc in -1..=1 {
            for dr in -1..=1 {
                self.set(col + dc, row + dr, Cell::Alive);
            }
        }
        true
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate `(col, row, cell)` in column-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / rows, i % rows, cell))
    }
}

/// Cell coordinates under a pixel position
pub fn cell_at(pixel: Vec2, cell_size: f32) -> (i64, i64) {
    (
        (pixel.x / cell_size).floor() as i64,
        (pixel.y / cell_size).floor() as i64,
    )
}
