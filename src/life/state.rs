//! Game of Life state shared by the frame loop and mouse handlers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::GenerationClock;
use super::generation::next_generation;
use super::grid::{Cell, Grid, cell_at};
use crate::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeState {
    pub grid: Grid,
    pub clock: GenerationClock,
    /// Cell edge in pixels
    pub cell_size: f32,
    /// Mouse button held (painting single cells on move)
    pub painting: bool,
    /// Generations computed so far
    pub generation: u64,
    /// Grid changed since the last draw
    dirty: bool,
}

impl LifeState {
    pub fn new(settings: &Settings) -> Self {
        let (cols, rows) = (settings.life_cols(), settings.life_rows());
        log::info!(
            "Life grid {}x{}, one generation every {} ms",
            cols,
            rows,
            settings.generation_interval_ms()
        );
        Self {
            grid: Grid::new(cols, rows),
            clock: GenerationClock::new(settings.generation_interval_ms()),
            cell_size: settings.cell_size as f32,
            painting: false,
            generation: 0,
            dirty: true,
        }
    }

    /// Step the automaton if the clock says so. Returns true if it stepped.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if !self.clock.advance(now_ms) {
            return false;
        }
        self.step();
        true
    }

    /// Step unconditionally
    pub fn step(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        self.dirty = true;
    }

    /// Mouse pressed: stamp a 3x3 block and start painting
    pub fn pointer_down(&mut self, pixel: Vec2) {
        self.painting = true;
        let (col, row) = cell_at(pixel, self.cell_size);
        if self.grid.stamp(col, row) {
            log::debug!("Stamped block at ({}, {})", col, row);
            self.dirty = true;
        }
    }

    /// Mouse moved: paint one cell while the button is held
    pub fn pointer_move(&mut self, pixel: Vec2) {
        if !self.painting {
            return;
        }
        let (col, row) = cell_at(pixel, self.cell_size);
        if self.grid.set(col, row, Cell::Alive) {
            self.dirty = true;
        }
    }

    pub fn pointer_up(&mut self) {
        self.painting = false;
    }

    /// Returns whether a redraw is needed and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LifeState {
        let settings = Settings {
            life_width: 200,
            life_height: 100,
            cell_size: 20,
            ..Default::default()
        };
        LifeState::new(&settings)
    }

    #[test]
    fn test_new_state_draws_once() {
        let mut life = small();
        assert_eq!((life.grid.cols(), life.grid.rows()), (10, 5));
        assert!(life.take_dirty());
        assert!(!life.take_dirty());
    }

    #[test]
    fn test_paint_stamp_then_drag() {
        let mut life = small();
        life.take_dirty();

        life.pointer_down(Vec2::new(50.0, 50.0));
        assert_eq!(life.grid.population(), 9);
        assert!(life.take_dirty());

        life.pointer_move(Vec2::new(150.0, 10.0));
        assert!(life.grid.is_alive(7, 0));
        assert_eq!(life.grid.population(), 10);

        life.pointer_up();
        life.pointer_move(Vec2::new(190.0, 90.0));
        assert!(!life.grid.is_alive(9, 4));
    }

    #[test]
    fn test_paint_at_edges_never_panics() {
        let mut life = small();
        life.pointer_down(Vec2::new(199.0, 99.0));
        assert_eq!(life.grid.population(), 4);

        // Off-canvas: nothing written, but painting still toggles
        life.pointer_down(Vec2::new(-5.0, 300.0));
        life.pointer_move(Vec2::new(1000.0, -1000.0));
        assert_eq!(life.grid.population(), 4);
    }

    #[test]
    fn test_advance_throttled() {
        let mut life = small();
        life.pointer_down(Vec2::new(50.0, 50.0));
        life.pointer_up();

        assert!(!life.advance(100.0));
        assert_eq!(life.generation, 0);
        assert!(life.advance(300.0));
        assert_eq!(life.generation, 1);
        // A filled 3x3 keeps only its corners plus births on each side
        assert_eq!(life.grid.population(), 8);
    }
}
