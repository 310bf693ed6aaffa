//! Conway's Game of Life
//!
//! Independent of the carrom board. The grid is replaced wholesale each
//! generation; painting writes into it directly between generations.

pub mod clock;
pub mod generation;
pub mod grid;
pub mod state;

pub use clock::GenerationClock;
pub use generation::{live_neighbors, next_generation, next_state};
pub use grid::{Cell, Grid, cell_at};
pub use state::LifeState;
