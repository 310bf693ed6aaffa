//! Carrom Life - a canvas sandbox with two independent simulations
//!
//! Core modules:
//! - `sim`: Carrom board (elastic collisions, wall bounces, drag impulses)
//! - `life`: Conway's Game of Life grid with mouse painting
//! - `renderer`: Narrow drawing seam plus the Canvas 2D backend
//! - `settings`: Data-driven tunables

pub mod error;
pub mod life;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants (defaults for `Settings`)
pub mod consts {
    /// Bodies placed on the carrom board
    pub const BODY_COUNT: usize = 20;
    /// Smallest body radius; actual radius is MIN + rand * SPREAD
    pub const BODY_MIN_RADIUS: f32 = 30.0;
    pub const BODY_RADIUS_SPREAD: f32 = 10.0;
    pub const BODY_MASS: f32 = 1.0;
    /// Per-step displacement multiplier (not applied to stored velocity)
    pub const BODY_FRICTION: f32 = 0.6;

    /// Velocity scale applied to both bodies after every collision
    pub const ENERGY_LOSS: f32 = 0.6;
    /// Drag distance (px) per unit of impulse
    pub const IMPULSE_DIVISOR: f32 = 15.0;
    /// Arena radius = canvas height / divisor
    pub const ARENA_RADIUS_DIVISOR: f32 = 2.2;

    /// Game of Life canvas
    pub const LIFE_WIDTH: u32 = 1440;
    pub const LIFE_HEIGHT: u32 = 700;
    /// Cell edge in pixels
    pub const CELL_SIZE: u32 = 20;
    /// 4 generations/s = one every 250 ms
    pub const GENERATIONS_PER_SECOND: f64 = 4.0;

    /// Upper bounds accepted from settings
    pub const MAX_BODY_COUNT: usize = 1_000;
    pub const MAX_LIFE_CELLS: usize = 1 << 20;
}

/// Rotate a vector by `angle` radians (standard 2D rotation matrix)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}
