//! Rendering seam
//!
//! The simulations never touch pixels. `scene` draws them through the
//! `Renderer` trait; `Canvas2d` implements it for the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use scene::{draw_carrom, draw_life};

use glam::Vec2;

/// Minimal 2D drawing surface
pub trait Renderer {
    /// Clear a `size` rectangle from the origin
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn line(&mut self, from: Vec2, to: Vec2, color: &str);
    /// Square cell with top-left `origin` and edge `size`
    fn cell(&mut self, origin: Vec2, size: f32, fill: &str, stroke: &str);
}

/// Colors for scene elements
pub mod colors {
    pub const OUTLINE: &str = "#000000";
    pub const LIFE_ALIVE: &str = "#63863f";
    pub const LIFE_DEAD: &str = "#ffffff";
}
