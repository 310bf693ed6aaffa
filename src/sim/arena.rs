//! Circular arena outline
//!
//! Drawn over the board but never enforced: bodies are only confined by the
//! rectangular canvas walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Arena {
    /// Arena centered on the canvas with radius `height / radius_divisor`
    pub fn for_canvas(bounds: Vec2, radius_divisor: f32) -> Self {
        Self {
            center: bounds / 2.0,
            radius: bounds.y / radius_divisor,
        }
    }
}
