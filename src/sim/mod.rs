//! Carrom board simulation
//!
//! Frame-stepped and deterministic for a given seed:
//! - Seeded RNG only (placement)
//! - Stable iteration order (array order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use body::{Body, DragState, Tint, drag_impulse};
pub use collision::{approaching, collide, collision_angle, resolve_collision};
pub use state::{CarromState, Physics, place_bodies};
pub use tick::{pointer_down, pointer_move, pointer_up, tick, update_body};
