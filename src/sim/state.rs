//! Carrom board state
//!
//! Everything the frame loop and pointer handlers share lives here, owned by
//! a single `CarromState` instead of globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use crate::Settings;

/// Placement attempts per body before giving up on finding free space
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Physics constants shared by every body on the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub energy_loss: f32,
    pub impulse_divisor: f32,
}

/// Complete carrom board state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarromState {
    /// Placement seed
    pub seed: u64,
    /// Canvas size in pixels
    pub bounds: Vec2,
    /// Bodies in update order
    pub bodies: Vec<Body>,
    pub arena: Arena,
    pub physics: Physics,
    /// Last known pointer position (for trajectory previews)
    pub pointer: Vec2,
    /// Frames simulated so far
    pub frame: u64,
}

impl CarromState {
    /// Create a board of `bounds` size and place bodies from `settings`
    pub fn new(settings: &Settings, bounds: Vec2, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bodies = place_bodies(settings, bounds, &mut rng);
        log::info!(
            "Carrom board {}x{} with {} bodies (seed {})",
            bounds.x,
            bounds.y,
            bodies.len(),
            seed
        );

        Self {
            seed,
            bounds,
            bodies,
            arena: Arena::for_canvas(bounds, settings.arena_radius_divisor),
            physics: Physics {
                energy_loss: settings.energy_loss,
                impulse_divisor: settings.impulse_divisor,
            },
            pointer: Vec2::ZERO,
            frame: 0,
        }
    }

    /// Board with explicit bodies (no random placement)
    pub fn with_bodies(settings: &Settings, bounds: Vec2, bodies: Vec<Body>) -> Self {
        Self {
            seed: 0,
            bounds,
            bodies,
            arena: Arena::for_canvas(bounds, settings.arena_radius_divisor),
            physics: Physics {
                energy_loss: settings.energy_loss,
                impulse_divisor: settings.impulse_divisor,
            },
            pointer: Vec2::ZERO,
            frame: 0,
        }
    }

    /// Body currently being dragged, if any
    pub fn dragging(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_dragging())
    }

    /// Total kinetic energy (for diagnostics)
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.vel.length_squared())
            .sum()
    }
}

/// Rejection-sample non-overlapping bodies fully inside `bounds`.
///
/// A candidate that overlaps any placed body is redrawn and rechecked against
/// all of them. Bodies that cannot find room are skipped.
pub fn place_bodies(settings: &Settings, bounds: Vec2, rng: &mut Pcg32) -> Vec<Body> {
    let mut bodies: Vec<Body> = Vec::with_capacity(settings.body_count);

    for i in 0..settings.body_count {
        let radius = settings.min_radius + rng.random::<f32>() * settings.radius_spread;
        let span = bounds - Vec2::splat(radius * 2.0);
        if span.x <= 0.0 || span.y <= 0.0 {
            log::warn!("Canvas too small for body of radius {}", radius);
            continue;
        }

        let mut candidate = None;
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = Vec2::new(
                rng.random::<f32>() * span.x + radius,
                rng.random::<f32>() * span.y + radius,
            );
            let body = Body::new(pos, Vec2::ZERO, radius, settings.body_mass, settings.friction);
            if bodies.iter().all(|other| !body.overlaps(other)) {
                if attempt > 0 {
                    log::debug!("Body {} placed after {} rejections", i, attempt);
                }
                candidate = Some(body);
                break;
            }
        }

        match candidate {
            Some(body) => bodies.push(body),
            None => log::warn!("No room for body {} after {} attempts", i, MAX_PLACEMENT_ATTEMPTS),
        }
    }

    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_non_overlapping_and_inside() {
        let settings = Settings::default();
        let bounds = Vec2::new(1280.0, 720.0);
        let state = CarromState::new(&settings, bounds, 42);

        assert_eq!(state.bodies.len(), settings.body_count);
        for (i, a) in state.bodies.iter().enumerate() {
            assert!(a.pos.x - a.radius() >= 0.0 && a.pos.x + a.radius() <= bounds.x);
            assert!(a.pos.y - a.radius() >= 0.0 && a.pos.y + a.radius() <= bounds.y);
            assert!(a.radius() >= 30.0 && a.radius() <= 40.0);
            assert_eq!(a.vel, Vec2::ZERO);
            for b in &state.bodies[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_placement_deterministic() {
        let settings = Settings::default();
        let bounds = Vec2::new(1280.0, 720.0);
        let a = CarromState::new(&settings, bounds, 7);
        let b = CarromState::new(&settings, bounds, 7);
        for (x, y) in a.bodies.iter().zip(&b.bodies) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.radius(), y.radius());
        }
    }

    #[test]
    fn test_crowded_board_skips_instead_of_hanging() {
        let settings = Settings {
            body_count: 50,
            ..Default::default()
        };
        let state = CarromState::new(&settings, Vec2::new(200.0, 200.0), 1);
        assert!(state.bodies.len() < 50);
        assert!(!state.bodies.is_empty());
    }

    #[test]
    fn test_arena_from_settings() {
        let state = CarromState::new(&Settings::default(), Vec2::new(1100.0, 880.0), 3);
        assert_eq!(state.arena.center, Vec2::new(550.0, 440.0));
        assert!((state.arena.radius - 400.0).abs() < 1e-3);
    }
}
