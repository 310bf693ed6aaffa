//! Carrom bodies and the drag gesture that launches them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::distance;

/// Drag gesture state. A body is dragged at most once at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer went down inside the body; waiting for release
    Dragging { origin: Vec2 },
}

/// Display tint, driven by the drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    /// Never touched
    #[default]
    Resting,
    /// Pointer is holding the body
    Selected,
    /// Has been launched at least once
    Launched,
}

impl Tint {
    /// CSS fill color
    pub fn color(&self) -> &'static str {
        match self {
            Tint::Resting => "#b1b1b1",
            Tint::Selected => "#234245",
            Tint::Launched => "#ea2127",
        }
    }
}

/// A circular body on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    mass: f32,
    /// Scales each step's displacement, never the stored velocity
    friction: f32,
    pub drag: DragState,
    pub tint: Tint,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32, friction: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        debug_assert!(mass > 0.0, "body mass must be positive");
        debug_assert!(friction > 0.0 && friction <= 1.0);
        Self {
            pos,
            vel,
            radius,
            mass,
            friction,
            drag: DragState::Idle,
            tint: Tint::Resting,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Circles overlap (touching does not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        distance(self.pos, other.pos) - self.radius - other.radius < 0.0
    }

    /// Point lies strictly inside the circle
    pub fn contains(&self, point: Vec2) -> bool {
        distance(point, self.pos) < self.radius
    }

    /// Negate each velocity axis whose edge touches or passes the canvas bounds.
    /// Each axis flips at most once per call.
    pub fn reflect_off_walls(&mut self, bounds: Vec2) {
        if self.pos.x + self.radius >= bounds.x || self.pos.x - self.radius <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.radius >= bounds.y || self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Advance one frame: position += velocity * friction
    pub fn integrate(&mut self) {
        self.pos += self.vel * self.friction;
    }

    /// Drag origin, if a gesture is in progress
    pub fn drag_origin(&self) -> Option<Vec2> {
        match self.drag {
            DragState::Dragging { origin } => Some(origin),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start a drag if the pointer landed inside this body.
    /// Returns true when a new drag began.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.is_dragging() || !self.contains(pointer) {
            return false;
        }
        self.drag = DragState::Dragging { origin: self.pos };
        self.tint = Tint::Selected;
        true
    }

    /// Finish the drag at `release`, adding the impulse to the velocity.
    /// Returns the velocity change, or `None` if no drag was in progress.
    pub fn release_drag(&mut self, release: Vec2, impulse_divisor: f32) -> Option<Vec2> {
        let origin = self.drag_origin()?;
        let delta = drag_impulse(origin, release, impulse_divisor) / self.mass;
        self.vel += delta;
        self.drag = DragState::Idle;
        self.tint = Tint::Launched;
        Some(delta)
    }
}

/// Force of a drag gesture: points from the release point back toward the
/// origin, with magnitude `drag distance / divisor`.
pub fn drag_impulse(origin: Vec2, release: Vec2, divisor: f32) -> Vec2 {
    let magnitude = distance(origin, release) / divisor;
    let angle = (origin.y - release.y).atan2(origin.x - release.x);
    Vec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32, radius: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, radius, 1.0, 0.6)
    }

    #[test]
    fn test_drag_impulse_points_back_to_origin() {
        let impulse = drag_impulse(Vec2::ZERO, Vec2::new(30.0, 0.0), 15.0);
        assert!((impulse.x - (-2.0)).abs() < 1e-5);
        assert!(impulse.y.abs() < 1e-5);
    }

    #[test]
    fn test_drag_gesture_adds_impulse() {
        let mut body = body_at(0.0, 0.0, 30.0);
        body.vel = Vec2::new(0.5, 1.0);

        assert!(body.begin_drag(Vec2::new(1.0, 1.0)));
        assert_eq!(body.drag_origin(), Some(Vec2::ZERO));
        assert_eq!(body.tint, Tint::Selected);

        let delta = body.release_drag(Vec2::new(30.0, 0.0), 15.0).unwrap();
        assert!((delta - Vec2::new(-2.0, 0.0)).length() < 1e-5);
        // Additive, not replacing
        assert!((body.vel - Vec2::new(-1.5, 1.0)).length() < 1e-5);
        assert_eq!(body.drag, DragState::Idle);
        assert_eq!(body.tint, Tint::Launched);
    }

    #[test]
    fn test_impulse_divided_by_mass() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ZERO, 10.0, 4.0, 1.0);
        body.begin_drag(Vec2::ZERO);
        let delta = body.release_drag(Vec2::new(0.0, 60.0), 15.0).unwrap();
        assert!((delta - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_single_impulse_per_gesture() {
        let mut body = body_at(100.0, 100.0, 30.0);
        body.begin_drag(Vec2::new(100.0, 100.0));
        assert!(body.release_drag(Vec2::new(130.0, 100.0), 15.0).is_some());
        assert!(body.release_drag(Vec2::new(130.0, 100.0), 15.0).is_none());
        assert!((body.vel.x - (-2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_begin_drag_needs_hit_and_idle() {
        let mut body = body_at(100.0, 100.0, 30.0);
        // On the rim is not inside
        assert!(!body.begin_drag(Vec2::new(130.0, 100.0)));
        assert!(body.begin_drag(Vec2::new(110.0, 100.0)));
        body.pos = Vec2::new(150.0, 150.0);
        // Already dragging: origin is not overwritten
        assert!(!body.begin_drag(Vec2::new(150.0, 150.0)));
        assert_eq!(body.drag_origin(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_wall_reflection_flips_once() {
        let bounds = Vec2::new(200.0, 200.0);

        // Past the right wall
        let mut body = body_at(195.0, 100.0, 10.0);
        body.vel = Vec2::new(3.0, 1.0);
        body.reflect_off_walls(bounds);
        assert_eq!(body.vel, Vec2::new(-3.0, 1.0));

        // Radius wider than the canvas touches both walls; still one flip
        let mut wide = body_at(100.0, 100.0, 150.0);
        wide.vel = Vec2::new(2.0, -2.0);
        wide.reflect_off_walls(bounds);
        assert_eq!(wide.vel, Vec2::new(-2.0, 2.0));

        // Only past the left wall
        let mut left = body_at(5.0, 100.0, 10.0);
        left.vel = Vec2::new(-3.0, 1.0);
        left.reflect_off_walls(bounds);
        assert_eq!(left.vel, Vec2::new(3.0, 1.0));

        // Only past the top wall
        let mut top = body_at(100.0, 4.0, 10.0);
        top.vel = Vec2::new(1.0, -2.0);
        top.reflect_off_walls(bounds);
        assert_eq!(top.vel, Vec2::new(1.0, 2.0));

        // Inside: untouched
        let mut inside = body_at(100.0, 100.0, 10.0);
        inside.vel = Vec2::new(2.0, 2.0);
        inside.reflect_off_walls(bounds);
        assert_eq!(inside.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_friction_scales_displacement_only() {
        let mut body = body_at(50.0, 50.0, 10.0);
        body.vel = Vec2::new(10.0, -5.0);
        body.integrate();
        body.integrate();
        assert!((body.pos - Vec2::new(62.0, 44.0)).length() < 1e-4);
        assert_eq!(body.vel, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = body_at(0.0, 0.0, 10.0);
        let touching = body_at(20.0, 0.0, 10.0);
        let overlapping = body_at(19.0, 0.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
    }
}
