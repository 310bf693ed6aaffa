//! Collision response between two circular bodies
//!
//! The 2D elastic collision is split into the normal axis, where the 1-D
//! equation applies, and the tangential axis, which is left alone. Velocities
//! are rotated so the normal lies along x, solved, then rotated back.

use glam::Vec2;

use super::body::Body;
use crate::rotate;

/// Resolve a collision between two overlapping bodies.
///
/// Both velocities are replaced with their post-collision values scaled by
/// `energy_loss`. Pairs that are already moving apart are left untouched, so
/// a pair that stays overlapped across frames is not resolved twice.
pub fn resolve_collision(a: &mut Body, b: &mut Body, energy_loss: f32) {
    let Some((va, vb)) = collide(a.pos, a.vel, a.mass(), b.pos, b.vel, b.mass()) else {
        return;
    };
    a.vel = va * energy_loss;
    b.vel = vb * energy_loss;
    log::trace!("collision resolved: {:?} / {:?}", a.vel, b.vel);
}

/// True when the bodies are approaching each other along their center line
#[inline]
pub fn approaching(pa: Vec2, va: Vec2, pb: Vec2, vb: Vec2) -> bool {
    (vb - va).dot(pb - pa) < 0.0
}

/// Angle that rotates the center line `pa -> pb` onto the x axis
#[inline]
pub fn collision_angle(pa: Vec2, pb: Vec2) -> f32 {
    let d = pb - pa;
    -d.y.atan2(d.x)
}

/// Post-collision velocities before energy loss, or `None` if separating
pub fn collide(
    pa: Vec2,
    va: Vec2,
    ma: f32,
    pb: Vec2,
    vb: Vec2,
    mb: f32,
) -> Option<(Vec2, Vec2)> {
    debug_assert!(ma > 0.0 && mb > 0.0, "collision masses must be positive");

    if !approaching(pa, va, pb, vb) {
        return None;
    }

    let angle = collision_angle(pa, pb);
    let u1 = rotate(va, angle);
    let u2 = rotate(vb, angle);

    let total = ma + mb;
    let v1 = Vec2::new((u1.x * (ma - mb) + 2.0 * mb * u2.x) / total, u1.y);
    let v2 = Vec2::new((u2.x * (mb - ma) + 2.0 * ma * u1.x) / total, u2.y);

    Some((rotate(v1, -angle), rotate(v2, -angle)))
}
