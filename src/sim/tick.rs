//! Frame-step simulation tick and pointer handling
//!
//! One call to `tick` is one animation frame. Bodies update in array order and
//! each body's collision scan sees velocities already changed earlier in the
//! same frame, so trajectories depend on that order.

use glam::Vec2;

use super::body::Body;
use super::collision::resolve_collision;
use super::state::{CarromState, Physics};

/// Borrow two distinct bodies mutably
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Update one body: collide with every peer, bounce off walls, integrate
pub fn update_body(bodies: &mut [Body], index: usize, bounds: Vec2, physics: &Physics) {
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let (body, peer) = pair_mut(bodies, index, other);
        if body.overlaps(peer) {
            resolve_collision(body, peer, physics.energy_loss);
        }
    }

    let body = &mut bodies[index];
    body.reflect_off_walls(bounds);
    body.integrate();
}

/// Advance the board by one frame
pub fn tick(state: &mut CarromState) {
    for index in 0..state.bodies.len() {
        update_body(&mut state.bodies, index, state.bounds, &state.physics);
    }
    state.frame += 1;
}

/// Pointer moved (updates trajectory previews)
pub fn pointer_move(state: &mut CarromState, pointer: Vec2) {
    state.pointer = pointer;
}

/// Pointer pressed: every body under the pointer starts a drag
pub fn pointer_down(state: &mut CarromState, pointer: Vec2) -> usize {
    state.pointer = pointer;
    let mut started = 0;
    for (i, body) in state.bodies.iter_mut().enumerate() {
        if body.begin_drag(pointer) {
            log::debug!("Body {} selected at {:?}", i, body.pos);
            started += 1;
        }
    }
    started
}

/// Pointer released anywhere: every dragging body gets its impulse
pub fn pointer_up(state: &mut CarromState, pointer: Vec2) -> usize {
    state.pointer = pointer;
    let divisor = state.physics.impulse_divisor;
    let mut launched = 0;
    for (i, body) in state.bodies.iter_mut().enumerate() {
        if let Some(delta) = body.release_drag(pointer, divisor) {
            log::debug!("Body {} launched with {:?}", i, delta);
            launched += 1;
        }
    }
    launched
}
