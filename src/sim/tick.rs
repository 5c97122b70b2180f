//! The per-tick stepper
//!
//! Advances one hole by one tick: integrate gravity and friction, sweep the
//! ball's motion past every wall, then check the goal. Collisions resolve as
//! a sequential fold in course order, each wall seeing the motion the
//! previous walls left behind, so a single tick can bounce several times
//! (corners) without the ball tunneling out.

use glam::Vec2;

use super::state::{Cue, CueSink, HoleState};
use crate::course::Hole;
use crate::geom::dist_to_segment;

/// Advance the hole to sim time `now` (seconds since the hole loaded).
///
/// `now` also positions animated obstacles, so wall geometry and ball motion
/// stay in lockstep. Calls with `now` at or before the last committed time
/// are no-ops, as is stepping a finished hole.
pub fn step(state: &mut HoleState, hole: &Hole, now: f32, cues: &mut impl CueSink) {
    if state.done {
        return;
    }
    let dt = now - state.t;
    if dt <= 0.0 {
        return;
    }

    let p0 = state.ball;
    let surface = (hole.surface)(p0);

    let mut v = state.velocity + dt * surface.gravity;

    // Friction as a straight speed decay, clamped so a resting ball stays
    // exactly at zero (which also lets it ignore gentle slopes).
    let speed = (v.length() - surface.friction * dt).max(0.0);
    v = speed * v.normalize_or_zero();

    let mut p1 = p0 + dt * v;

    if p1 != p0 {
        // Resolution order is the course order; holes put their outer
        // boundary last so an earlier deflection cannot sneak the ball past
        // it within the same tick.
        for obstacle in &hole.obstacles {
            for wall in obstacle.walls_at(now).iter() {
                let d = wall.collide(p0, p1, v);
                p1 = d.end;
                v = d.vel;
                if d.hit {
                    cues.cue(Cue::Bounce);
                }
            }
        }

        // The goal captures on swept proximity, whatever the speed.
        if dist_to_segment(p0, p1, hole.goal) < hole.goal_radius {
            state.ball = hole.goal;
            state.velocity = Vec2::ZERO;
            state.t = now;
            state.done = true;
            cues.cue(Cue::Sink);
            log::debug!("sank {} in {} shots", hole.name, state.shots);
            return;
        }
    }

    state.ball = p1;
    state.velocity = v;
    state.t = now;
}
