//! Per-hole simulation state and the cue seam
//!
//! `HoleState` is plain serializable data; everything that moves it lives in
//! `tick::step`. Audible feedback leaves the sim through `CueSink` so the
//! core never touches an audio device.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::course::Hole;

/// Audible cue emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// The player struck the ball.
    Putt,
    /// The ball bounced off a wall.
    Bounce,
    /// The ball dropped into the goal.
    Sink,
}

/// Receives cues from the simulation.
///
/// Fire-and-forget: a sink must never feed back into stepping, so replays
/// stay deterministic whatever the shell does with the cues.
pub trait CueSink {
    fn cue(&mut self, cue: Cue);
}

/// Collects cues for later playback or test assertions.
impl CueSink for Vec<Cue> {
    fn cue(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Discards all cues.
impl CueSink for () {
    fn cue(&mut self, _: Cue) {}
}

/// Live state of one hole being played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleState {
    /// Ball center, course coordinates.
    pub ball: Vec2,
    /// Ball velocity, course units per second.
    pub velocity: Vec2,
    /// Strokes taken so far.
    pub shots: u32,
    /// Set when the ball drops into the goal; the stepper then goes inert.
    pub done: bool,
    /// Sim time of the last committed tick, seconds since the hole loaded.
    pub(crate) t: f32,
}

impl HoleState {
    /// Fresh state with the ball resting on the tee.
    pub fn new(hole: &Hole) -> Self {
        Self {
            ball: hole.tee,
            velocity: Vec2::ZERO,
            shots: 0,
            done: false,
            t: 0.0,
        }
    }

    /// Strike the ball.
    ///
    /// Overrides any leftover motion, so shells normally wait for the ball
    /// to stop first. Hitting a finished hole is pointless but harmless.
    pub fn hit(&mut self, v: Vec2, cues: &mut impl CueSink) {
        self.velocity = v;
        self.shots += 1;
        cues.cue(Cue::Putt);
    }

    /// Sim time of the last committed tick.
    #[inline]
    pub fn time(&self) -> f32 {
        self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course;
    use glam::vec2;

    #[test]
    fn test_new_state_rests_on_tee() {
        let hole = course::course().remove(0);
        let state = HoleState::new(&hole);
        assert_eq!(state.ball, hole.tee);
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.shots, 0);
        assert!(!state.done);
        assert_eq!(state.time(), 0.0);
    }

    #[test]
    fn test_hit_counts_strokes_and_cues() {
        let hole = course::course().remove(0);
        let mut state = HoleState::new(&hole);
        let mut cues: Vec<Cue> = Vec::new();

        state.hit(vec2(5.0, -3.0), &mut cues);
        state.hit(vec2(-1.0, 0.0), &mut cues);

        assert_eq!(state.shots, 2);
        assert_eq!(state.velocity, vec2(-1.0, 0.0));
        assert_eq!(cues, vec![Cue::Putt, Cue::Putt]);
    }
}
