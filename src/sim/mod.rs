//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State changes only through `HoleState::hit` and `step`
//! - Obstacle placement is a pure function of sim time
//! - Stable collision order (course order, wall order within each obstacle)
//! - No rendering or platform dependencies

pub mod obstacle;
pub mod state;
pub mod tick;
pub mod wall;

pub use obstacle::{Motion, Obstacle, Outline};
pub use state::{Cue, CueSink, HoleState};
pub use tick::step;
pub use wall::{Deflection, LineWall, PointWall, Wall};
