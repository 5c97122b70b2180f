//! putt - a scrolling mini-golf simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, obstacles, the tick stepper)
//! - `geom`: Planar geometry primitives the sim is built on
//! - `course`: Surface fields, holes, and the bundled three-hole course
//! - `view`: Scrolling viewport math for renderers
//! - `scorecard`: Round scoring and best-round ranking

pub mod course;
pub mod geom;
pub mod scorecard;
pub mod sim;
pub mod view;

pub use scorecard::{BestRounds, Scorecard};
pub use view::Viewport;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for frame-driven shells (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball radius; walls keep this clearance from the ball's center
    pub const BALL_RADIUS: f32 = 4.0;
    /// Rolling friction where course data says nothing else
    pub const DEFAULT_FRICTION: f32 = 1.0;

    /// Viewport dimensions, course units
    pub const VIEW_WIDTH: f32 = 160.0;
    pub const VIEW_HEIGHT: f32 = 90.0;
}
