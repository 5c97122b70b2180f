//! Surface fields, holes, and the bundled course
//!
//! A hole is pure data: tee, goal, obstacles in collision order, and a
//! surface field mapping ball position to local friction and gravity. The
//! sim only reads holes, so one `Hole` can back any number of replays.

use std::fmt;
use std::sync::Arc;

use glam::{Affine2, Vec2, vec2};

use crate::consts::DEFAULT_FRICTION;
use crate::geom::rotate_about;
use crate::sim::Obstacle;

/// Local playing surface under the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Speed shed per second while the ball rolls.
    pub friction: f32,
    /// Acceleration applied to the ball, course units per second squared.
    pub gravity: Vec2,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            gravity: Vec2::ZERO,
        }
    }
}

/// Friction and gravity as a function of ball position.
///
/// Arc'd so holes stay cloneable and shareable across threads; the sim calls
/// it once per tick. Outputs are taken as given, course authors own them.
pub type SurfaceFn = Arc<dyn Fn(Vec2) -> Surface + Send + Sync>;

/// Uniform default surface: standard friction, no gravity.
pub fn flat_surface() -> SurfaceFn {
    Arc::new(|_| Surface::default())
}

/// One hole of a course
#[derive(Clone)]
pub struct Hole {
    pub name: String,
    /// Where the ball starts.
    pub tee: Vec2,
    /// Center of the cup.
    pub goal: Vec2,
    /// Capture distance around the goal.
    pub goal_radius: f32,
    /// Obstacles in collision-resolution order; the outer boundary goes
    /// last (see `sim::tick`).
    pub obstacles: Vec<Obstacle>,
    /// Surface field sampled at the ball position each tick.
    pub surface: SurfaceFn,
}

impl fmt::Debug for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hole")
            .field("name", &self.name)
            .field("tee", &self.tee)
            .field("goal", &self.goal)
            .field("goal_radius", &self.goal_radius)
            .field("obstacles", &self.obstacles)
            .field("surface", &"SurfaceFn(..)")
            .finish()
    }
}

/// The bundled three-hole course.
///
/// Hole 1 is an open fenced green, hole 2 a downtown grid with two cars
/// circling the cross street, hole 3 a one-way construction maze.
pub fn course() -> Vec<Hole> {
    let holes = vec![downtown(), franklin_street(), construction_zone()];
    log::info!("course ready: {} holes", holes.len());
    holes
}

fn downtown() -> Hole {
    Hole {
        name: "Downtown".to_string(),
        tee: vec2(33.0, 63.0),
        goal: vec2(68.0, 44.0),
        goal_radius: 5.0,
        obstacles: vec![Obstacle::boundary(vec![
            vec2(10.0, 20.0),
            vec2(100.0, 20.0),
            vec2(100.0, 80.0),
            vec2(10.0, 80.0),
        ])],
        surface: flat_surface(),
    }
}

fn franklin_street() -> Hole {
    Hole {
        name: "Franklin Street".to_string(),
        tee: vec2(150.0, 44.0),
        goal: vec2(68.0, 44.0),
        goal_radius: 5.0,
        obstacles: vec![
            Obstacle::cutout(vec![
                vec2(52.0, 36.0),
                vec2(74.0, 36.0),
                vec2(74.0, 15.0),
                vec2(52.0, 15.0),
            ]),
            Obstacle::cutout(vec![
                vec2(52.0, 75.0),
                vec2(74.0, 75.0),
                vec2(74.0, 52.0),
                vec2(52.0, 52.0),
            ]),
            Obstacle::cutout(vec![
                vec2(82.0, 36.0),
                vec2(101.0, 36.0),
                vec2(101.0, 15.0),
                vec2(82.0, 15.0),
            ]),
            Obstacle::cutout(vec![
                vec2(82.0, 75.0),
                vec2(101.0, 75.0),
                vec2(101.0, 52.0),
                vec2(82.0, 52.0),
            ]),
            Obstacle::cutout(vec![
                vec2(109.0, 36.0),
                vec2(135.0, 36.0),
                vec2(135.0, 15.0),
                vec2(109.0, 15.0),
            ]),
            Obstacle::cutout(vec![
                vec2(109.0, 75.0),
                vec2(135.0, 75.0),
                vec2(135.0, 52.0),
                vec2(109.0, 52.0),
            ]),
            // Two cars crossing the intersection, a quarter turn on their
            // sprites and a sinusoid along the street.
            Obstacle::animated(
                Obstacle::prop(vec2(101.0, 43.0), vec2(8.0, 4.0)),
                |t| {
                    Affine2::from_translation(vec2(0.0, 30.0 * t.cos()))
                        * rotate_about(std::f32::consts::FRAC_PI_2, vec2(105.0, 45.0))
                },
            ),
            Obstacle::animated(
                Obstacle::prop(vec2(74.0, 43.0), vec2(8.0, 4.0)),
                |t| {
                    Affine2::from_translation(vec2(0.0, 30.0 * t.sin()))
                        * rotate_about(std::f32::consts::FRAC_PI_2, vec2(78.0, 45.0))
                },
            ),
            // Outer boundary last to minimize the chance of an escape
            // glitch when several walls resolve in one tick.
            Obstacle::boundary(vec![
                vec2(0.0, 0.0),
                vec2(160.0, 0.0),
                vec2(160.0, 90.0),
                vec2(0.0, 90.0),
            ]),
        ],
        surface: flat_surface(),
    }
}

fn construction_zone() -> Hole {
    Hole {
        name: "Construction Zone".to_string(),
        tee: vec2(200.0, 47.0),
        goal: vec2(210.0, 92.0),
        goal_radius: 5.0,
        obstacles: vec![
            Obstacle::one_way(vec2(139.0, 40.0), vec2(139.0, 56.0)),
            Obstacle::one_way(vec2(165.0, 57.0), vec2(153.0, 57.0)),
            Obstacle::one_way(vec2(153.0, 69.0), vec2(165.0, 69.0)),
            Obstacle::one_way(vec2(165.0, 87.0), vec2(153.0, 87.0)),
            Obstacle::one_way(vec2(152.0, 105.0), vec2(152.0, 121.0)),
            Obstacle::one_way(vec2(152.0, 166.0), vec2(152.0, 182.0)),
            Obstacle::one_way(vec2(153.0, 198.0), vec2(165.0, 198.0)),
            Obstacle::one_way(vec2(215.0, 87.0), vec2(198.0, 87.0)),
            Obstacle::one_way(vec2(217.0, 126.0), vec2(209.0, 110.0)),
            Obstacle::one_way(vec2(245.0, 182.0), vec2(237.0, 166.0)),
            Obstacle::cutout(vec![
                vec2(138.0, 56.0),
                vec2(138.0, 70.0),
                vec2(153.0, 70.0),
                vec2(153.0, 56.0),
            ]),
            Obstacle::cutout(vec![
                vec2(165.0, 56.0),
                vec2(165.0, 70.0),
                vec2(210.0, 70.0),
                vec2(210.0, 56.0),
            ]),
            Obstacle::cutout(vec![
                vec2(138.0, 86.0),
                vec2(138.0, 105.0),
                vec2(153.0, 105.0),
                vec2(153.0, 86.0),
            ]),
            Obstacle::cutout(vec![
                vec2(165.0, 86.0),
                vec2(165.0, 110.0),
                vec2(210.0, 110.0),
                vec2(198.0, 86.0),
            ]),
            Obstacle::cutout(vec![
                vec2(138.0, 121.0),
                vec2(138.0, 166.0),
                vec2(153.0, 166.0),
                vec2(153.0, 121.0),
            ]),
            Obstacle::cutout(vec![
                vec2(165.0, 126.0),
                vec2(165.0, 166.0),
                vec2(238.0, 166.0),
                vec2(218.0, 126.0),
            ]),
            Obstacle::cutout(vec![
                vec2(138.0, 182.0),
                vec2(138.0, 199.0),
                vec2(153.0, 199.0),
                vec2(153.0, 182.0),
            ]),
            Obstacle::cutout(vec![
                vec2(165.0, 182.0),
                vec2(165.0, 200.0),
                vec2(175.0, 215.0),
                vec2(175.0, 230.0),
                vec2(270.0, 230.0),
                vec2(246.0, 182.0),
            ]),
            Obstacle::cutout(vec![
                vec2(105.0, 182.0),
                vec2(105.0, 245.0),
                vec2(160.0, 245.0),
                vec2(153.0, 230.0),
                vec2(153.0, 211.0),
                vec2(132.0, 211.0),
                vec2(126.0, 204.0),
                vec2(126.0, 182.0),
            ]),
            Obstacle::boundary(vec![
                vec2(100.0, 52.0),
                vec2(110.0, 40.0),
                vec2(215.0, 40.0),
                vec2(215.0, 85.0),
                vec2(295.0, 240.0),
                vec2(290.0, 250.0),
                vec2(100.0, 250.0),
            ]),
        ],
        surface: flat_surface(),
    }
}
