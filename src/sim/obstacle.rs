//! Obstacle variants and their wall sets
//!
//! Obstacles are bags of walls plus a drawable outline. Polygon obstacles
//! lean on the one-sided wall rule: a Boundary lists its vertices clockwise
//! (screen coordinates, y down) so every edge collides from the inside and
//! keeps the ball in; a Cutout lists them counter-clockwise so the same rule
//! repels the ball from the outside. Animated wraps any obstacle with a
//! time-driven placement and rebuilds its walls each tick.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use glam::{Affine2, Vec2, vec2};

use super::wall::Wall;

/// Time-driven placement for an animated obstacle.
///
/// Pure function of sim time, so replaying the same ticks always yields the
/// same geometry.
#[derive(Clone)]
pub struct Motion(Arc<dyn Fn(f32) -> Affine2 + Send + Sync>);

impl Motion {
    pub fn new(f: impl Fn(f32) -> Affine2 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Placement transform at sim time `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Affine2 {
        (self.0)(t)
    }
}

impl fmt::Debug for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Motion(..)")
    }
}

/// A course obstacle: a fixed set of walls, or another obstacle in motion
#[derive(Debug, Clone)]
pub enum Obstacle {
    /// Closed fence that keeps the ball inside. Vertices wind clockwise.
    Boundary { vertices: Vec<Vec2>, walls: Vec<Wall> },
    /// Solid island the ball bounces off. Vertices wind counter-clockwise.
    Cutout { vertices: Vec<Vec2>, walls: Vec<Wall> },
    /// Gate that lets the ball through one way and bounces it the other.
    OneWay { p: Vec2, q: Vec2, walls: [Wall; 3] },
    /// Axis-aligned box drawn externally as a sprite; the ball bounces off
    /// its four sides and corners.
    Prop {
        origin: Vec2,
        size: Vec2,
        walls: [Wall; 8],
    },
    /// Another obstacle placed by a time-driven transform.
    Animated { inner: Box<Obstacle>, motion: Motion },
}

impl Obstacle {
    /// Fence from clockwise vertices.
    pub fn boundary(vertices: Vec<Vec2>) -> Self {
        let walls = polygon_walls(&vertices);
        Obstacle::Boundary { vertices, walls }
    }

    /// Solid island from counter-clockwise vertices.
    pub fn cutout(vertices: Vec<Vec2>) -> Self {
        let walls = polygon_walls(&vertices);
        Obstacle::Cutout { vertices, walls }
    }

    /// Gate from `p` to `q`. A ball approaching from the clockwise side of
    /// p→q bounces; from the other side it passes through.
    pub fn one_way(p: Vec2, q: Vec2) -> Self {
        Obstacle::OneWay {
            p,
            q,
            walls: [Wall::point(p), Wall::line(p, q), Wall::point(q)],
        }
    }

    /// Solid box with its top-left corner at `origin`.
    pub fn prop(origin: Vec2, size: Vec2) -> Self {
        let (x, y) = (origin.x, origin.y);
        let (w, h) = (size.x, size.y);
        // Counter-clockwise like a cutout, corners interleaved.
        let walls = [
            Wall::line(vec2(x, y), vec2(x, y + h)),
            Wall::point(vec2(x, y + h)),
            Wall::line(vec2(x, y + h), vec2(x + w, y + h)),
            Wall::point(vec2(x + w, y + h)),
            Wall::line(vec2(x + w, y + h), vec2(x + w, y)),
            Wall::point(vec2(x + w, y)),
            Wall::line(vec2(x + w, y), vec2(x, y)),
            Wall::point(vec2(x, y)),
        ];
        Obstacle::Prop { origin, size, walls }
    }

    /// `inner` carried by a time-driven placement.
    pub fn animated(inner: Obstacle, motion: impl Fn(f32) -> Affine2 + Send + Sync + 'static) -> Self {
        Obstacle::Animated {
            inner: Box::new(inner),
            motion: Motion::new(motion),
        }
    }

    /// Walls to test this tick, in resolution order.
    ///
    /// Static obstacles hand out their prebuilt slice; Animated rebuilds its
    /// inner walls under the placement at `t`, re-deriving every boundary
    /// offset in the process.
    pub fn walls_at(&self, t: f32) -> Cow<'_, [Wall]> {
        match self {
            Obstacle::Boundary { walls, .. } | Obstacle::Cutout { walls, .. } => {
                Cow::Borrowed(walls.as_slice())
            }
            Obstacle::OneWay { walls, .. } => Cow::Borrowed(&walls[..]),
            Obstacle::Prop { walls, .. } => Cow::Borrowed(&walls[..]),
            Obstacle::Animated { inner, motion } => {
                let xform = motion.at(t);
                Cow::Owned(
                    inner
                        .walls_at(t)
                        .iter()
                        .map(|w| w.transformed(xform))
                        .collect(),
                )
            }
        }
    }

    /// Drawable geometry at sim time `t`, in course coordinates.
    pub fn outline_at(&self, t: f32) -> Outline {
        match self {
            Obstacle::Boundary { vertices, .. } => Outline::Fence(vertices.clone()),
            Obstacle::Cutout { vertices, .. } => Outline::Solid(vertices.clone()),
            Obstacle::OneWay { p, q, .. } => Outline::Gate(*p, *q),
            Obstacle::Prop { origin, size, .. } => Outline::Prop {
                origin: *origin,
                size: *size,
                placement: Affine2::IDENTITY,
            },
            Obstacle::Animated { inner, motion } => inner.outline_at(t).transformed(motion.at(t)),
        }
    }
}

/// One Line wall per edge plus one Point wall per vertex, so the ball clips
/// corners instead of slipping through them.
fn polygon_walls(vertices: &[Vec2]) -> Vec<Wall> {
    let n = vertices.len();
    let mut walls = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        walls.push(Wall::line(vertices[i], vertices[j]));
        walls.push(Wall::point(vertices[i]));
    }
    walls
}

/// Drawable geometry of an obstacle, handed to an external renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Closed loop to stroke and clip the playfield to.
    Fence(Vec<Vec2>),
    /// Closed loop to fill as solid ground.
    Solid(Vec<Vec2>),
    /// Gate segment; the blocking side lies along the left normal of p→q.
    Gate(Vec2, Vec2),
    /// Sprite quad and the placement to draw it under.
    Prop {
        origin: Vec2,
        size: Vec2,
        placement: Affine2,
    },
}

impl Outline {
    fn transformed(self, xform: Affine2) -> Outline {
        match self {
            Outline::Fence(vs) => {
                Outline::Fence(vs.into_iter().map(|v| xform.transform_point2(v)).collect())
            }
            Outline::Solid(vs) => {
                Outline::Solid(vs.into_iter().map(|v| xform.transform_point2(v)).collect())
            }
            Outline::Gate(p, q) => {
                Outline::Gate(xform.transform_point2(p), xform.transform_point2(q))
            }
            Outline::Prop {
                origin,
                size,
                placement,
            } => Outline::Prop {
                origin,
                size,
                placement: xform * placement,
            },
        }
    }
}
