//! Wall primitives and the single-wall collision sweep
//!
//! The tricky part of the game: walls never test overlap at rest. Each wall
//! intersects the ball's whole motion for the tick and folds the unfinished
//! part of that motion into a bounce, so a fast ball cannot tunnel through.

use glam::{Affine2, Vec2};

use crate::consts::BALL_RADIUS;
use crate::geom::{circle_entry_param, dist_to_segment, line_cross_param, reflect, unit_normal};

/// Outcome of sweeping the ball's motion past one wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    /// Where the tick's motion now ends
    pub end: Vec2,
    /// Ball velocity after the wall has acted
    pub vel: Vec2,
    /// Whether the wall was struck
    pub hit: bool,
}

impl Deflection {
    /// The wall was not in the way; motion passes through unchanged.
    pub fn pass(end: Vec2, vel: Vec2) -> Self {
        Self {
            end,
            vel,
            hit: false,
        }
    }
}

/// One-sided wall segment from `p` to `q`.
///
/// The ball's center collides with the *boundary line*: the segment shifted
/// one ball radius along the left normal of p→q, cached at construction.
/// Crossing from the other side passes through, which is what makes one-way
/// gates and polygon winding conventions work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineWall {
    pub p: Vec2,
    pub q: Vec2,
    w0: Vec2,
    w1: Vec2,
}

impl LineWall {
    pub fn new(p: Vec2, q: Vec2) -> Self {
        // Zero-length walls get a zero offset and a degenerate boundary;
        // the parallel check below then rejects every path.
        let n = BALL_RADIUS * unit_normal(q - p);
        Self {
            p,
            q,
            w0: p + n,
            w1: q + n,
        }
    }

    /// The offset boundary line the ball's center actually collides with.
    #[inline]
    pub fn boundary(&self) -> (Vec2, Vec2) {
        (self.w0, self.w1)
    }

    fn collide(&self, p0: Vec2, p1: Vec2, v: Vec2) -> Deflection {
        let dp = p1 - p0;
        let dw = self.w1 - self.w0;

        // Parallel motion, or approach from the pass-through side.
        if dp.perp_dot(dw) <= 0.0 {
            return Deflection::pass(p1, v);
        }

        // Where along the motion the boundary line is crossed.
        let t = line_cross_param(p0, p1, self.w0, self.w1);
        if !(0.0..=1.0).contains(&t) {
            return Deflection::pass(p1, v);
        }

        // The motion may cross the carrying line beyond the wall's ends.
        let u = line_cross_param(self.w0, self.w1, p0, p1);
        if !(0.0..=1.0).contains(&u) {
            return Deflection::pass(p1, v);
        }

        let contact = p0 + t * dp;
        let n = unit_normal(dw);
        Deflection {
            end: contact + reflect(p1 - contact, n),
            vel: reflect(v, n),
            hit: true,
        }
    }

    fn transformed(&self, xform: Affine2) -> Self {
        // Rebuild from the moved endpoints; under rotation the cached
        // boundary offset would point the wrong way.
        Self::new(
            xform.transform_point2(self.p),
            xform.transform_point2(self.q),
        )
    }
}

/// Point obstruction: a polygon corner or gate post the ball can clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointWall {
    pub p: Vec2,
}

impl PointWall {
    pub fn new(p: Vec2) -> Self {
        Self { p }
    }

    fn collide(&self, p0: Vec2, p1: Vec2, v: Vec2) -> Deflection {
        if dist_to_segment(p0, p1, self.p) > BALL_RADIUS {
            return Deflection::pass(p1, v);
        }
        let t = circle_entry_param(p0, p1, self.p, BALL_RADIUS);
        let contact = p0 + t * (p1 - p0);
        // Radial contact normal; zero-safe if the center is dead on the point.
        let n = (contact - self.p).normalize_or_zero();
        Deflection {
            end: contact + reflect(p1 - contact, n),
            vel: reflect(v, n),
            hit: true,
        }
    }

    fn transformed(&self, xform: Affine2) -> Self {
        Self::new(xform.transform_point2(self.p))
    }
}

/// Collision surface variants that make up every obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wall {
    Line(LineWall),
    Point(PointWall),
}

impl Wall {
    /// One-sided segment wall; bounces a ball approaching from the
    /// clockwise side of p→q.
    pub fn line(p: Vec2, q: Vec2) -> Self {
        Wall::Line(LineWall::new(p, q))
    }

    /// Point wall at `p`.
    pub fn point(p: Vec2) -> Self {
        Wall::Point(PointWall::new(p))
    }

    /// Sweep the ball's motion p0→p1 past this wall.
    ///
    /// `v` is the dynamics velocity, passed separately because an earlier
    /// wall in the same tick may already have bent it away from p1 - p0.
    pub fn collide(&self, p0: Vec2, p1: Vec2, v: Vec2) -> Deflection {
        match self {
            Wall::Line(w) => w.collide(p0, p1, v),
            Wall::Point(w) => w.collide(p0, p1, v),
        }
    }

    /// This wall moved by `xform`.
    pub fn transformed(&self, xform: Affine2) -> Wall {
        match self {
            Wall::Line(w) => Wall::Line(w.transformed(xform)),
            Wall::Point(w) => Wall::Point(w.transformed(xform)),
        }
    }
}
