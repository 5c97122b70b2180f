//! Planar geometry primitives shared by wall collision and the stepper
//!
//! Everything here is exact parametric geometry on glam vectors: no epsilon
//! fudging, no iterative solves. Degenerate inputs (zero-length segments,
//! zero vectors) get defined fallbacks rather than panics.

use glam::{Affine2, Vec2};

/// Shortest distance from `q` to the segment from `p0` to `p1`.
///
/// Projects `q` onto the carrying line and clamps the parameter to the
/// segment. A degenerate segment (p0 == p1) degrades to point distance.
pub fn dist_to_segment(p0: Vec2, p1: Vec2, q: Vec2) -> f32 {
    let d = p1 - p0;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return q.distance(p0);
    }
    let t = ((q - p0).dot(d) / len_sq).clamp(0.0, 1.0);
    q.distance(p0 + t * d)
}

/// Parameter `t` such that `p0 + t * (p1 - p0)` lies on the infinite line
/// through `q0` and `q1`.
///
/// Callers must rule out parallel directions first (perp-dot of the two
/// directions nonzero); walls do this as their pass-through check.
pub fn line_cross_param(p0: Vec2, p1: Vec2, q0: Vec2, q1: Vec2) -> f32 {
    let r = p1 - p0;
    let s = q1 - q0;
    debug_assert!(r.perp_dot(s) != 0.0, "parallel lines never cross");
    (q0 - p0).perp_dot(s) / r.perp_dot(s)
}

/// Parameter of the first point where the path from `p0` to `p1` enters the
/// circle around `center`.
///
/// Smaller root of the quadratic |p0 + t*d - center|^2 = radius^2. Callers
/// must have checked that the path comes within `radius` and that p0 != p1.
pub fn circle_entry_param(p0: Vec2, p1: Vec2, center: Vec2, radius: f32) -> f32 {
    let d = p1 - p0;
    let f = p0 - center;
    let a = d.dot(d);
    let b = f.dot(d);
    let c = f.dot(f) - radius * radius;
    debug_assert!(a > 0.0, "degenerate path has no entry point");
    // At exact tangency the discriminant can land an ulp below zero even
    // though the caller's distance check passed; clamp instead of NaN.
    let disc = (b * b - a * c).max(0.0);
    (-b - disc.sqrt()) / a
}

/// Left unit normal of `d` (90 degrees counter-clockwise), zero for a zero
/// vector.
#[inline]
pub fn unit_normal(d: Vec2) -> Vec2 {
    d.perp().normalize_or_zero()
}

/// Reflect `v` across a surface with unit normal `n`.
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - 2.0 * v.dot(n) * n
}

/// Rotation by `angle` radians about `pivot`.
#[inline]
pub fn rotate_about(angle: f32, pivot: Vec2) -> Affine2 {
    Affine2::from_translation(pivot) * Affine2::from_angle(angle) * Affine2::from_translation(-pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_dist_to_segment_interior() {
        // Closest point is inside the segment
        let d = dist_to_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(5.0, 3.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_dist_to_segment_clamps_to_endpoint() {
        // Projection falls past p1, so the endpoint is closest
        let d = dist_to_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(13.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_cross_param_perpendicular() {
        // Vertical path crossing a horizontal line at its midpoint
        let t = line_cross_param(vec2(5.0, 10.0), vec2(5.0, -10.0), vec2(0.0, 0.0), vec2(10.0, 0.0));
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_circle_entry_param_head_on() {
        // Straight shot at a unit circle: entry at distance 9 of 10
        let t = circle_entry_param(vec2(-10.0, 0.0), vec2(0.0, 0.0), vec2(0.0, 0.0), 1.0);
        assert!((t - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_unit_normal_is_left_and_unit() {
        let n = unit_normal(vec2(3.0, 0.0));
        assert!((n - vec2(0.0, 1.0)).length() < 1e-6);
        assert_eq!(unit_normal(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        let v = reflect(vec2(100.0, 25.0), vec2(-1.0, 0.0));
        assert!((v - vec2(-100.0, 25.0)).length() < 1e-3);
    }

    #[test]
    fn test_rotate_about_pivot_fixed() {
        let pivot = vec2(7.0, -3.0);
        let m = rotate_about(FRAC_PI_2, pivot);
        assert!((m.transform_point2(pivot) - pivot).length() < 1e-5);
        // A point one unit right of the pivot swings one unit up
        let moved = m.transform_point2(pivot + vec2(1.0, 0.0));
        assert!((moved - (pivot + vec2(0.0, 1.0))).length() < 1e-5);
    }

    #[test]
    fn test_rotate_about_composes_with_translation() {
        // Placement used by the course's animated cars: rotate then slide
        let m = Affine2::from_translation(vec2(0.0, 30.0)) * rotate_about(PI, vec2(10.0, 10.0));
        let moved = m.transform_point2(vec2(12.0, 10.0));
        assert!((moved - vec2(8.0, 40.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn dist_to_segment_never_negative(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            qx in -100.0f32..100.0, qy in -100.0f32..100.0,
        ) {
            let d = dist_to_segment(vec2(ax, ay), vec2(bx, by), vec2(qx, qy));
            prop_assert!(d >= 0.0);
            prop_assert!(d.is_finite());
        }

        #[test]
        fn dist_to_degenerate_segment_is_point_distance(
            px in -100.0f32..100.0, py in -100.0f32..100.0,
            qx in -100.0f32..100.0, qy in -100.0f32..100.0,
        ) {
            let p = vec2(px, py);
            let q = vec2(qx, qy);
            let d = dist_to_segment(p, p, q);
            prop_assert!((d - q.distance(p)).abs() <= 1e-4 * (1.0 + q.distance(p)));
        }

        #[test]
        fn reflect_preserves_speed(
            vx in -200.0f32..200.0, vy in -200.0f32..200.0,
            angle in 0.0f32..TAU,
        ) {
            let v = vec2(vx, vy);
            let n = Vec2::from_angle(angle);
            let r = reflect(v, n);
            prop_assert!((r.length() - v.length()).abs() <= 1e-3 * (1.0 + v.length()));
        }

        #[test]
        fn reflect_twice_is_identity(
            vx in -200.0f32..200.0, vy in -200.0f32..200.0,
            angle in 0.0f32..TAU,
        ) {
            let v = vec2(vx, vy);
            let n = Vec2::from_angle(angle);
            let rr = reflect(reflect(v, n), n);
            prop_assert!((rr - v).length() <= 1e-3 * (1.0 + v.length()));
        }
    }
}
