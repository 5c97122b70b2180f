//! Scrolling viewport math for renderers
//!
//! Courses are bigger than the screen. The viewport is a fixed-size window
//! in course coordinates; shells update it from the ball position each frame
//! and translate their drawing by `offset`. Pure data, no drawing here.

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_RADIUS, VIEW_HEIGHT, VIEW_WIDTH};

/// A VIEW_WIDTH x VIEW_HEIGHT window onto the course
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Course x of the window's left edge.
    pub left: f32,
    /// Course y of the window's top edge.
    pub top: f32,
}

impl Viewport {
    /// Window anchored at the course origin.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + VIEW_WIDTH
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + VIEW_HEIGHT
    }

    /// Scroll just enough to keep the ball in view.
    ///
    /// The window stays put until the ball pushes within one radius of an
    /// edge, then slides along with it. No scrolling on the way back until
    /// the opposite edge is reached.
    pub fn follow(&mut self, ball: Vec2) {
        if ball.x - BALL_RADIUS < self.left {
            self.left = ball.x - BALL_RADIUS;
        } else if ball.x + BALL_RADIUS > self.right() {
            self.left = ball.x + BALL_RADIUS - VIEW_WIDTH;
        }

        if ball.y - BALL_RADIUS < self.top {
            self.top = ball.y - BALL_RADIUS;
        } else if ball.y + BALL_RADIUS > self.bottom() {
            self.top = ball.y + BALL_RADIUS - VIEW_HEIGHT;
        }
    }

    /// First-person mode: the ball pinned to the window center.
    pub fn center_on(&mut self, ball: Vec2) {
        self.left = ball.x - VIEW_WIDTH / 2.0;
        self.top = ball.y - VIEW_HEIGHT / 2.0;
    }

    /// Translation from course coordinates into window coordinates.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        vec2(-self.left, -self.top)
    }

    /// Whether `p` falls inside the window. Culling test for renderers.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_holds_still_for_interior_ball() {
        let mut view = Viewport::new();
        view.follow(vec2(80.0, 45.0));
        assert_eq!(view, Viewport::new());
    }

    #[test]
    fn test_follow_pushes_at_edges() {
        let mut view = Viewport::new();

        // One radius past the right edge drags the window along.
        view.follow(vec2(VIEW_WIDTH, 45.0));
        assert_eq!(view.right(), VIEW_WIDTH + BALL_RADIUS);

        // Rolling back inside does not scroll...
        let snapshot = view;
        view.follow(vec2(VIEW_WIDTH - 20.0, 45.0));
        assert_eq!(view, snapshot);

        // ...until the ball reaches the left edge.
        view.follow(vec2(snapshot.left, 45.0));
        assert_eq!(view.left, snapshot.left - BALL_RADIUS);
    }

    #[test]
    fn test_follow_scrolls_both_axes() {
        let mut view = Viewport::new();
        view.follow(vec2(200.0, 200.0));
        assert_eq!(view.right(), 200.0 + BALL_RADIUS);
        assert_eq!(view.bottom(), 200.0 + BALL_RADIUS);
    }

    #[test]
    fn test_center_on_ball() {
        let mut view = Viewport::new();
        view.center_on(vec2(100.0, 70.0));
        assert_eq!(view.left, 100.0 - VIEW_WIDTH / 2.0);
        assert_eq!(view.top, 70.0 - VIEW_HEIGHT / 2.0);
        assert!(view.contains(vec2(100.0, 70.0)));
    }

    #[test]
    fn test_offset_moves_course_into_window() {
        let view = Viewport {
            left: 30.0,
            top: 10.0,
        };
        assert_eq!(view.offset(), vec2(-30.0, -10.0));
        // The window's top-left corner lands on the window origin.
        assert_eq!(vec2(30.0, 10.0) + view.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let view = Viewport::new();
        assert!(view.contains(Vec2::ZERO));
        assert!(view.contains(vec2(VIEW_WIDTH, VIEW_HEIGHT)));
        assert!(!view.contains(vec2(VIEW_WIDTH + 0.1, 45.0)));
        assert!(!view.contains(vec2(80.0, -0.1)));
    }
}
