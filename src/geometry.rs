//! Axis-aligned geometry shared by the simulation.
//!
//! Coordinates are playfield units with the origin in the top-left corner and
//! `y` growing downward.

/// Bound `value` to the inclusive range `[min, max]`.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// An axis-aligned rectangle given by its two corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Rect { x0, y0, x1, y1 }
    }

    /// Same rectangle shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    /// Inclusive overlap test: touching edges count as a collision.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 >= other.x0 && self.x0 <= other.x1 && self.y1 >= other.y0 && self.y0 <= other.y1
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Twice the vertical center, kept in integers so odd heights stay exact.
    pub fn center_y2(&self) -> i32 {
        self.y0 + self.y1
    }
}

/// Collision test between the ball's box and a paddle's box.
pub fn collides(ball: &Rect, paddle: &Rect) -> bool {
    ball.overlaps(paddle)
}
