use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::point::Point;

/// An axis-aligned lattice rectangle, stored as inclusive bounds.
///
/// `area` counts lattice points, not unit cells: a rectangle spanning a
/// single point has area 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i64,
    pub right: i64,
    pub bottom: i64,
    pub top: i64,
}

impl Rect {
    /// Bounding rectangle of two corner points, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Rect {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            bottom: a.y.min(b.y),
            top: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.top - self.bottom
    }

    /// Inclusive lattice-point count: `(width + 1) * (height + 1)`.
    pub fn area(&self) -> i64 {
        (self.width() + 1) * (self.height() + 1)
    }

    /// The rectangle shrunk by one unit on every side, or `None` when no
    /// lattice point survives the shrink. Containment testing works on this
    /// strict interior to avoid edge-walking ambiguity.
    pub fn interior(&self) -> Option<Rect> {
        if self.width() < 2 || self.height() < 2 {
            return None;
        }
        Some(Rect {
            left: self.left + 1,
            right: self.right - 1,
            bottom: self.bottom + 1,
            top: self.top - 1,
        })
    }

    pub fn translate(&self, d: Point) -> Rect {
        Rect {
            left: self.left + d.x,
            right: self.right + d.x,
            bottom: self.bottom + d.y,
            top: self.top + d.y,
        }
    }

    /// Whether `p` lies on the rectangle's one-point-thick perimeter.
    pub fn on_perimeter(&self, p: Point) -> bool {
        let on_x = p.x == self.left || p.x == self.right;
        let on_y = p.y == self.bottom || p.y == self.top;
        let in_x = self.left <= p.x && p.x <= self.right;
        let in_y = self.bottom <= p.y && p.y <= self.top;
        (on_x && in_y) || (on_y && in_x)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}] x [{}..{}]",
            self.left, self.right, self.bottom, self.top
        )
    }
}
