#![forbid(unsafe_code)]

//! Geometric primitives in pixel space.
//!
//! Drop events arrive as client coordinates relative to the viewport, so
//! everything here is `f64` rather than integer cells. The origin is the
//! top-left corner; y grows downward.

use serde::{Deserialize, Serialize};

/// A point in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A rectangle for container bounds and hit testing.
///
/// Matches the shape reported by a bounding-client-rect query: origin plus
/// extent, all in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has no usable area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Edges are inclusive on the left/top and exclusive on the
    /// right/bottom.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Translate a client-space point into this rectangle's local space.
    #[inline]
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }

    /// Create a new rectangle inside the current one with the given margin.
    ///
    /// Width and height are floored at zero when the margin exceeds the
    /// extent.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: (self.width - margin.left - margin.right).max(0.0),
            height: (self.height - margin.top - margin.bottom).max(0.0),
        }
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Sides};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Point::new(2.0, 3.0)));
        assert!(rect.contains(Point::new(5.9, 7.9)));
        assert!(!rect.contains(Point::new(6.0, 3.0)));
        assert!(!rect.contains(Point::new(2.0, 8.0)));
    }

    #[test]
    fn rect_to_local_translates() {
        let rect = Rect::new(100.0, 50.0, 400.0, 300.0);
        let local = rect.to_local(Point::new(150.0, 75.0));
        assert_eq!(local, Point::new(50.0, 25.0));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0.0, 0.0, 100.0, 80.0);
        let inner = rect.inner(Sides::all(16.0));
        assert_eq!(inner, Rect::new(16.0, 16.0, 68.0, 48.0));
    }

    #[test]
    fn rect_inner_floors_at_zero() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.inner(Sides::all(16.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
        assert!(inner.is_empty());
    }

    #[test]
    fn sides_sums() {
        let sides = Sides {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        assert_eq!(sides.horizontal_sum(), 6.0);
        assert_eq!(sides.vertical_sum(), 4.0);
    }
}
