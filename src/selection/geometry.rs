//! Points and axis-aligned rectangles in content coordinates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scroll position of the grid container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Converts a pointer position relative to the container's visible area
    /// into content coordinates.
    pub fn to_content(&self, viewport: Point) -> Point {
        Point::new(viewport.x + self.left, viewport.y + self.top)
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanned by two opposite corners, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap test where shared edges count as touching.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.left() > other.right()
            || self.right() < other.left()
            || self.top() > other.bottom()
            || self.bottom() < other.top())
    }

    /// Same rectangle shifted by `-scroll`, for drawing an overlay in
    /// viewport space.
    pub fn to_viewport(&self, scroll: ScrollOffset) -> Rect {
        Rect::new(self.x - scroll.left, self.y - scroll.top, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_any_order_give_same_rect() {
        let a = Point::new(30.0, 5.0);
        let b = Point::new(10.0, 25.0);
        assert_eq!(Rect::from_corners(a, b), Rect::new(10.0, 5.0, 20.0, 20.0));
        assert_eq!(Rect::from_corners(b, a), Rect::from_corners(a, b));
    }

    #[test]
    fn intersection_includes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 0.0, 0.0)));
    }

    #[test]
    fn scroll_round_trip() {
        let scroll = ScrollOffset::new(0.0, 400.0);
        let content = scroll.to_content(Point::new(12.0, 30.0));
        assert_eq!(content, Point::new(12.0, 430.0));
        let overlay = Rect::new(12.0, 430.0, 4.0, 4.0).to_viewport(scroll);
        assert_eq!(overlay, Rect::new(12.0, 30.0, 4.0, 4.0));
    }
}
