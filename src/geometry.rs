use serde::{Deserialize, Serialize};

/// Integer pixel coordinate in canvas-local space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate this point by `delta`
    pub fn offset(self, delta: Point) -> Point {
        offset_point(self, delta)
    }
}

/// Translate a point by a delta, e.g. from canvas-local to scrolled screen space.
pub fn offset_point(p: Point, delta: Point) -> Point {
    Point {
        x: p.x.saturating_add(delta.x),
        y: p.y.saturating_add(delta.y),
    }
}

/// Reorder two arbitrary corners into a (top-left, bottom-right) pair.
///
/// Total on all inputs and idempotent: feeding the result back in returns it unchanged.
pub fn normalize_rectangle(p0: Point, p1: Point) -> (Point, Point) {
    (
        Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
        Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
    )
}

/// A normalized pixel rectangle. `min` is inclusive, `max` is exclusive when used
/// as a crop region and the far outline edge when used as a shape bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub min: Point,
    pub max: Point,
}

impl PixelRect {
    pub fn from_corners(p0: Point, p1: Point) -> Self {
        let (min, max) = normalize_rectangle(p0, p1);
        Self { min, max }
    }

    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x)
    }

    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clamp to a `width` x `height` buffer. Returns `None` when nothing of the
    /// rectangle lies inside the buffer.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<PixelRect> {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let clamped = PixelRect {
            min: Point::new(self.min.x.clamp(0, w), self.min.y.clamp(0, h)),
            max: Point::new(self.max.x.clamp(0, w), self.max.y.clamp(0, h)),
        };
        (!clamped.is_empty()).then_some(clamped)
    }
}
