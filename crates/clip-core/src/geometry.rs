// File: crates/clip-core/src/geometry.rs
// Summary: Integer geometry for the scene: points, segments and the clip rectangle.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A polygon vertex in scene coordinates (origin bottom-left, y up).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A directed line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The same segment walked in the opposite direction.
    pub const fn reversed(&self) -> Self {
        Self { start: self.end, end: self.start }
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl From<((i32, i32), (i32, i32))> for Segment {
    fn from((a, b): ((i32, i32), (i32, i32))) -> Self {
        Self::new(a.into(), b.into())
    }
}

/// Axis-aligned clip window. Bounds are inclusive.
/// Contract: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClipBounds", into = "ClipBounds")]
pub struct ClipRectangle {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

/// Plain serialized form of a [`ClipRectangle`]; validated on conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipBounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl ClipRectangle {
    /// Build a rectangle, rejecting inverted bounds.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self, ConfigError> {
        if x_min > x_max || y_min > y_max {
            return Err(ConfigError::InvertedClipBounds { x_min, y_min, x_max, y_max });
        }
        Ok(Self { x_min, y_min, x_max, y_max })
    }

    /// Const constructor for known-good bounds (crate constants only).
    pub(crate) const fn from_bounds_unchecked(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    pub const fn x_min(&self) -> i32 { self.x_min }
    pub const fn y_min(&self) -> i32 { self.y_min }
    pub const fn x_max(&self) -> i32 { self.x_max }
    pub const fn y_max(&self) -> i32 { self.y_max }

    pub const fn width(&self) -> i32 { self.x_max - self.x_min }
    pub const fn height(&self) -> i32 { self.y_max - self.y_min }

    /// Boundary-inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Outline corners, counter-clockwise from the bottom-left.
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }
}

impl Default for ClipRectangle {
    fn default() -> Self {
        crate::types::DEFAULT_CLIP
    }
}

impl TryFrom<ClipBounds> for ClipRectangle {
    type Error = ConfigError;

    fn try_from(b: ClipBounds) -> Result<Self, Self::Error> {
        Self::new(b.x_min, b.y_min, b.x_max, b.y_max)
    }
}

impl From<ClipRectangle> for ClipBounds {
    fn from(r: ClipRectangle) -> Self {
        Self { x_min: r.x_min, y_min: r.y_min, x_max: r.x_max, y_max: r.y_max }
    }
}
