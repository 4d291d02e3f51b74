// File: crates/clip-core/src/clip.rs
// Summary: Cohen-Sutherland segment clipper over integer segments.
// Notes:
// - Intersections are kept as exact rationals on the input segment's line while
//   the loop runs; outcodes of moved endpoints are evaluated on those exact
//   values. Only an accepted result is rounded, to the nearest integer with ties
//   toward +inf (floor(v + 1/2)).
// - Because the exact clipped endpoints do not depend on the walking direction,
//   clipping (a, b) and (b, a) gives the same pixels.

use std::cmp::Ordering;

use log::trace;

use crate::geometry::{ClipRectangle, Point, Segment};
use crate::outcode::Outcode;

/// Clip-window boundary an outside endpoint gets moved onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// Boundary to clip against for an outside code, tested TOP, BOTTOM, RIGHT, LEFT.
    /// A corner region (two bits) resolves to its top/bottom boundary first.
    pub fn select(code: Outcode) -> Option<Self> {
        if code.contains(Outcode::TOP) {
            Some(Self::Top)
        } else if code.contains(Outcode::BOTTOM) {
            Some(Self::Bottom)
        } else if code.contains(Outcode::RIGHT) {
            Some(Self::Right)
        } else if code.contains(Outcode::LEFT) {
            Some(Self::Left)
        } else {
            None
        }
    }

    /// Point where the line through `line` crosses this boundary of `rect`.
    /// `None` when the line runs parallel to the boundary.
    fn intersect(self, line: &Segment, rect: &ClipRectangle) -> Option<ExactPoint> {
        let (px, py) = (line.start.x as i128, line.start.y as i128);
        let dx = line.end.x as i128 - px;
        let dy = line.end.y as i128 - py;
        let on_horizontal = |k: i32| -> Option<ExactPoint> {
            let x = Ratio::new(px * dy + dx * (k as i128 - py), dy)?;
            Some(ExactPoint { x, y: Ratio::int(k) })
        };
        let on_vertical = |k: i32| -> Option<ExactPoint> {
            let y = Ratio::new(py * dx + dy * (k as i128 - px), dx)?;
            Some(ExactPoint { x: Ratio::int(k), y })
        };
        match self {
            Self::Top => on_horizontal(rect.y_max()),
            Self::Bottom => on_horizontal(rect.y_min()),
            Self::Right => on_vertical(rect.x_max()),
            Self::Left => on_vertical(rect.x_min()),
        }
    }
}

/// Exact rational `num / den`, `den > 0`.
#[derive(Clone, Copy, Debug)]
struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    fn int(v: i32) -> Self {
        Self { num: v as i128, den: 1 }
    }

    fn new(num: i128, den: i128) -> Option<Self> {
        match den.cmp(&0) {
            Ordering::Greater => Some(Self { num, den }),
            Ordering::Less => Some(Self { num: -num, den: -den }),
            Ordering::Equal => None,
        }
    }

    fn cmp_int(self, k: i32) -> Ordering {
        self.num.cmp(&(k as i128 * self.den))
    }

    /// Nearest integer, ties toward +inf.
    fn round(self) -> Option<i32> {
        i32::try_from((2 * self.num + self.den).div_euclid(2 * self.den)).ok()
    }
}

#[derive(Clone, Copy, Debug)]
struct ExactPoint {
    x: Ratio,
    y: Ratio,
}

impl ExactPoint {
    fn outcode(&self, rect: &ClipRectangle) -> Outcode {
        let mut code = Outcode::INSIDE;
        if self.x.cmp_int(rect.x_min()) == Ordering::Less {
            code = code | Outcode::LEFT;
        } else if self.x.cmp_int(rect.x_max()) == Ordering::Greater {
            code = code | Outcode::RIGHT;
        }
        if self.y.cmp_int(rect.y_min()) == Ordering::Less {
            code = code | Outcode::BOTTOM;
        } else if self.y.cmp_int(rect.y_max()) == Ordering::Greater {
            code = code | Outcode::TOP;
        }
        code
    }

    fn round(&self) -> Option<Point> {
        Some(Point::new(self.x.round()?, self.y.round()?))
    }
}

impl From<Point> for ExactPoint {
    fn from(p: Point) -> Self {
        Self { x: Ratio::int(p.x), y: Ratio::int(p.y) }
    }
}

/// Clip `segment` to `rect`.
///
/// Returns the visible sub-segment, oriented like the input, or `None` when no
/// part of the segment lies inside the rectangle. A zero-length segment is
/// always rejected: a point has no visible line portion.
pub fn clip_segment(rect: &ClipRectangle, segment: Segment) -> Option<Segment> {
    if segment.is_degenerate() {
        trace!("reject degenerate segment at {:?}", segment.start);
        return None;
    }

    let mut a = ExactPoint::from(segment.start);
    let mut b = ExactPoint::from(segment.end);
    let mut code_a = a.outcode(rect);
    let mut code_b = b.outcode(rect);

    loop {
        if code_a.is_inside() && code_b.is_inside() {
            return Some(Segment::new(a.round()?, b.round()?));
        }
        if code_a.intersects(code_b) {
            trace!("reject {segment:?}: both ends share {:?}", code_a & code_b);
            return None;
        }

        let move_start = !code_a.is_inside();
        let code_out = if move_start { code_a } else { code_b };
        let boundary = Boundary::select(code_out)?;
        let hit = boundary.intersect(&segment, rect)?;
        trace!(
            "{segment:?}: {} end {code_out:?} -> {boundary:?}",
            if move_start { "start" } else { "end" },
        );

        if move_start {
            a = hit;
            code_a = a.outcode(rect);
        } else {
            b = hit;
            code_b = b.outcode(rect);
        }
    }
}

impl ClipRectangle {
    /// Method form of [`clip_segment`].
    pub fn clip(&self, segment: Segment) -> Option<Segment> {
        clip_segment(self, segment)
    }
}
