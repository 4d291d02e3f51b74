// File: crates/clip-core/src/outcode.rs
// Summary: Cohen-Sutherland region codes (4-bit outcodes) relative to a clip rectangle.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::geometry::{ClipRectangle, Point};

/// Region code of a point relative to a [`ClipRectangle`].
///
/// LEFT and RIGHT are mutually exclusive, as are BOTTOM and TOP. The empty
/// code means the point lies inside the rectangle (boundary inclusive).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const BOTTOM: Self = Self(0b0100);
    pub const TOP: Self = Self(0b1000);

    /// Classify `p` against `rect`.
    pub fn of(p: Point, rect: &ClipRectangle) -> Self {
        let mut code = Self::INSIDE;
        if p.x < rect.x_min() {
            code = code | Self::LEFT;
        } else if p.x > rect.x_max() {
            code = code | Self::RIGHT;
        }
        if p.y < rect.y_min() {
            code = code | Self::BOTTOM;
        } else if p.y > rect.y_max() {
            code = code | Self::TOP;
        }
        code
    }

    pub const fn bits(self) -> u8 { self.0 }

    pub const fn is_inside(self) -> bool { self.0 == 0 }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// True when both codes share an outside region.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl BitAnd for Outcode {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return f.write_str("Outcode(INSIDE)");
        }
        let names = [(Self::TOP, "TOP"), (Self::BOTTOM, "BOTTOM"), (Self::RIGHT, "RIGHT"), (Self::LEFT, "LEFT")];
        let mut parts = names.iter().filter(|(bit, _)| self.contains(*bit)).map(|(_, n)| *n);
        write!(f, "Outcode(")?;
        if let Some(first) = parts.next() {
            f.write_str(first)?;
        }
        for n in parts {
            write!(f, "|{n}")?;
        }
        write!(f, ")")
    }
}
