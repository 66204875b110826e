//! Points, sizes, rectangles and edge insets in floating point units.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// One unit by one unit.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero, negative or not a number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// A rectangle of `size` anchored at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// The rectangle moved by `dx`, `dy`.
    #[must_use]
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }
}

/// Inset distances for each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// A set of rectangle corners, combined with `|`.
///
/// The y axis points down, so "top" is the edge at the smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Corners(u8);

impl Corners {
    pub const NONE: Self = Self(0);
    pub const TOP_LEFT: Self = Self(1);
    pub const TOP_RIGHT: Self = Self(1 << 1);
    pub const BOTTOM_LEFT: Self = Self(1 << 2);
    pub const BOTTOM_RIGHT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Whether every corner of `other` is in the set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Corners {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Corners {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A rectangle whose chosen corners are quarter circles of `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corners: Corners,
    pub radius: f64,
}

impl RoundedRect {
    #[must_use]
    pub const fn new(rect: Rect, corners: Corners, radius: f64) -> Self {
        Self {
            rect,
            corners,
            radius,
        }
    }

    /// Whether `point` lies inside the shape.
    ///
    /// The radius is capped at half the shorter side.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let Rect { origin, size } = self.rect;
        let (max_x, max_y) = (self.rect.max_x(), self.rect.max_y());
        let inside_rect =
            point.x >= origin.x && point.x <= max_x && point.y >= origin.y && point.y <= max_y;
        if !inside_rect {
            return false;
        }

        let radius = self.radius.min(size.width / 2.0).min(size.height / 2.0);
        if radius.is_nan() || radius <= 0.0 {
            return true;
        }

        let left = point.x < origin.x + radius;
        let right = point.x > max_x - radius;
        let top = point.y < origin.y + radius;
        let bottom = point.y > max_y - radius;
        let (corner, centre) = match (left, right, top, bottom) {
            (true, _, true, _) => (Corners::TOP_LEFT, Point::new(origin.x + radius, origin.y + radius)),
            (_, true, true, _) => (Corners::TOP_RIGHT, Point::new(max_x - radius, origin.y + radius)),
            (true, _, _, true) => (Corners::BOTTOM_LEFT, Point::new(origin.x + radius, max_y - radius)),
            (_, true, _, true) => (Corners::BOTTOM_RIGHT, Point::new(max_x - radius, max_y - radius)),
            _ => return true,
        };

        !self.corners.contains(corner) || (point.x - centre.x).hypot(point.y - centre.y) <= radius
    }
}
