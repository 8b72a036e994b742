//! Board coordinates and displacement vectors.

use std::fmt;
use std::ops::{Add, Sub};

/// A board coordinate.
///
/// Coordinates are signed so that a displacement can be applied before the
/// result is bounds-checked. Whether a coordinate lies on a board depends on
/// that board's dimension; see [`Coord::within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Returns true if both components lie in `[0, dimension)`.
    #[inline]
    pub const fn within(self, dimension: u8) -> bool {
        let d = dimension as i32;
        0 <= self.x && self.x < d && 0 <= self.y && self.y < d
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A relative displacement, ordered `(dy, dx)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    pub dy: i32,
    pub dx: i32,
}

impl Vector {
    #[inline]
    pub const fn new(dy: i32, dx: i32) -> Self {
        Vector { dy, dx }
    }

    /// Negates both components.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Vector {
            dy: -self.dy,
            dx: -self.dx,
        }
    }

    /// Multiplies both components by `step`.
    #[inline]
    pub const fn scaled(self, step: i32) -> Self {
        Vector {
            dy: self.dy * step,
            dx: self.dx * step,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dy, self.dx)
    }
}

// Coordinate arithmetic saturates at the `i32` limits. A saturated result is
// never on a board, so bounds checks still reject it.
impl Add<Vector> for Coord {
    type Output = Coord;

    fn add(self, v: Vector) -> Coord {
        Coord::new(self.x.saturating_add(v.dx), self.y.saturating_add(v.dy))
    }
}

impl Sub for Coord {
    type Output = Vector;

    /// The displacement that leads from `other` to `self`.
    fn sub(self, other: Coord) -> Vector {
        Vector::new(self.y.saturating_sub(other.y), self.x.saturating_sub(other.x))
    }
}
