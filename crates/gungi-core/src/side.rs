//! Player sides.

use crate::Vector;
use std::fmt;

/// The two players.
///
/// Movement tables are written for [`Side::First`], whose forward direction
/// is decreasing `y`. [`Side::Second`] moves by the point reflection of
/// every table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Turns a first-side displacement into this side's displacement.
    #[inline]
    pub const fn orient(self, v: Vector) -> Vector {
        match self {
            Side::First => v,
            Side::Second => v.mirrored(),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::First => "First",
            Side::Second => "Second",
        };
        f.write_str(name)
    }
}
