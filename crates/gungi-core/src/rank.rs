//! Stacking rank.

use std::fmt;
use thiserror::Error;

/// Errors raised by the core types.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CoreError {
    #[error("invalid rank {0}: expected a value in 0..3")]
    InvalidRank(u8),
}

/// A piece's stacking tier.
///
/// Always in `[0, 3)`; out-of-range values are rejected at construction, so
/// vector derivation never sees an invalid rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rank(u8);

impl Rank {
    /// Exclusive upper bound.
    pub const LIMIT: u8 = 3;

    pub const ZERO: Rank = Rank(0);
    pub const MAX: Rank = Rank(Self::LIMIT - 1);

    /// Creates a rank, failing for values `>= 3`.
    pub const fn new(value: u8) -> Result<Self, CoreError> {
        if value < Self::LIMIT {
            Ok(Rank(value))
        } else {
            Err(CoreError::InvalidRank(value))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next tier up.
    pub const fn next(self) -> Result<Self, CoreError> {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
