//! Placement actions and their outcomes.

use gungi_core::Piece;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a piece does on arrival at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step onto an empty cell.
    Move,
    /// Take the opponent's top piece and stand in its place.
    Capture,
    /// Climb on top of an occupied cell (tsuke).
    Stack,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Move, Action::Capture, Action::Stack];

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Capture => "capture",
            Action::Stack => "stack",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when an action name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown action: '{0}'")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(Action::Move),
            "capture" => Ok(Action::Capture),
            "stack" => Ok(Action::Stack),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// Why a requested move is not legal.
///
/// These are ordinary outcomes of play, not errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("piece is not on the board")]
    OffBoard,

    #[error("displacement is not among the piece's movement vectors")]
    NotInVectorSet,

    #[error("target is outside the board")]
    OutOfBounds,

    #[error("target stack is too high for the piece's rank")]
    TargetTooHigh,

    #[error("target is occupied")]
    TargetOccupied,

    #[error("target is empty")]
    TargetEmpty,

    #[error("cannot capture a piece of the same side")]
    FriendlyCapture,
}

/// Result of a placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Stacked,
    /// The removed piece, now off the board.
    Captured(Piece),
    Rejected(Rejection),
}

impl Outcome {
    /// Returns true if the board was changed.
    #[inline]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Rejected(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
