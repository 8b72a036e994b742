//! The game board: a square grid of bounded piece stacks.

use crate::action::{Action, Outcome, Rejection};
use crate::config::{BoardConfig, ConfigError};
use crate::stack::Stack;
use gungi_core::{Coord, CoreError, Piece, Rank, Side};
use std::fmt;
use thiserror::Error;

/// Errors raised by board operations.
///
/// Illegal moves are not errors; they come back as [`Outcome::Rejected`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no piece at {0}")]
    EmptyCell(Coord),

    #[error("stack at {0} is full")]
    StackFull(Coord),

    #[error("piece is already on the board at {0}")]
    AlreadyPlaced(Coord),

    #[error(transparent)]
    InvalidRank(#[from] CoreError),
}

/// A square board whose cells hold stacks of pieces.
///
/// The board owns every piece placed on it. Cells are stored row-major; every
/// access goes through [`Board::within_bounds`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: u8,
    cells: Vec<Stack>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION)
    }
}

impl Board {
    pub const DEFAULT_DIMENSION: u8 = 9;

    /// A piece may not act on a stack this tall or taller.
    pub const HEIGHT_LIMIT: usize = 4;

    /// Creates an empty board with `dimension` cells per edge.
    ///
    /// A dimension of 0 yields a board with no cells, on which every
    /// coordinate is out of bounds. Use [`BoardConfig::validate`] or
    /// [`Board::from_config`] to refuse it instead.
    pub fn new(dimension: u8) -> Self {
        let size = usize::from(dimension) * usize::from(dimension);
        Board {
            dimension,
            cells: vec![Stack::new(); size],
        }
    }

    /// Creates a board from validated settings.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.dimension))
    }

    #[inline]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Returns true if both coordinates lie in `[0, dimension)`.
    #[inline]
    pub fn within_bounds(&self, coord: Coord) -> bool {
        coord.within(self.dimension)
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if !self.within_bounds(coord) {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        // Both components are non-negative and below `dimension` here.
        Ok(coord.y as usize * usize::from(self.dimension) + coord.x as usize)
    }

    fn coord_of(&self, index: usize) -> Coord {
        let d = usize::from(self.dimension);
        Coord::new((index % d) as i32, (index / d) as i32)
    }

    /// Returns the stack at `coord`, bottom first.
    pub fn stack(&self, coord: Coord) -> Result<&[Piece], BoardError> {
        let i = self.index(coord)?;
        Ok(self.cells[i].as_slice())
    }

    /// Number of pieces on the cell.
    pub fn stack_height(&self, coord: Coord) -> Result<usize, BoardError> {
        let i = self.index(coord)?;
        Ok(self.cells[i].height())
    }

    /// Returns the piece at stack depth `depth` (0 is the bottom), or the top
    /// piece when `depth` is `None`.
    pub fn get_piece(
        &self,
        coord: Coord,
        depth: Option<usize>,
    ) -> Result<Option<&Piece>, BoardError> {
        let i = self.index(coord)?;
        let stack = &self.cells[i];
        Ok(match depth {
            Some(z) => stack.get(z),
            None => stack.top(),
        })
    }

    /// Iterates over every piece on the board with its coordinate, cell by
    /// cell, bottom of each stack first.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(i, stack)| {
            let coord = self.coord_of(i);
            stack.as_slice().iter().map(move |piece| (coord, piece))
        })
    }

    /// Whether `piece` may act on the stack at `coord` given its height.
    ///
    /// An empty cell is always eligible. An occupied one needs a height no
    /// greater than the piece's rank and below [`Board::HEIGHT_LIMIT`].
    pub fn target_rank_eligible(
        &self,
        piece: &Piece,
        coord: Coord,
    ) -> Result<bool, BoardError> {
        let height = self.stack_height(coord)?;
        Ok(height_eligible(piece, height))
    }

    /// Checks whether `piece` may move to `to`, reporting the first failed
    /// condition.
    ///
    /// The target must be on the board, the displacement must be one of the
    /// piece's movement vectors, and an occupied target must be rank
    /// eligible. Which action fits the target is decided by
    /// [`Board::place_piece`].
    pub fn check_move(&self, piece: &Piece, to: Coord) -> Result<(), Rejection> {
        let from = piece.position().ok_or(Rejection::OffBoard)?;
        if !self.within_bounds(to) {
            return Err(Rejection::OutOfBounds);
        }
        if !piece.movement_vectors(self.dimension).contains(to - from) {
            return Err(Rejection::NotInVectorSet);
        }
        let height = self.stack_height(to).map_err(|_| Rejection::OutOfBounds)?;
        if !height_eligible(piece, height) {
            return Err(Rejection::TargetTooHigh);
        }
        Ok(())
    }

    /// Returns true if `piece` may move to `to`. See [`Board::check_move`].
    pub fn can_move(&self, piece: &Piece, to: Coord) -> bool {
        self.check_move(piece, to).is_ok()
    }

    /// Puts an off-board piece on top of the stack at `coord` without any
    /// movement check. Used for board setup.
    pub fn set_piece(&mut self, mut piece: Piece, coord: Coord) -> Result<(), BoardError> {
        if let Some(at) = piece.position() {
            return Err(BoardError::AlreadyPlaced(at));
        }
        let i = self.index(coord).inspect_err(|_| {
            tracing::warn!("Setup at {} is out of bounds", coord);
        })?;
        if self.cells[i].is_full() {
            return Err(BoardError::StackFull(coord));
        }
        piece.set_position(coord);
        tracing::debug!("Set up {}", piece);
        self.cells[i]
            .push(piece)
            .map_err(|_| BoardError::StackFull(coord))
    }

    /// Moves the top piece at `from` to `to` using `action`.
    ///
    /// Out-of-bounds coordinates and an empty source cell are errors. A move
    /// that fails [`Board::check_move`] or does not suit the target comes back
    /// as [`Outcome::Rejected`] with the board untouched:
    ///
    /// - [`Action::Move`] needs an empty target.
    /// - [`Action::Stack`] needs an occupied target and pushes the mover on top.
    /// - [`Action::Capture`] needs an opposing piece on top of the target; that
    ///   piece is removed and returned in [`Outcome::Captured`].
    ///
    /// On success the mover leaves its former cell and records `to` as its
    /// position.
    pub fn place_piece(
        &mut self,
        from: Coord,
        to: Coord,
        action: Action,
    ) -> Result<Outcome, BoardError> {
        let src = self.index(from).inspect_err(|_| {
            tracing::warn!("Move source {} is out of bounds", from);
        })?;
        let dst = self.index(to).inspect_err(|_| {
            tracing::warn!("Move target {} is out of bounds", to);
        })?;
        let mover = self.cells[src].top().ok_or(BoardError::EmptyCell(from))?;

        if let Err(reason) = self
            .check_move(mover, to)
            .and_then(|()| fits_action(mover, &self.cells[dst], action))
        {
            tracing::debug!("Rejected {} {} -> {}: {}", action, from, to, reason);
            return Ok(Outcome::Rejected(reason));
        }

        let mut piece = self.cells[src].pop().ok_or(BoardError::EmptyCell(from))?;
        let captured = match action {
            Action::Capture => self.cells[dst].pop().map(|mut taken| {
                taken.lift();
                taken
            }),
            Action::Move | Action::Stack => None,
        };
        piece.set_position(to);
        self.cells[dst]
            .push(piece)
            .map_err(|_| BoardError::StackFull(to))?;

        tracing::debug!(
            "Applied {} {} -> {} (height {})",
            action,
            from,
            to,
            self.cells[dst].height()
        );

        Ok(match (action, captured) {
            (Action::Capture, Some(taken)) => Outcome::Captured(taken),
            (Action::Stack, _) => Outcome::Stacked,
            _ => Outcome::Moved,
        })
    }

    /// Raises the top piece at `coord` one rank.
    ///
    /// Ranks only change through this call, made by the layer that rules on
    /// stacking; a piece already at [`Rank::MAX`] is left unchanged.
    pub fn promote(&mut self, coord: Coord) -> Result<Rank, BoardError> {
        let i = self.index(coord)?;
        let piece = self.cells[i]
            .top_mut()
            .ok_or(BoardError::EmptyCell(coord))?;
        let rank = piece.promote()?;
        tracing::debug!("Promoted {}", piece);
        Ok(rank)
    }

    /// Lists every legal destination and action for the top piece at `from`.
    pub fn legal_targets(&self, from: Coord) -> Result<Vec<(Coord, Action)>, BoardError> {
        let i = self.index(from)?;
        let mover = self.cells[i].top().ok_or(BoardError::EmptyCell(from))?;

        let mut targets = Vec::new();
        for &v in &mover.movement_vectors(self.dimension) {
            let to = from + v;
            if self.check_move(mover, to).is_err() {
                continue;
            }
            let stack = &self.cells[self.index(to)?];
            for action in Action::ALL {
                if fits_action(mover, stack, action).is_ok() {
                    targets.push((to, action));
                }
            }
        }
        Ok(targets)
    }
}

fn height_eligible(piece: &Piece, height: usize) -> bool {
    height == 0 || (height <= usize::from(piece.rank().value()) && height < Board::HEIGHT_LIMIT)
}

/// Whether `action` suits the contents of the target stack.
fn fits_action(mover: &Piece, target: &Stack, action: Action) -> Result<(), Rejection> {
    match (action, target.top()) {
        (Action::Move, None) => Ok(()),
        (Action::Move, Some(_)) => Err(Rejection::TargetOccupied),
        (Action::Stack | Action::Capture, None) => Err(Rejection::TargetEmpty),
        (Action::Stack, Some(_)) => Ok(()),
        (Action::Capture, Some(top)) if top.side() == mover.side().opposite() => Ok(()),
        (Action::Capture, Some(_)) => Err(Rejection::FriendlyCapture),
    }
}

impl fmt::Display for Board {
    /// Renders one row per line. Each occupied cell shows the top piece's
    /// glyph, prefixed with `v` for the second side, and the stack height.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = usize::from(self.dimension);
        for (row, cells) in self.cells.chunks(d.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, stack) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match stack.top() {
                    None => write!(f, " . ")?,
                    Some(piece) => {
                        let marker = match piece.side() {
                            Side::First => ' ',
                            Side::Second => 'v',
                        };
                        write!(f, "{}{}{}", marker, piece.kind().symbol(), stack.height())?;
                    }
                }
            }
        }
        Ok(())
    }
}
