//! Bounded per-cell piece stacks.

use gungi_core::Piece;

/// The pieces standing on one cell, bottom first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pieces: Vec<Piece>,
}

impl Stack {
    /// Storage bound. Legal actions never build a stack this tall; only
    /// setup can fill a cell to capacity.
    pub const CAPACITY: usize = 4;

    pub fn new() -> Self {
        Stack {
            pieces: Vec::with_capacity(Self::CAPACITY),
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= Self::CAPACITY
    }

    /// The most recently placed piece.
    #[inline]
    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.pieces.last_mut()
    }

    /// The piece at `depth`, counted from the bottom (0).
    #[inline]
    pub fn get(&self, depth: usize) -> Option<&Piece> {
        self.pieces.get(depth)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pushes a piece, handing it back if the stack is full.
    pub fn push(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }
}
