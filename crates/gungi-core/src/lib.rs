//! Core types for gungi.
//!
//! This crate provides the fundamental types used by the rule engine:
//! - [`Side`] for the two players
//! - [`PieceType`], [`Archetype`], and [`Piece`] for piece representation
//! - [`Rank`] for a piece's stacking tier
//! - [`Coord`] and [`Vector`] for board coordinates and displacements
//! - [`derive_vectors`] for on-demand movement-vector derivation

mod coord;
mod piece;
mod rank;
mod side;
mod vectors;

pub use coord::{Coord, Vector};
pub use piece::{Archetype, Piece, PieceType};
pub use rank::{CoreError, Rank};
pub use side::Side;
pub use vectors::{derive_vectors, derive_vectors_raw, VectorSet};
