//! Move legality and stacking engine for gungi.
//!
//! This crate provides:
//! - [`Board`] - the square grid of bounded piece stacks
//! - [`Action`] and [`Outcome`] - what a move does and what came of it
//! - [`Rejection`] - why a move is not legal
//! - [`BoardConfig`] - board settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use gungi_core::{Coord, Piece, PieceType, Side};
//! use gungi_engine::{Action, Board, Outcome};
//!
//! let mut board = Board::default();
//! board
//!     .set_piece(Piece::new(Side::First, PieceType::Sui), Coord::new(4, 4))
//!     .unwrap();
//!
//! let sui = board.get_piece(Coord::new(4, 4), None).unwrap().unwrap();
//! assert!(board.can_move(sui, Coord::new(5, 5)));
//!
//! let outcome = board
//!     .place_piece(Coord::new(4, 4), Coord::new(5, 5), Action::Move)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Moved);
//! ```
//!
//! Turn order, win detection, and what happens to captured pieces are left to
//! the caller. Diagnostics are emitted through `tracing`; install a subscriber
//! to see them.

mod action;
mod board;
mod config;
mod stack;

pub use action::{Action, Outcome, ParseActionError, Rejection};
pub use board::{Board, BoardError};
pub use config::{BoardConfig, ConfigError};
pub use stack::Stack;
