//! Core types for the chessboard engine.
//!
//! This crate provides the fundamental value types shared by the rules
//! engine and its bindings:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for recorded moves

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
