//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// A recorded move: where a piece came from, where it went, and what (if
/// anything) it captured.
///
/// Moves are historical facts. They are appended to a game's history when a
/// move is accepted and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
}

impl Move {
    /// Creates a new move record.
    ///
    /// `captured` is the piece that occupied `to` at move time, if any.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the piece that moved.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the captured piece, if the move was a capture.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if the move captured a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
