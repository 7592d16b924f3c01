//! Board snapshot representation.

use chessboard_core::{Color, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Back-rank piece order, from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("rank {rank} has {squares} squares, expected 8")]
    SquareCount { rank: usize, squares: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
}

/// An 8x8 grid of optional pieces.
///
/// The board is a snapshot value: the engine functions never mutate one.
/// Applying a move means building a new board with [`Board::moved`] and
/// replacing the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    ///
    /// Black occupies rows 0-1, White rows 6-7, with the usual
    /// rook-knight-bishop-queen-king-bishop-knight-rook back ranks.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        board
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if the given square is empty.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns a copy of this board with the piece placed on the square.
    ///
    /// Replaces whatever was there before. Intended for building positions.
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Self {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
        self
    }

    /// Returns a copy of this board with the square cleared.
    pub fn without_piece(mut self, sq: Square) -> Self {
        self.squares[sq.row() as usize][sq.col() as usize] = None;
        self
    }

    /// Returns a copy of this board with the piece at `from` relocated to
    /// `to` and the origin cleared.
    ///
    /// Whatever occupied `to` is overwritten; capture bookkeeping is the
    /// caller's concern. Relocating from an empty square yields a board
    /// with both squares empty.
    pub fn moved(&self, from: Square, to: Square) -> Self {
        let mut next = self.clone();
        next.squares[to.row() as usize][to.col() as usize] =
            next.squares[from.row() as usize][from.col() as usize];
        next.squares[from.row() as usize][from.col() as usize] = None;
        next
    }

    /// Parses a FEN-style piece-placement field, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// The first rank in the string is row 0 (Black's back rank). Only the
    /// placement field is supported; there are no castling rights, en
    /// passant squares, or move clocks in this engine.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(PlacementError::InvalidPiece(c))?;
                    if col < 8 {
                        board.squares[row][col] = Some(piece);
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(PlacementError::SquareCount {
                    rank: 8 - row,
                    squares: col,
                });
            }
        }

        Ok(board)
    }

    /// Serializes the board back to a piece-placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty_run: u32 = 0;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
                            empty_run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let c = self.squares[row][col].map_or('.', |p| p.to_char());
                write!(f, "{}", c)?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
