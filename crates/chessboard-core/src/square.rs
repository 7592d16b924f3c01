//! Board square representation.

use std::fmt;

/// A square on the 8x8 board, addressed by (row, column).
///
/// Row 0 is Black's back rank and row 7 is White's, matching the
/// top-to-bottom orientation the board is rendered in. Column 0 is the
/// a-file. Algebraic notation maps as `file = 'a' + col`,
/// `rank = 8 - row`, so (7, 4) is e1 and (0, 4) is e8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// Both coordinates must be in 0-7; out-of-range input is a caller
    /// error and is only checked in debug builds.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Returns the square offset by the given row/column deltas, or `None`
    /// if the result falls off the board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            c @ b'1'..=b'8' => b'8' - c,
            _ => return None,
        };
        Some(Square { row, col })
    }

    /// Returns the row (0-7, top to bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7, left to right).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col) as char,
            (b'8' - self.row) as char
        )
    }

    /// Iterates over all 64 squares in row-major order from (0, 0).
    ///
    /// Scans that must be deterministic (king lookup, attack probing,
    /// checkmate enumeration) all use this order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
