//! Pseudo-legal move generation.
//!
//! Every generator accounts for board occupancy but not for whether the
//! move would leave the mover's own king attacked. Filtering against
//! self-check is the caller's concern (see [`crate::is_checkmate`], which
//! simulates moves to test king safety).

use crate::Board;
use chessboard_core::{Color, PieceKind, Square};

/// The four orthogonal ray directions (rook rays).
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal ray directions (bishop rays).
const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight king steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns every square the piece at `from` could move to.
///
/// Destinations respect occupancy (no landing on same-color pieces, sliders
/// stop at the first piece on a ray) but are *pseudo-legal*: a move that
/// exposes the mover's own king is still included. An empty `from` square
/// yields an empty list rather than an error. The input board is never
/// mutated.
pub fn possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, color),
        PieceKind::Knight => leaper_moves(board, from, color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(board, from, color, &DIAGONAL_DIRS),
        PieceKind::Rook => sliding_moves(board, from, color, &ORTHOGONAL_DIRS),
        PieceKind::Queen => queen_moves(board, from, color),
        PieceKind::King => leaper_moves(board, from, color, &KING_OFFSETS),
    }
}

/// Pawn moves: forward pushes into empty squares plus diagonal captures.
///
/// The double advance from the starting row is only considered when the
/// single advance is open, so a blocked pawn generates no pushes at all.
/// Diagonal squares are included only when they hold an opposing piece;
/// there is no en passant.
fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            moves.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_steps) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_steps) {
                        moves.push(two_steps);
                    }
                }
            }
        }
    }

    for dcol in [-1, 1] {
        if let Some(capture) = from.offset(dir, dcol) {
            if board
                .piece_at(capture)
                .is_some_and(|target| target.color() != color)
            {
                moves.push(capture);
            }
        }
    }

    moves
}

/// Single-step movers (knight and king): each offset is a destination if it
/// is on the board and not occupied by a same-color piece.
fn leaper_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(drow, dcol) in offsets {
        if let Some(to) = from.offset(drow, dcol) {
            match board.piece_at(to) {
                Some(target) if target.color() == color => {}
                _ => moves.push(to),
            }
        }
    }
    moves
}

/// Ray sliders (bishop, rook, and the queen's halves): walk each direction
/// square by square until the edge, a same-color piece (stop, exclude), or
/// an opposing piece (include, then stop).
fn sliding_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(drow, dcol) in dirs {
        let mut current = from.offset(drow, dcol);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => {
                    moves.push(to);
                    current = to.offset(drow, dcol);
                }
                Some(target) => {
                    if target.color() != color {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Queen moves: rook rays followed by bishop rays. The direction sets are
/// disjoint, so the concatenation contains no duplicates.
fn queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = sliding_moves(board, from, color, &ORTHOGONAL_DIRS);
    moves.extend(sliding_moves(board, from, color, &DIAGONAL_DIRS));
    moves
}
