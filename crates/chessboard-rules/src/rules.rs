//! Move legality, check, and checkmate verdicts.

use crate::movegen::possible_moves;
use crate::Board;
use chessboard_core::{Color, Piece, PieceKind, Square};

/// Returns true if moving the piece at `from` to `to` is acceptable for
/// `current_player`.
///
/// Fails closed: `false` when `from` is empty, the piece belongs to the
/// other player, `from == to`, the destination holds a same-color piece, or
/// `to` is not among the piece's [`possible_moves`]. Like the generator,
/// this does NOT test whether the move leaves the mover's own king
/// attacked; a king may step into check and a pinned piece may move.
pub fn is_valid_move(board: &Board, from: Square, to: Square, current_player: Color) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.color() != current_player {
        return false;
    }
    if from == to {
        return false;
    }
    if board
        .piece_at(to)
        .is_some_and(|target| target.color() == piece.color())
    {
        return false;
    }
    possible_moves(board, from).contains(&to)
}

/// Finds the first king of the given color, scanning row-major from (0, 0).
fn find_king(board: &Board, color: Color) -> Option<Square> {
    let king = Piece::new(PieceKind::King, color);
    Square::all().find(|&sq| board.piece_at(sq) == Some(king))
}

/// Returns true if the king of `king_color` is attacked.
///
/// Probes every opposing piece's pseudo-legal moves for the king's square.
/// A board with no king of that color reports `false` rather than erroring.
pub fn is_king_in_check(board: &Board, king_color: Color) -> bool {
    let Some(king_sq) = find_king(board, king_color) else {
        return false;
    };

    Square::all().any(|sq| {
        board
            .piece_at(sq)
            .is_some_and(|piece| piece.color() != king_color)
            && possible_moves(board, sq).contains(&king_sq)
    })
}

/// Returns true if `king_color` is in check and no move by any piece of
/// that color escapes it.
///
/// Every pseudo-legal move is simulated on a scratch copy of the board and
/// the position re-tested with [`is_king_in_check`]; the first escaping
/// move short-circuits to `false`. A side that is not in check is never
/// checkmated, so a side with no moves at all still reports `false`
/// (stalemate is not detected).
pub fn is_checkmate(board: &Board, king_color: Color) -> bool {
    if !is_king_in_check(board, king_color) {
        return false;
    }

    for from in Square::all() {
        if !board
            .piece_at(from)
            .is_some_and(|piece| piece.color() == king_color)
        {
            continue;
        }
        for to in possible_moves(board, from) {
            if !is_king_in_check(&board.moved(from, to), king_color) {
                return false;
            }
        }
    }

    true
}
