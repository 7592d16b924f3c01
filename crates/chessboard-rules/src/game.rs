//! Game session management.
//!
//! The pure rules functions take board snapshots; [`Game`] is the stateful
//! caller that owns the single authoritative board, the turn, and the move
//! history, and replaces the board wholesale on every accepted move.

use crate::movegen::possible_moves;
use crate::rules::{is_checkmate, is_king_in_check, is_valid_move};
use crate::Board;
use chessboard_core::{Color, Move, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not acceptable in the current position.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    /// The game has already ended in checkmate.
    #[error("game has already ended")]
    GameOver,
}

/// A chess game session.
///
/// Tracks the current board, whose turn it is, and the append-only move
/// history. The board is replaced (never mutated in place) on each accepted
/// move, and the history is cleared only by [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            current_player: Color::White,
            moves: Vec::new(),
        }
    }

    /// Creates a game from a custom position with the given side to move.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Game {
            board,
            current_player,
            moves: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns the move history, oldest first.
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the destinations reachable from the given square.
    pub fn possible_moves(&self, from: Square) -> Vec<Square> {
        possible_moves(&self.board, from)
    }

    /// Returns true if the current player's king is attacked.
    pub fn is_check(&self) -> bool {
        is_king_in_check(&self.board, self.current_player)
    }

    /// Returns true if the current player is checkmated.
    pub fn is_checkmate(&self) -> bool {
        is_checkmate(&self.board, self.current_player)
    }

    /// Returns true if the game has ended.
    ///
    /// Checkmate is the only terminal state this engine knows about.
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate()
    }

    /// Attempts to move the current player's piece from `from` to `to`.
    ///
    /// On success the captured piece (if any) is recorded in the history,
    /// the board is replaced with the post-move position, and the turn
    /// passes to the opponent.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if self.is_checkmate() {
            return Err(GameError::GameOver);
        }
        if !is_valid_move(&self.board, from, to, self.current_player) {
            return Err(GameError::IllegalMove { from, to });
        }

        // is_valid_move guarantees a piece of the current player at `from`.
        let Some(piece) = self.board.piece_at(from) else {
            return Err(GameError::IllegalMove { from, to });
        };
        let captured = self.board.piece_at(to);

        self.moves.push(Move::new(from, to, piece, captured));
        self.board = self.board.moved(from, to);
        self.current_player = self.current_player.opposite();
        Ok(())
    }

    /// Resets the session to the initial position and clears the history.
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::{Piece, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Color::White);
        assert!(game.move_history().is_empty());
        assert!(!game.is_check());
        assert!(!game.is_game_over());
    }

    #[test]
    fn make_move_updates_turn_and_history() {
        let mut game = Game::new();
        game.make_move(sq("e2"), sq("e4")).unwrap();

        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.move_history().len(), 1);

        let recorded = game.move_history()[0];
        assert_eq!(recorded.from(), sq("e2"));
        assert_eq!(recorded.to(), sq("e4"));
        assert!(!recorded.is_capture());
        assert!(game.board().is_empty(sq("e2")));
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut game = Game::new();
        let err = game.make_move(sq("e2"), sq("e5")).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            }
        );
        assert!(game.move_history().is_empty());
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn out_of_turn_move_is_rejected() {
        let mut game = Game::new();
        assert!(game.make_move(sq("e7"), sq("e5")).is_err());
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = Game::new();
        game.make_move(sq("e2"), sq("e4")).unwrap();
        game.make_move(sq("d7"), sq("d5")).unwrap();
        game.make_move(sq("e4"), sq("d5")).unwrap();

        let capture = game.move_history()[2];
        assert_eq!(
            capture.captured(),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        game.make_move(sq("f2"), sq("f3")).unwrap();
        game.make_move(sq("e7"), sq("e5")).unwrap();
        game.make_move(sq("g2"), sq("g4")).unwrap();
        game.make_move(sq("d8"), sq("h4")).unwrap();

        assert_eq!(game.current_player(), Color::White);
        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert!(game.is_game_over());
    }

    #[test]
    fn no_moves_accepted_after_checkmate() {
        let mut game = Game::new();
        game.make_move(sq("f2"), sq("f3")).unwrap();
        game.make_move(sq("e7"), sq("e5")).unwrap();
        game.make_move(sq("g2"), sq("g4")).unwrap();
        game.make_move(sq("d8"), sq("h4")).unwrap();

        let err = game.make_move(sq("e2"), sq("e4")).unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = Game::new();
        game.make_move(sq("e2"), sq("e4")).unwrap();
        game.make_move(sq("e7"), sq("e5")).unwrap();

        game.reset();
        assert_eq!(game.current_player(), Color::White);
        assert!(game.move_history().is_empty());
        assert_eq!(game.board(), &Board::initial());
    }

    #[test]
    fn from_board_starts_with_given_side() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let game = Game::from_board(board, Color::Black);
        assert_eq!(game.current_player(), Color::Black);
        assert!(!game.is_check());
    }

    #[test]
    fn game_error_display() {
        let err = GameError::IllegalMove {
            from: sq("e2"),
            to: sq("e5"),
        };
        assert_eq!(format!("{}", err), "illegal move: e2 to e5");
        assert_eq!(format!("{}", GameError::GameOver), "game has already ended");
    }
}
