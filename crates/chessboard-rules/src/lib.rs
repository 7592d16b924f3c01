//! Pure rules engine for an 8x8 chess board.
//!
//! This crate provides:
//! - [`Board`] - an immutable 8x8 snapshot of piece placement
//! - [`possible_moves`] - pseudo-legal move generation per piece
//! - [`is_valid_move`], [`is_king_in_check`], [`is_checkmate`] - verdicts
//! - [`Game`] - a session wrapper owning the board, turn, and move history
//!
//! # Architecture
//!
//! The engine functions are pure: they take a board snapshot by reference,
//! never mutate it, and return fresh results on every call. Generated moves
//! are *pseudo-legal* - they respect piece movement and occupancy but not
//! whether the mover's own king ends up attacked. Check and checkmate
//! detection build on the same generator by probing whether any opposing
//! piece reaches the king's square.
//!
//! The caller (typically [`Game`], or a UI holding its own board) owns the
//! single mutable position and applies accepted moves itself.
//!
//! # Example
//!
//! ```
//! use chessboard_core::Square;
//! use chessboard_rules::{possible_moves, Board, Game};
//!
//! let board = Board::initial();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! assert_eq!(possible_moves(&board, e2).len(), 2);
//!
//! let mut game = Game::new();
//! game.make_move(e2, Square::from_algebraic("e4").unwrap()).unwrap();
//! assert_eq!(game.move_history().len(), 1);
//! ```

mod board;
mod game;
mod movegen;
mod rules;

pub use board::{Board, PlacementError};
pub use game::{Game, GameError};
pub use movegen::possible_moves;
pub use rules::{is_checkmate, is_king_in_check, is_valid_move};
