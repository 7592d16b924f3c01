//! WebAssembly bindings for the chessboard rules engine.
//!
//! This crate provides a JavaScript-friendly API for the rules engine,
//! letting the browser UI hold rendering and click handling while the
//! engine answers move and verdict queries.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'chessboard-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! console.log(game.currentPlayer()); // "white"
//!
//! const targets = game.possibleMoves("e2"); // ["e3", "e4"]
//! game.makeMove("e2", "e4");
//!
//! if (game.isCheckmate()) {
//!   console.log("game over");
//! }
//! ```

use chessboard_core::Square;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A move as handed to JavaScript: algebraic squares plus FEN-style piece
/// characters.
#[derive(Serialize)]
struct MoveRecord {
    from: String,
    to: String,
    piece: char,
    captured: Option<char>,
}

/// A chess game that can be manipulated from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: chessboard_rules::Game,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            inner: chessboard_rules::Game::new(),
        }
    }

    /// Resets the game to the starting position and clears the history.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        match self.inner.current_player() {
            chessboard_core::Color::White => "white".to_string(),
            chessboard_core::Color::Black => "black".to_string(),
        }
    }

    /// Returns the piece at the given square in FEN notation.
    ///
    /// Returns null if the square is empty or the input is not a valid
    /// square. Returns a string like "P" (white pawn) or "k" (black king).
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_algebraic(square)?;
        let piece = self.inner.board().piece_at(sq)?;
        Some(piece.to_char().to_string())
    }

    /// Returns the squares reachable from the given square, in algebraic
    /// notation. An empty square yields an empty array.
    #[wasm_bindgen(js_name = possibleMoves)]
    pub fn possible_moves(&self, square: &str) -> Result<Vec<String>, JsError> {
        let sq = Square::from_algebraic(square)
            .ok_or_else(|| JsError::new(&format!("Invalid square: {}", square)))?;
        Ok(self
            .inner
            .possible_moves(sq)
            .into_iter()
            .map(|to| to.to_algebraic())
            .collect())
    }

    /// Makes a move given source and destination squares (e.g. "e2", "e4").
    ///
    /// Returns an error if a square is malformed, the move is illegal, or
    /// the game is already over.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<(), JsError> {
        let from_sq = Square::from_algebraic(from)
            .ok_or_else(|| JsError::new(&format!("Invalid square: {}", from)))?;
        let to_sq = Square::from_algebraic(to)
            .ok_or_else(|| JsError::new(&format!("Invalid square: {}", to)))?;
        self.inner
            .make_move(from_sq, to_sq)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns true if the current side to move is in check.
    #[wasm_bindgen(js_name = isCheck)]
    pub fn is_check(&self) -> bool {
        self.inner.is_check()
    }

    /// Returns true if the current side to move is checkmated.
    #[wasm_bindgen(js_name = isCheckmate)]
    pub fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    /// Returns true if the game is over.
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Returns the current board as a FEN-style piece-placement string.
    pub fn placement(&self) -> String {
        self.inner.board().to_placement()
    }

    /// Returns the move history as an array of
    /// `{ from, to, piece, captured }` objects.
    #[wasm_bindgen(js_name = moveHistory)]
    pub fn move_history(&self) -> Result<JsValue, JsError> {
        let records: Vec<MoveRecord> = self
            .inner
            .move_history()
            .iter()
            .map(|m| MoveRecord {
                from: m.from().to_algebraic(),
                to: m.to().to_algebraic(),
                piece: m.piece().to_char(),
                captured: m.captured().map(|p| p.to_char()),
            })
            .collect();
        serde_wasm_bindgen::to_value(&records).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialization function called when the WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {}
