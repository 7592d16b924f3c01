//! End-to-end tests driving whole games through the public API.

use chessboard_core::{Color, PieceKind, Square};
use chessboard_rules::{is_checkmate, is_king_in_check, Board, Game, GameError};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, from: &str, to: &str) {
    game.make_move(sq(from), sq(to))
        .unwrap_or_else(|e| panic!("{} to {} rejected: {}", from, to, e));
}

#[test]
fn scholars_mate() {
    // 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6 4.Qxf7#
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "f1", "c4");
    play(&mut game, "b8", "c6");
    play(&mut game, "d1", "h5");
    play(&mut game, "g8", "f6");

    assert!(!game.is_check());
    play(&mut game, "h5", "f7");

    let queen_takes_f7 = game.move_history().last().unwrap();
    assert_eq!(queen_takes_f7.piece().kind(), PieceKind::Queen);
    assert_eq!(
        queen_takes_f7.captured().map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );

    assert_eq!(game.current_player(), Color::Black);
    assert!(game.is_check());
    assert!(game.is_checkmate());
    assert_eq!(
        game.make_move(sq("a7"), sq("a6")),
        Err(GameError::GameOver)
    );
}

#[test]
fn opening_moves_alternate_turns() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "c7", "c5");
    play(&mut game, "g1", "f3");
    play(&mut game, "d7", "d6");

    assert_eq!(game.move_history().len(), 4);
    assert_eq!(game.current_player(), Color::White);
    assert!(!game.is_check());
    assert!(!game.is_game_over());

    assert_eq!(
        game.board().to_placement(),
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R"
    );
}

#[test]
fn hand_built_mate_matches_pure_functions() {
    let board = Board::from_placement("R3k3/3ppp2/8/8/8/8/8/4K3").unwrap();
    assert!(is_king_in_check(&board, Color::Black));
    assert!(is_checkmate(&board, Color::Black));

    let game = Game::from_board(board, Color::Black);
    assert!(game.is_check());
    assert!(game.is_game_over());
}

#[test]
fn escaping_check_keeps_the_game_going() {
    // White queen checks the black king; Black may resolve it or, since the
    // engine is pseudo-legal, even ignore it.
    let board = Board::from_placement("4k3/8/4Q3/8/8/8/8/4K3").unwrap();
    let mut game = Game::from_board(board, Color::Black);
    assert!(game.is_check());
    assert!(!game.is_checkmate());

    play(&mut game, "e8", "d8");
    assert!(!game.is_game_over());
    assert_eq!(game.current_player(), Color::White);
}
