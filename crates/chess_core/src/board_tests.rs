use super::*;
use crate::movegen::legal_moves;
use crate::notation::parse_coordinate_move;

fn play(state: &mut GameState, moves: &[&str]) {
    for txt in moves {
        let mv = parse_coordinate_move(state, txt)
            .unwrap_or_else(|| panic!("{txt} is not legal here"));
        state.make_move(mv);
    }
}

#[test]
fn startpos_layout() {
    let state = GameState::new();
    assert_eq!(
        state.piece_at(Square::new(7, 4)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        state.piece_at(Square::new(0, 3)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(state.king_square(Color::Black), Square::new(0, 4));
    assert_eq!(state.side_to_move, Color::White);
    assert!(state.move_log.is_empty());
}

#[test]
fn from_fen_matches_startpos() {
    let parsed =
        GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let start = GameState::new();
    assert_eq!(parsed.board, start.board);
    assert_eq!(parsed.castling, start.castling);
    assert_eq!(parsed.king_square(Color::White), start.king_square(Color::White));
}

#[test]
fn from_fen_rejects_bad_input() {
    assert_eq!(
        GameState::from_fen("8/8/8 w - -").unwrap_err(),
        FenError::RankCount(3)
    );
    assert_eq!(
        GameState::from_fen("8/8/8/8/8/8/8/8 w - -").unwrap_err(),
        FenError::KingCount(Color::White)
    );
    assert_eq!(
        GameState::from_fen("k7/8/8/8/8/8/8/7K x - -").unwrap_err(),
        FenError::SideToMove("x".into())
    );
    assert_eq!(
        GameState::from_fen("k7/9/8/8/8/8/8/7K w - -").unwrap_err(),
        FenError::FileCount { rank: 7 }
    );
    assert_eq!(
        GameState::from_fen("k7/8/8/8/8/8/8/7K w").unwrap_err(),
        FenError::MissingFields(2)
    );
}

#[test]
fn double_push_sets_en_passant_target() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4"]);
    assert_eq!(state.en_passant, Square::parse("e3"));
    play(&mut state, &["g8f6"]);
    assert_eq!(state.en_passant, None);
}

#[test]
fn en_passant_capture_and_undo() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let before = state.clone();

    let mv = parse_coordinate_move(&state, "e5d6").unwrap();
    assert!(mv.is_en_passant);
    state.make_move(mv);
    assert_eq!(state.piece_at(Square::parse("d5").unwrap()), None);
    assert_eq!(
        state.move_log.last().unwrap().piece_captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );

    state.undo_move();
    assert_eq!(state.board, before.board);
    assert_eq!(state.en_passant, before.en_passant);
}

#[test]
fn castling_moves_rook_and_revokes_rights() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut state, &["e1g1"]);
    assert_eq!(
        state.piece_at(Square::parse("f1").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(state.piece_at(Square::parse("h1").unwrap()), None);
    assert!(!state.castling.wk && !state.castling.wq);
    assert!(state.castling.bk && state.castling.bq);

    play(&mut state, &["e8c8"]);
    assert_eq!(
        state.piece_at(Square::parse("d8").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );

    state.undo_move();
    state.undo_move();
    assert_eq!(state.castling, CastlingRights::ALL);
    assert_eq!(
        state.piece_at(Square::parse("h1").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(state.king_square(Color::White), Square::parse("e1").unwrap());
}

#[test]
fn capturing_a_home_rook_revokes_its_right() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut state, &["a1a8"]);
    assert!(!state.castling.bq);
    assert!(!state.castling.wq);
    assert!(state.castling.bk && state.castling.wk);
    state.undo_move();
    assert_eq!(state.castling, CastlingRights::ALL);
}

#[test]
fn promotion_and_undo_restore_pawn() {
    let mut state = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    play(&mut state, &["a7b8n"]);
    assert_eq!(
        state.piece_at(Square::parse("b8").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    state.undo_move();
    assert_eq!(
        state.piece_at(Square::parse("a7").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(
        state.piece_at(Square::parse("b8").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
}

#[test]
fn undo_on_empty_log_is_a_no_op() {
    let mut state = GameState::new();
    assert!(state.undo_move().is_none());
    assert!(state.undo_move().is_none());
    assert_eq!(state.board, GameState::new().board);
    assert_eq!(state.side_to_move, Color::White);
    assert_eq!(legal_moves(&state).len(), 20);
}

#[test]
fn counters_track_plies() {
    let mut state = GameState::new();
    play(&mut state, &["g1f3", "g8f6", "f3g1"]);
    assert_eq!(state.halfmove_clock, 3);
    assert_eq!(state.fullmove_number, 2);
    play(&mut state, &["e7e5"]);
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(state.fullmove_number, 3);
    state.undo_move();
    state.undo_move();
    assert_eq!(state.halfmove_clock, 2);
    assert_eq!(state.fullmove_number, 2);
    assert_eq!(state.move_log.len(), 2);
}

#[test]
fn attacked_squares() {
    let state = GameState::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(state.is_square_attacked(Square::parse("d1").unwrap(), Color::Black));
    assert!(state.is_square_attacked(Square::parse("h1").unwrap(), Color::Black));
    assert!(!state.is_square_attacked(Square::parse("e2").unwrap(), Color::Black));
    // The white king guards its neighbours.
    assert!(state.is_square_attacked(Square::parse("d2").unwrap(), Color::White));

    let pawns = GameState::from_fen("4k3/8/8/8/8/3p4/8/4K3 w - - 0 1").unwrap();
    assert!(pawns.is_square_attacked(Square::parse("e2").unwrap(), Color::Black));
    assert!(!pawns.is_square_attacked(Square::parse("d2").unwrap(), Color::Black));
}

#[test]
fn outcome_classification_is_exclusive() {
    assert_eq!(Outcome::classify(0, true), Outcome::Checkmate);
    assert_eq!(Outcome::classify(0, false), Outcome::Stalemate);
    assert_eq!(Outcome::classify(3, true), Outcome::Ongoing);
    assert_eq!(Outcome::classify(3, false), Outcome::Ongoing);
}

#[test]
fn piece_at_off_board_is_empty() {
    let state = GameState::new();
    assert_eq!(state.piece_at(Square::new(8, 0)), None);
    assert_eq!(state.piece_at(Square::new(0, 8)), None);
}
