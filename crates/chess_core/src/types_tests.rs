use super::*;
use std::collections::HashSet;

fn start_board() -> Board {
    crate::GameState::new().board
}

#[test]
fn square_names_follow_screen_orientation() {
    assert_eq!(Square::new(7, 0).to_string(), "a1");
    assert_eq!(Square::new(0, 7).to_string(), "h8");
    assert_eq!(Square::parse("e4"), Some(Square::new(4, 4)));
    assert_eq!(Square::parse("i1"), None);
    assert_eq!(Square::parse("e9"), None);
    assert_eq!(Square::parse("e"), None);
}

#[test]
fn offset_stays_on_board() {
    let a8 = Square::new(0, 0);
    assert_eq!(a8.offset(-1, 0), None);
    assert_eq!(a8.offset(0, -1), None);
    assert_eq!(a8.offset(1, 2), Some(Square::new(1, 2)));
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn move_equality_ignores_derived_fields() {
    let board = start_board();
    let intent = Move::new(Square::new(6, 4), Square::new(4, 4), &board).unwrap();
    let generated = Move {
        piece_captured: Some(Piece::new(Color::Black, PieceKind::Pawn)),
        is_en_passant: true,
        prior_castling: CastlingRights::ALL,
        prior_halfmove_clock: 12,
        ..intent
    };
    assert_eq!(intent, generated);

    let mut set = HashSet::new();
    set.insert(generated);
    assert!(set.contains(&intent));
}

#[test]
fn move_equality_respects_promotion() {
    let mut board: Board = [[None; 8]; 8];
    board[1][0] = Some(Piece::new(Color::White, PieceKind::Pawn));
    let queen = Move::new(Square::new(1, 0), Square::new(0, 0), &board).unwrap();
    assert_eq!(queen.promotion, Some(PieceKind::Queen));

    let knight = queen.with_promotion(PieceKind::Knight);
    assert_ne!(queen, knight);
}

#[test]
fn intent_from_empty_square_is_none() {
    let board = start_board();
    assert!(Move::new(Square::new(4, 4), Square::new(3, 4), &board).is_none());
}

#[test]
fn with_promotion_is_ignored_for_ordinary_moves() {
    let board = start_board();
    let mv = Move::new(Square::new(6, 4), Square::new(5, 4), &board)
        .unwrap()
        .with_promotion(PieceKind::Rook);
    assert_eq!(mv.promotion, None);
}

#[test]
fn piece_chars_round_trip() {
    for ch in "PNBRQKpnbrqk".chars() {
        assert_eq!(Piece::from_char(ch).map(Piece::to_char), Some(ch));
    }
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn rook_home_squares_revoke_matching_rights() {
    let mut rights = CastlingRights::ALL;
    rights.revoke_rook_home(Square::new(7, 7));
    assert!(!rights.wk && rights.wq && rights.bk && rights.bq);
    rights.revoke_rook_home(Square::new(0, 0));
    assert!(!rights.bq && rights.bk);
    rights.revoke_rook_home(Square::new(4, 4));
    assert!(rights.wq && rights.bk);
}

#[test]
fn off_board_squares_give_no_intent() {
    let board = start_board();
    let e2 = Square::new(6, 4);
    assert!(!Square::new(8, 4).is_on_board());
    assert!(Square::new(7, 7).is_on_board());
    assert!(Move::new(e2, Square::new(8, 4), &board).is_none());
    assert!(Move::new(e2, Square::new(4, 200), &board).is_none());
    assert!(Move::new(Square::new(9, 9), e2, &board).is_none());
}
